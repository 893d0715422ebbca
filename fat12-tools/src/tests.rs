use fat12::volume::root::DIR_ENTRY_LEN;

use crate::DiskImage;
use crate::report::{self, Radix};

const SECTOR: usize = 512;

fn boot_sector(sectors_per_fat: u16, root_entries: u16) -> [u8; SECTOR] {
    let mut sector = [0; SECTOR];
    sector[..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
    sector[3..11].copy_from_slice(b"MSDOS5.0");
    sector[11..13].copy_from_slice(&(SECTOR as u16).to_le_bytes());
    sector[13] = 1;
    sector[14..16].copy_from_slice(&1u16.to_le_bytes());
    sector[16] = 2;
    sector[17..19].copy_from_slice(&root_entries.to_le_bytes());
    sector[19..21].copy_from_slice(&2880u16.to_le_bytes());
    sector[21] = 0xF0;
    sector[22..24].copy_from_slice(&sectors_per_fat.to_le_bytes());
    sector[24..26].copy_from_slice(&18u16.to_le_bytes());
    sector[26..28].copy_from_slice(&2u16.to_le_bytes());
    sector
}

/// One sector per FAT, 16 root entries
fn small_image(slots: &[[u8; DIR_ENTRY_LEN]]) -> DiskImage {
    let root_offset = 3 * SECTOR;
    let mut data = vec![0; root_offset + 16 * DIR_ENTRY_LEN];
    data[..SECTOR].copy_from_slice(&boot_sector(1, 16));
    for (dst, src) in data[root_offset..]
        .chunks_exact_mut(DIR_ENTRY_LEN)
        .zip(slots)
    {
        dst.copy_from_slice(src);
    }
    DiskImage::new(data)
}

fn slot(name: &[u8; 11], attr: u8, time: u16, date: u16, size: u32) -> [u8; DIR_ENTRY_LEN] {
    let mut slot = [0; DIR_ENTRY_LEN];
    slot[..11].copy_from_slice(name);
    slot[11] = attr;
    slot[22..24].copy_from_slice(&time.to_le_bytes());
    slot[24..26].copy_from_slice(&date.to_le_bytes());
    slot[28..32].copy_from_slice(&size.to_le_bytes());
    slot
}

fn lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[test]
fn boot_sector_decimal() {
    let image = DiskImage::new(boot_sector(9, 224).to_vec());
    let bpb = image.boot_sector().unwrap();

    assert_eq!(
        lines(&[
            "                    Name:   MSDOS5.0",
            "            Bytes/Sector:   512",
            "         Sectors/Cluster:   1",
            "        Reserved Sectors:   1",
            "          Number of FATs:   2",
            "  Root Directory entries:   224",
            "         Logical sectors:   2880",
            "       Medium descriptor:   0x00f0",
            "             Sectors/FAT:   9",
            "           Sectors/Track:   18",
            "         Number of heads:   2",
            "Number of Hidden Sectors:   0",
        ]),
        report::boot_sector(&bpb, Radix::default()).to_string()
    );
}

#[test]
fn boot_sector_hex() {
    let image = DiskImage::new(boot_sector(9, 224).to_vec());
    let bpb = image.boot_sector().unwrap();

    assert_eq!(
        lines(&[
            "                    Name:   MSDOS5.0",
            "            Bytes/Sector:   0x0200",
            "         Sectors/Cluster:   0x01",
            "        Reserved Sectors:   0x0001",
            "          Number of FATs:   0x02",
            "  Root Directory entries:   0x00e0",
            "         Logical sectors:   0x0b40",
            "       Medium descriptor:   0xf0",
            "             Sectors/FAT:   0x0009",
            "           Sectors/Track:   0x0012",
            "         Number of heads:   0x0002",
            "Number of Hidden Sectors:   0x0000",
        ]),
        report::boot_sector(&bpb, Radix::Hex).to_string()
    );
}

#[test]
fn listing() {
    let image = small_image(&[
        slot(b"IO      SYS", 0x27, 5 << 11, (11 << 9) | (4 << 5) | 9, 40_774),
        slot(b"\xE5ELETED TXT", 0x20, 0, 0, 99),
        slot(
            b"README  TXT",
            0x21,
            (23 << 11) | (59 << 5) | 29,
            (43 << 9) | (10 << 5) | 15,
            0x0002_0100,
        ),
        slot(b"KERNEL     ", 0x00, 0, 0, 0),
    ]);
    let bpb = image.boot_sector().unwrap();
    let entries = image.root_entries(&bpb).unwrap();

    assert_eq!(
        lines(&[
            "There are 16 entries",
            "Filename\tAttrib\tTime\t\tDate\t\tSize",
            "IO.SYS\tRHSA\t05:00:00\t1991/04/09\t40774",
            "README.TXT\tRA\t23:59:58\t2023/10/15\t131328",
            "KERNEL\t\t00:00:00\t1980/00/00\t0",
            "(R)ead Only (H)idden (S)ystem (A)rchive",
        ]),
        report::listing(16, entries).to_string()
    );
}

#[test]
fn listing_empty_directory() {
    let image = small_image(&[]);
    let bpb = image.boot_sector().unwrap();
    let listing = report::listing(16, image.root_entries(&bpb).unwrap());

    assert_eq!(
        lines(&[
            "There are 16 entries",
            "Filename\tAttrib\tTime\t\tDate\t\tSize",
            "(R)ead Only (H)idden (S)ystem (A)rchive",
        ]),
        listing.to_string()
    );
    // 可重复渲染
    assert_eq!(listing.to_string(), listing.to_string());
}

#[test]
fn root_outside_image() {
    let image = DiskImage::new(boot_sector(1, 16).to_vec());
    let bpb = image.boot_sector().unwrap();

    assert_eq!(SECTOR, image.len());
    assert!(matches!(
        image.root_entries(&bpb),
        Err(fat12::Error::UnrecoverableGeometry {
            offset: 1536,
            len: 512,
            available: 512,
        })
    ));
}

#[test]
fn empty_image() {
    let image = DiskImage::new(Vec::new());

    assert!(image.is_empty());
    assert!(matches!(
        image.boot_sector(),
        Err(fat12::Error::TruncatedBuffer {
            required: 30,
            actual: 0,
        })
    ));
}
