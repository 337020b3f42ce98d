#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use flate2::{Compression, Crc};
use flate2::write::ZlibEncoder;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema through the CLI (test mode: config file untouched)
pub fn init_db(db_path: &str) {
    rwh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Init DB, register "Ana" (id 1) and add the night-shift record of March 2024
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rwh()
        .args(["--db", db_path, "employee", "add", "Ana"])
        .assert()
        .success();

    rwh()
        .args([
            "--db",
            db_path,
            "add",
            "--employee",
            "1",
            "--start",
            "2024-03-10 22:00",
            "--end",
            "2024-03-11 02:00",
            "--break",
            "30",
            "--note",
            "turno noturno",
        ])
        .assert()
        .success();
}

fn chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

/// Header fields of a hand-built PNG.
pub struct PngSpec<'a> {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlaced: bool,
    /// chunks written between IHDR and IDAT (PLTE, tRNS, ...)
    pub extra: &'a [(&'a [u8; 4], &'a [u8])],
}

/// Encode a PNG from already-filtered scanlines (filter byte included).
pub fn png_bytes_with(spec: &PngSpec, scanlines: &[u8]) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&spec.width.to_be_bytes());
    ihdr.extend_from_slice(&spec.height.to_be_bytes());
    ihdr.extend_from_slice(&[
        spec.bit_depth,
        spec.color_type,
        0,
        0,
        u8::from(spec.interlaced),
    ]);

    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(scanlines).expect("compress scanlines");
    let idat = enc.finish().expect("finish zlib stream");

    let mut out = vec![137, 80, 78, 71, 13, 10, 26, 10];
    chunk(&mut out, b"IHDR", &ihdr);
    for (kind, data) in spec.extra {
        chunk(&mut out, kind, data);
    }
    chunk(&mut out, b"IDAT", &idat);
    chunk(&mut out, b"IEND", &[]);
    out
}

/// 8-bit, non-interlaced PNG without ancillary chunks.
pub fn png_bytes(width: u32, height: u32, color_type: u8, scanlines: &[u8]) -> Vec<u8> {
    png_bytes_with(
        &PngSpec {
            width,
            height,
            bit_depth: 8,
            color_type,
            interlaced: false,
            extra: &[],
        },
        scanlines,
    )
}

/// Write PNG bytes to the temp dir and return the path
pub fn write_png(name: &str, bytes: &[u8]) -> String {
    let path = temp_out(name, "png");
    fs::write(&path, bytes).expect("write png");
    path
}

/// Write a 2x2 RGBA logo to the temp dir and return its path
pub fn write_test_logo(name: &str) -> String {
    let scanlines = [
        0, 255, 0, 0, 255, 0, 255, 0, 255, //
        0, 0, 0, 255, 128, 255, 255, 255, 0,
    ];
    write_png(name, &png_bytes(2, 2, 6, &scanlines))
}
