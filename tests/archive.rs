//! Offline tests for the archive unpacker.

use std::fs::File;
use std::io::Write;

use tempfile::TempDir;

use nse_market_rs::archive::extract;
use nse_market_rs::error::NseError;

fn write_zip(path: &std::path::Path, members: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    let options = zip::write::SimpleFileOptions::default();

    for (name, bytes) in members {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
}

fn write_gz(path: &std::path::Path, bytes: &[u8]) {
    let mut enc = flate2::write::GzEncoder::new(
        File::create(path).unwrap(),
        flate2::Compression::default(),
    );
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap();
}

#[test]
fn zip_extracts_first_member_and_removes_source() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("cm01JAN2024bhav.csv.zip");
    write_zip(&zip_path, &[("cm01JAN2024bhav.csv", b"SYMBOL,CLOSE\nTCS,4000\n")]);

    let out = extract(&zip_path, dir.path(), None).unwrap();

    assert_eq!(out, dir.path().join("cm01JAN2024bhav.csv"));
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "SYMBOL,CLOSE\nTCS,4000\n"
    );
    assert!(!zip_path.exists(), "source archive should be deleted");
}

#[test]
fn zip_extracts_named_members_returning_the_last() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("PR010124.zip");
    write_zip(
        &zip_path,
        &[("Pd010124.csv", b"a"), ("Gl010124.csv", b"b"), ("HL010124.csv", b"c")],
    );

    let out = extract(
        &zip_path,
        dir.path(),
        Some(&["Pd010124.csv", "HL010124.csv"]),
    )
    .unwrap();

    assert_eq!(out, dir.path().join("HL010124.csv"));
    assert!(dir.path().join("Pd010124.csv").exists());
    // Unrequested member stays packed.
    assert!(!dir.path().join("Gl010124.csv").exists());
}

#[test]
fn gzip_strips_suffix() {
    let dir = TempDir::new().unwrap();
    let gz_path = dir.path().join("NSE_CM_security_01012024.csv.gz");
    write_gz(&gz_path, b"SYMBOL,BAND\nTCS,20\n");

    let out = extract(&gz_path, dir.path(), None).unwrap();

    assert_eq!(out, dir.path().join("NSE_CM_security_01012024.csv"));
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "SYMBOL,BAND\nTCS,20\n"
    );
    assert!(!gz_path.exists());
}

#[test]
fn unknown_suffix_is_rejected_and_source_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.rar");
    std::fs::write(&path, b"whatever").unwrap();

    let err = extract(&path, dir.path(), None).unwrap_err();
    assert!(matches!(err, NseError::UnsupportedFormat(_)));
    assert!(path.exists(), "source must survive a failed extraction");
}

#[test]
fn corrupt_zip_keeps_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.zip");
    std::fs::write(&path, b"this is not a zip").unwrap();

    assert!(extract(&path, dir.path(), None).is_err());
    assert!(path.exists());
}
