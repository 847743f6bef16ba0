//! Archive extraction for downloaded reports.
//!
//! NSE publishes reports as ZIP archives (bhavcopies) or as single-file
//! gzip streams. [`extract`] unpacks either into a destination folder and
//! removes the compressed original on success.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use zip::ZipArchive;

use crate::error::{NseError, Result};

/// Extract `file` into `folder` and return the path of the extracted file.
///
/// - ZIP archives: extracts the first member by default, or each name in
///   `members` when supplied; returns the path of the last member written.
/// - `.gz` streams: decompresses into a sibling file with the `.gz` suffix
///   stripped (`folder` is ignored, matching how the exchange names these).
///
/// The compressed original is deleted only after successful extraction, so
/// a failed call leaves the input in place for inspection.
pub fn extract(file: &Path, folder: &Path, members: Option<&[&str]>) -> Result<PathBuf> {
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let out = match ext.as_deref() {
        Some("zip") => unzip(file, folder, members)?,
        Some("gz") => gunzip(file)?,
        _ => return Err(NseError::UnsupportedFormat(file.to_path_buf())),
    };

    fs::remove_file(file)?;
    Ok(out)
}

fn unzip(file: &Path, folder: &Path, members: Option<&[&str]>) -> Result<PathBuf> {
    let mut archive = ZipArchive::new(File::open(file)?)?;

    let names: Vec<String> = match members {
        Some(names) => names.iter().map(|s| (*s).to_owned()).collect(),
        None => {
            let first = archive
                .file_names()
                .next()
                .ok_or_else(|| NseError::Zip(zip::result::ZipError::FileNotFound))?;
            vec![first.to_owned()]
        }
    };

    let mut last = PathBuf::new();

    for name in &names {
        let mut entry = archive.by_name(name)?;
        let dest = folder.join(sanitize_member_name(name));

        let mut out = File::create(&dest)?;
        io::copy(&mut entry, &mut out)?;
        tracing::debug!(member = %name, dest = %dest.display(), "extracted zip member");

        last = dest;
    }

    Ok(last)
}

fn gunzip(file: &Path) -> Result<PathBuf> {
    // cm_mii_security_report ships as e.g. `CM_MII_SECURITY_FILE.csv.gz`;
    // stripping the suffix leaves the real file name.
    let dest = file.with_extension("");

    let mut decoder = GzDecoder::new(File::open(file)?);
    let mut out = File::create(&dest)?;
    io::copy(&mut decoder, &mut out)?;

    Ok(dest)
}

/// Keep only the file-name component of a ZIP member path. NSE archives are
/// flat, but a hostile path must not escape the destination folder.
fn sanitize_member_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}
