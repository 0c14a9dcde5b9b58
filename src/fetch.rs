//! Template archive download.

use crate::error::{Error, Result};
use log::debug;
use std::fs::File;
use std::io;
use std::path::Path;

/// Downloads `url` into the file at `dest`.
///
/// The response body is streamed to disk; redirects are followed and any
/// non-success status is an error. There are no retries: a failed fetch
/// aborts the run.
pub fn download_archive(url: &str, dest: &Path) -> Result<()> {
    debug!("Downloading '{}' to '{}'.", url, dest.display());

    let mut response = reqwest::blocking::get(url)?.error_for_status()?;
    let mut out = File::create(dest).map_err(Error::IoError)?;
    io::copy(&mut response, &mut out).map_err(Error::IoError)?;

    Ok(())
}
