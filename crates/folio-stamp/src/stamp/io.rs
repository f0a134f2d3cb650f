//! File I/O around the stamping engine

use super::stamp_pdf;
use crate::options::FolioConfig;
use crate::types::*;
use std::path::Path;

/// Read a PDF file into memory
pub async fn load_pdf_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    Ok(bytes)
}

/// Write stamped PDF bytes to disk
pub async fn save_pdf_bytes(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}

/// Stamp `input` and write the result to `output`.
///
/// Returns the size of the written file in bytes.
pub async fn stamp_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &FolioConfig,
    seed: Option<u64>,
) -> Result<usize> {
    let bytes = load_pdf_bytes(&input).await?;
    log::info!("Read {} ({} bytes)", input.as_ref().display(), bytes.len());

    let stamped = stamp_pdf(bytes, config.clone(), seed).await?;
    save_pdf_bytes(&stamped, &output).await?;
    log::info!("Wrote {} ({} bytes)", output.as_ref().display(), stamped.len());

    Ok(stamped.len())
}
