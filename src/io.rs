//! Line-oriented input and output files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::canonicalizer::canonical_set::render;

/// Reads `path` as newline-delimited text, trimming each line and dropping
/// blank ones. Invalid UTF-8 is replaced, not rejected.
pub async fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Writes each line followed by `\n`.
///
/// The data goes to a hidden sibling file first and is renamed over `path`
/// once complete.
pub async fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let tmp = temp_path(path);

    if let Err(err) = write_file(&tmp, lines).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(err.context(format!("Failed to write output file: {}", path.display())));
    }

    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to move output into place: {}", path.display()))?;

    debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

async fn write_file(path: &Path, lines: &[String]) -> Result<()> {
    let file = fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render(lines).as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
