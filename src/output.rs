//! Output serialization for analysis results.

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Serializes `value` as a single JSON document at `path`.
///
/// Replaces any previous file contents. There is no partial-write
/// protection; a crash mid-write requires re-running the job.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON output");

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}
