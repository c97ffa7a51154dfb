use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use entigen_core::Platform;
use entigen_render::{GenerateOptions, GenerationReport};

use super::{RegistryError, RegistryResult};

/// Where the snapshot of a run came from.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunSource {
    /// Live database; only the redacted connection string is kept.
    Database { connection: String },
    Snapshot { path: PathBuf },
}

/// JSON report written by `generate --report`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub started_at: String,
    pub finished_at: String,
    pub platform: String,
    pub source: RunSource,
    pub prefix: String,
    pub namespace: String,
    pub out_dir: PathBuf,
    #[serde(flatten)]
    pub generation: GenerationReport,
}

impl RunReport {
    pub fn new(
        run_id: String,
        started_at: DateTime<Utc>,
        platform: &Platform,
        source: RunSource,
        opts: &GenerateOptions,
        generation: GenerationReport,
    ) -> Self {
        Self {
            run_id,
            started_at: started_at.to_rfc3339(),
            finished_at: Utc::now().to_rfc3339(),
            platform: platform.to_string(),
            source,
            prefix: opts.prefix.clone(),
            namespace: opts.render.namespace.clone(),
            out_dir: opts.out_dir.clone(),
            generation,
        }
    }
}

/// Write the report through a temporary file renamed into place.
pub fn write_report(path: &Path, report: &RunReport) -> RegistryResult<()> {
    let data = serde_json::to_vec_pretty(report)?;
    write_bytes_atomic(path, &data)
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> RegistryResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> RegistryResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| RegistryError::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
