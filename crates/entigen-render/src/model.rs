use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::php::RenderOptions;

pub const DEFAULT_OUT_DIR: &str = "src/Entity";

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Prepended to every class name.
    pub prefix: String,
    /// Directory receiving one `<ClassName>.php` file per table.
    pub out_dir: PathBuf,
    pub render: RenderOptions,
    /// Render everything but write nothing.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            render: RenderOptions::default(),
            dry_run: false,
        }
    }
}

/// Summary of one generated entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEntity {
    pub table: String,
    pub class_name: String,
    pub path: PathBuf,
    pub field_count: usize,
    /// Fields whose SQL type had no mapping and fell back to `mixed`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opaque_fields: Vec<String>,
}

/// Report for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedEntity>,
    pub skipped: Vec<String>,
    pub dry_run: bool,
}
