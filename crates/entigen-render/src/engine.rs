use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use entigen_core::SchemaSnapshot;

use crate::entity::EntityClass;
use crate::errors::RenderError;
use crate::model::{GenerateOptions, GeneratedEntity, GenerationReport};
use crate::output::EntityWriter;
use crate::php::render_entity;

/// Per-table event emitted just before a table is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    Skipping { table: &'a str },
    Generating { table: &'a str, class_name: &'a str },
}

enum Step<'a> {
    Skip(&'a str),
    Write(EntityClass, PathBuf),
}

impl Step<'_> {
    fn table(&self) -> &str {
        match self {
            Step::Skip(table) => table,
            Step::Write(class, _) => &class.table_name,
        }
    }
}

/// Generate one entity class file per table of the snapshot.
pub fn generate_entities(
    snapshot: &SchemaSnapshot,
    opts: &GenerateOptions,
) -> Result<GenerationReport, RenderError> {
    generate_entities_with(snapshot, opts, |_| Ok(()))
}

/// Like [`generate_entities`], reporting every table to `on_progress`.
///
/// Retained and skipped tables are visited together in name order. Class
/// names and file paths of every table are resolved before anything is
/// written, so a collision or an unusable class name leaves the output
/// directory untouched.
pub fn generate_entities_with<F>(
    snapshot: &SchemaSnapshot,
    opts: &GenerateOptions,
    mut on_progress: F,
) -> Result<GenerationReport, RenderError>
where
    F: FnMut(Progress<'_>) -> io::Result<()>,
{
    let writer = EntityWriter::new(&opts.out_dir, opts.dry_run);
    let steps = plan(snapshot, opts, &writer)?;

    let mut report = GenerationReport {
        generated: Vec::with_capacity(snapshot.tables.len()),
        skipped: snapshot.skipped_tables.clone(),
        dry_run: opts.dry_run,
    };

    for step in steps {
        let (class, path) = match step {
            Step::Skip(table) => {
                on_progress(Progress::Skipping { table })?;
                continue;
            }
            Step::Write(class, path) => (class, path),
        };

        on_progress(Progress::Generating {
            table: &class.table_name,
            class_name: &class.class_name,
        })?;
        let source = render_entity(&class, &opts.render);
        writer.write(&class.class_name, &source)?;

        let opaque_fields: Vec<String> =
            class.opaque_fields().map(|field| field.name.clone()).collect();
        if !opaque_fields.is_empty() {
            tracing::warn!(
                event = "opaque_fields",
                table = %class.table_name,
                fields = ?opaque_fields
            );
        }
        tracing::info!(
            event = "entity_written",
            table = %class.table_name,
            class = %class.class_name,
            path = %path.display(),
            dry_run = opts.dry_run
        );

        report.generated.push(GeneratedEntity {
            table: class.table_name,
            class_name: class.class_name,
            path,
            field_count: class.fields.len(),
            opaque_fields,
        });
    }

    Ok(report)
}

fn plan<'a>(
    snapshot: &'a SchemaSnapshot,
    opts: &GenerateOptions,
    writer: &EntityWriter,
) -> Result<Vec<Step<'a>>, RenderError> {
    let mut steps: Vec<Step<'a>> = snapshot
        .skipped_tables
        .iter()
        .map(|table| Step::Skip(table.as_str()))
        .collect();
    for table in &snapshot.tables {
        let class = EntityClass::from_table(&snapshot.platform, &opts.prefix, table);
        let path = writer.path_for(&class.class_name)?;
        steps.push(Step::Write(class, path));
    }
    steps.sort_by(|a, b| a.table().cmp(b.table()));

    check_collisions(&steps)?;
    Ok(steps)
}

fn check_collisions(steps: &[Step<'_>]) -> Result<(), RenderError> {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    for step in steps {
        let Step::Write(class, _) = step else {
            continue;
        };
        if let Some(first) = seen.insert(&class.class_name, &class.table_name) {
            return Err(RenderError::ClassNameCollision {
                class_name: class.class_name.clone(),
                first: first.to_string(),
                second: class.table_name.clone(),
            });
        }
    }
    Ok(())
}
