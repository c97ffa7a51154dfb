mod config;
mod registry;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use entigen_core::{
    ConnectionInfo, Error as CoreError, SchemaSnapshot, TableFilter, load_snapshot,
    validate_snapshot, write_snapshot,
};
use entigen_introspect::{IntrospectOptions, connect, introspect};
use entigen_render::{
    GenerateOptions, GenerationReport, Progress, RenderError, RenderOptions, generate_entities_with,
};
use thiserror::Error;
use uuid::Uuid;

use config::{ConfigError, EntigenConfig, load_config};
use registry::{RunReport, RunSource, init_logging, write_report};

const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "entigen", version, about = "Generate entity classes from a database schema")]
struct Cli {
    /// Config file (defaults to ./entigen.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append JSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one entity class per table.
    Generate(GenerateArgs),
    /// Write a schema snapshot for offline generation.
    Introspect(IntrospectArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Database connection string (falls back to $DATABASE_URL, then the config file).
    #[arg(long, value_name = "CONNECTION_STRING")]
    conn: Option<String>,
    /// Schema to read tables from.
    #[arg(long, value_name = "SCHEMA")]
    schema: Option<String>,
    /// Table to ignore; repeat or separate with commas.
    #[arg(short = 't', long = "ignore-tables", value_name = "TABLE", value_delimiter = ',')]
    ignore_tables: Vec<String>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Prefix prepended to every class name.
    prefix: Option<String>,
    #[command(flatten)]
    source: SourceArgs,
    /// Generate from a snapshot file instead of a live database.
    #[arg(long, value_name = "FILE", conflicts_with = "conn")]
    snapshot: Option<PathBuf>,
    /// Directory receiving the class files.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Namespace of the generated classes.
    #[arg(long)]
    namespace: Option<String>,
    /// Render without writing any file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Write a JSON run report to this path.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct IntrospectArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output path for the snapshot JSON.
    #[arg(long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args, config).await,
        Command::Introspect(args) => run_introspect(args, config).await,
    }
}

async fn run_generate(args: GenerateArgs, config: EntigenConfig) -> Result<(), CliError> {
    let run_id = Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let timer = Instant::now();
    tracing::info!(event = "run_started", run_id = %run_id, command = "generate");

    let filter = merged_filter(&config, &args.source.ignore_tables);
    let (snapshot, source) = match &args.snapshot {
        Some(path) => {
            let mut snapshot = load_snapshot(path)?;
            snapshot.apply_filter(&filter);
            tracing::info!(event = "snapshot_loaded", path = %path.display());
            (
                snapshot,
                RunSource::Snapshot {
                    path: path.clone(),
                },
            )
        }
        None => {
            let (snapshot, info) = introspect_live(&args.source, &config, filter).await?;
            (
                snapshot,
                RunSource::Database {
                    connection: info.redacted,
                },
            )
        }
    };

    let opts = generate_options(&args, &config);
    let generation = generate_with_progress(&snapshot, &opts, &mut io::stdout())?;

    if let Some(path) = &args.report {
        let report = RunReport::new(
            run_id.clone(),
            started_at,
            &snapshot.platform,
            source,
            &opts,
            generation,
        );
        write_report(path, &report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        status = "success",
        duration_ms = timer.elapsed().as_millis()
    );
    Ok(())
}

/// Generate the entities, printing one line per table just before it is
/// handled and a closing line once every table is done.
fn generate_with_progress<W: Write>(
    snapshot: &SchemaSnapshot,
    opts: &GenerateOptions,
    out: &mut W,
) -> Result<GenerationReport, CliError> {
    let generation = generate_entities_with(snapshot, opts, |progress| match progress {
        Progress::Skipping { table } => {
            writeln!(out, "Skipping entity generation for table: {table}")
        }
        Progress::Generating { table, .. } => {
            writeln!(out, "Generating entity for table: {table}")?;
            out.flush()
        }
    })?;

    if generation.dry_run {
        writeln!(
            out,
            "Dry run finished: {} entities rendered, no files written.",
            generation.generated.len()
        )?;
    } else {
        writeln!(out, "Entities generated successfully!")?;
    }
    Ok(generation)
}

async fn run_introspect(args: IntrospectArgs, config: EntigenConfig) -> Result<(), CliError> {
    let filter = merged_filter(&config, &args.source.ignore_tables);
    let (snapshot, _) = introspect_live(&args.source, &config, filter).await?;

    write_snapshot(&args.out, &snapshot)?;
    tracing::info!(event = "snapshot_written", path = %args.out.display());
    println!(
        "Snapshot of {} tables written to {}",
        snapshot.tables.len(),
        args.out.display()
    );
    Ok(())
}

async fn introspect_live(
    source: &SourceArgs,
    config: &EntigenConfig,
    filter: TableFilter,
) -> Result<(SchemaSnapshot, ConnectionInfo), CliError> {
    let conn = resolve_connection(
        source.conn.clone(),
        std::env::var(DATABASE_URL_ENV).ok(),
        config,
    )?;
    let info = ConnectionInfo::parse(&conn);
    tracing::info!(event = "connecting", connection = %info.redacted);

    let adapter = connect(&info, &conn).await?;
    let opts = IntrospectOptions {
        schema: source.schema.clone().or_else(|| config.database.schema.clone()),
        filter,
    };

    tracing::info!(event = "introspection_started", platform = %adapter.platform());
    let snapshot = introspect(adapter.as_ref(), &opts).await?;
    validate_snapshot(&snapshot)?;
    tracing::info!(
        event = "introspection_finished",
        tables = snapshot.tables.len(),
        skipped = snapshot.skipped_tables.len()
    );

    Ok((snapshot, info))
}

/// Flag, then environment, then config file.
fn resolve_connection(
    flag: Option<String>,
    env: Option<String>,
    config: &EntigenConfig,
) -> Result<String, CliError> {
    flag.or(env)
        .or_else(|| config.database.url.clone())
        .filter(|conn| !conn.trim().is_empty())
        .ok_or_else(|| {
            CliError::InvalidConfig(format!(
                "connection string is required: pass --conn, set {DATABASE_URL_ENV}, or use --snapshot"
            ))
        })
}

fn merged_filter(config: &EntigenConfig, cli_tables: &[String]) -> TableFilter {
    let mut filter = TableFilter::new(config.generate.ignore_tables.iter().cloned());
    filter.extend(cli_tables.iter().cloned());
    filter
}

fn generate_options(args: &GenerateArgs, config: &EntigenConfig) -> GenerateOptions {
    let defaults = GenerateOptions::default();
    GenerateOptions {
        prefix: args
            .prefix
            .clone()
            .or_else(|| config.generate.prefix.clone())
            .unwrap_or(defaults.prefix),
        out_dir: args
            .out_dir
            .clone()
            .or_else(|| config.generate.out_dir.clone())
            .unwrap_or(defaults.out_dir),
        render: RenderOptions {
            namespace: args
                .namespace
                .clone()
                .or_else(|| config.generate.namespace.clone())
                .unwrap_or(defaults.render.namespace),
        },
        dry_run: args.dry_run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).expect("parse arguments")
    }

    fn generate_args(cli: Cli) -> GenerateArgs {
        match cli.command {
            Command::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn parses_prefix_and_repeated_ignore_tables() {
        let args = generate_args(parse(&[
            "entigen",
            "generate",
            "Legacy",
            "-t",
            "sessions",
            "--ignore-tables",
            "cache,locks",
        ]));
        assert_eq!(args.prefix.as_deref(), Some("Legacy"));
        assert_eq!(args.source.ignore_tables, vec!["sessions", "cache", "locks"]);
        assert!(!args.dry_run);
    }

    #[test]
    fn snapshot_conflicts_with_connection() {
        let result = Cli::try_parse_from([
            "entigen",
            "generate",
            "--snapshot",
            "schema.json",
            "--conn",
            "postgres://localhost/db",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn introspect_requires_output_path() {
        assert!(Cli::try_parse_from(["entigen", "introspect", "--conn", "mysql://x/y"]).is_err());
    }

    #[test]
    fn connection_precedence_is_flag_env_config() {
        let mut config = EntigenConfig::default();
        config.database.url = Some("mysql://config/db".to_string());

        let conn = resolve_connection(
            Some("postgres://flag/db".to_string()),
            Some("postgres://env/db".to_string()),
            &config,
        )
        .expect("flag");
        assert_eq!(conn, "postgres://flag/db");

        let conn = resolve_connection(None, Some("postgres://env/db".to_string()), &config)
            .expect("env");
        assert_eq!(conn, "postgres://env/db");

        let conn = resolve_connection(None, None, &config).expect("config");
        assert_eq!(conn, "mysql://config/db");

        assert!(matches!(
            resolve_connection(None, None, &EntigenConfig::default()),
            Err(CliError::InvalidConfig(_))
        ));
    }

    fn snapshot_with(tables: &[&str]) -> SchemaSnapshot {
        let mut snapshot = SchemaSnapshot::new(entigen_core::Platform::Postgres, None);
        snapshot.tables = tables
            .iter()
            .map(|name| entigen_core::Table {
                name: name.to_string(),
                columns: vec![entigen_core::Column {
                    ordinal_position: 1,
                    name: "id".to_string(),
                    data_type: "integer".to_string(),
                    length: None,
                    is_nullable: false,
                    is_autoincrement: true,
                    comment: None,
                }],
            })
            .collect();
        snapshot
    }

    fn temp_out_dir() -> PathBuf {
        std::env::temp_dir().join(format!("entigen_cli_{}", Uuid::new_v4()))
    }

    #[test]
    fn prints_one_line_per_table_in_table_order() {
        let out_dir = temp_out_dir();
        let mut snapshot = snapshot_with(&["alpha", "beta", "gamma"]);
        snapshot.apply_filter(&TableFilter::new(["beta"]));
        let opts = GenerateOptions {
            out_dir: out_dir.clone(),
            ..GenerateOptions::default()
        };

        let mut out = Vec::new();
        generate_with_progress(&snapshot, &opts, &mut out).expect("generate");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Generating entity for table: alpha\n\
             Skipping entity generation for table: beta\n\
             Generating entity for table: gamma\n\
             Entities generated successfully!\n"
        );
        assert!(out_dir.join("Alpha.php").exists());
        assert!(out_dir.join("Gamma.php").exists());
        let _ = std::fs::remove_dir_all(&out_dir);
    }

    #[test]
    fn dry_run_says_nothing_was_written() {
        let out_dir = temp_out_dir();
        let opts = GenerateOptions {
            out_dir: out_dir.clone(),
            dry_run: true,
            ..GenerateOptions::default()
        };

        let mut out = Vec::new();
        generate_with_progress(&snapshot_with(&["orders"]), &opts, &mut out).expect("dry run");

        let printed = String::from_utf8(out).expect("utf8");
        assert_eq!(
            printed,
            "Generating entity for table: orders\n\
             Dry run finished: 1 entities rendered, no files written.\n"
        );
        assert!(!out_dir.exists());
    }

    #[test]
    fn invalid_class_name_writes_nothing_and_prints_nothing() {
        let out_dir = temp_out_dir();
        let opts = GenerateOptions {
            out_dir: out_dir.clone(),
            ..GenerateOptions::default()
        };

        let mut out = Vec::new();
        let result = generate_with_progress(&snapshot_with(&["alpha", "gamma/x"]), &opts, &mut out);

        assert!(matches!(
            result,
            Err(CliError::Render(RenderError::InvalidClassName(_)))
        ));
        assert!(out.is_empty());
        assert!(!out_dir.exists());
    }

    #[test]
    fn flags_override_config_and_ignore_lists_merge() {
        let mut config = EntigenConfig::default();
        config.generate.prefix = Some("FromConfig".to_string());
        config.generate.namespace = Some("Config\\Entity".to_string());
        config.generate.ignore_tables = vec!["migrations".to_string()];

        let args = generate_args(parse(&[
            "entigen",
            "generate",
            "--namespace",
            "Cli\\Entity",
            "-t",
            "sessions",
            "--snapshot",
            "schema.json",
        ]));
        let opts = generate_options(&args, &config);
        assert_eq!(opts.prefix, "FromConfig");
        assert_eq!(opts.render.namespace, "Cli\\Entity");
        assert_eq!(opts.out_dir, PathBuf::from("src/Entity"));

        let filter = merged_filter(&config, &args.source.ignore_tables);
        assert!(filter.is_ignored("migrations"));
        assert!(filter.is_ignored("sessions"));
    }
}
