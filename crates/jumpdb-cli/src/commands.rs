use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use jumpdb_cli::builder::DatabaseBuilder;
use jumpdb_cli::types::BuildReport;
use jumpdb_model::PipelineConfig;

use crate::cli::{BuildArgs, HeadersArgs};
use crate::summary::apply_table_style;

pub fn run_build(args: &BuildArgs) -> Result<BuildReport> {
    let config = load_config(args.config.as_deref())?;
    if args.dry_run {
        info!("dry run, no documents will be written");
    }
    DatabaseBuilder::new(config, &args.output_dir)
        .with_dry_run(args.dry_run)
        .build(&args.input_root)
}

pub fn run_headers(args: &HeadersArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Header", "Field"]);
    apply_table_style(&mut table);
    for (label, field) in &config.headers {
        let label = if label.chars().all(|ch| ch.is_ascii_digit()) {
            format!("(column {label})")
        } else {
            label.clone()
        };
        table.add_row(vec![label, field.to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::load(path)
                .with_context(|| format!("load config {}", path.display()))?;
            info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}
