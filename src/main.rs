use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_assets_gen::config::{ProjectConfig, default_config_path};
use embedded_assets_gen::logging;
use embedded_assets_gen::{EmbedGenerator, WriteOutcome};

#[derive(Debug, Parser)]
#[command(
  name = "embedded-assets-gen",
  version,
  about = "Emit incbin directives embedding the frontend index.html and its JS bundle."
)]
struct Cli {
  /// Directory the configured paths are relative to. Defaults to the current directory.
  #[arg(long)]
  root: Option<PathBuf>,

  /// Explicit configuration file. Defaults to `embed.config.json` in the root, if present.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Only verify that the generated file is up to date; never write it.
  #[arg(long)]
  check: bool,

  /// Show debug diagnostics on stderr.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  if let Err(err) = logging::init_logging(cli.verbose) {
    eprintln!("{err:#}");
  }

  match run(&cli) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<ExitCode> {
  let root = match &cli.root {
    Some(root) => root.clone(),
    None => std::env::current_dir().context("failed to resolve current directory")?,
  };

  let (config, config_path) = match &cli.config {
    Some(path) => (ProjectConfig::load(path)?, Some(path.clone())),
    None => {
      let candidate = default_config_path(&root);
      let found = candidate.is_file().then_some(candidate);
      (ProjectConfig::discover(&root), found)
    }
  };

  let mut generator = EmbedGenerator::new(config.into_layout(&root));
  if let Some(path) = config_path {
    generator = generator.with_config_path(path);
  }

  if cli.check {
    let (generated, up_to_date) = generator.check()?;
    println!("Detected JS filename: {}", generated.bundle);
    if !up_to_date {
      eprintln!("{} is out of date", generated.output_path.display());
      return Ok(ExitCode::FAILURE);
    }
    return Ok(ExitCode::SUCCESS);
  }

  let generated = generator.generate()?;
  println!("Detected JS filename: {}", generated.bundle);
  let outcome = generator.write(&generated)?;
  if outcome == WriteOutcome::Unchanged {
    tracing::info!("{} already up to date", generated.output_path.display());
  }
  Ok(ExitCode::SUCCESS)
}
