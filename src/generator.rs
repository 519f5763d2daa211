//! Orchestrates reading the HTML entry point, extracting the bundle and writing directives.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::bundle::directives::render_embedded_assets;
use crate::bundle::output::{WriteOutcome, is_up_to_date, write_generated_source};
use crate::bundle::reference::{BundleReference, require_bundle_reference};
use crate::error::{GenerateError, GenerateResult};
use crate::layout::EmbedLayout;

/// Everything produced by a single generator run, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct GeneratedAssets {
  /// Bundle filename extracted from the HTML document.
  pub bundle: BundleReference,
  /// Rendered source fragment.
  pub source: String,
  /// Destination of the rendered fragment.
  pub output_path: PathBuf,
  /// File system paths that should trigger rerunning a build script when changed.
  pub rerun_paths: Vec<PathBuf>,
}

impl GeneratedAssets {
  /// Print `cargo:rerun-if-changed` lines for use from a `build.rs`.
  pub fn emit_rerun_directives(&self) {
    for path in &self.rerun_paths {
      println!("cargo:rerun-if-changed={}", path.display());
    }
  }
}

/// High-level helper that turns an HTML entry point into embedding directives.
pub struct EmbedGenerator {
  layout: EmbedLayout,
  config_path: Option<PathBuf>,
}

impl EmbedGenerator {
  /// Create a generator for the provided layout.
  pub fn new(layout: EmbedLayout) -> Self {
    Self {
      layout,
      config_path: None,
    }
  }

  /// Record the configuration file the layout came from so it is reported as a rerun path.
  pub fn with_config_path(mut self, path: PathBuf) -> Self {
    self.config_path = Some(path);
    self
  }

  /// Read the HTML input, extract the bundle reference and render the fragment.
  ///
  /// Nothing is written; a missing reference fails here, before any output exists.
  pub fn generate(&self) -> GenerateResult<GeneratedAssets> {
    let index_path = self.layout.index_html_path();
    debug!(path = %index_path.display(), "reading HTML entry point");
    let html = fs::read_to_string(&index_path)
      .map_err(|source| GenerateError::io("read", &index_path, source))?;

    let bundle = require_bundle_reference(&html, &self.layout.asset_url_prefix, &index_path)?;
    info!(bundle = %bundle, "detected JS bundle");

    let source = render_embedded_assets(&self.layout, &bundle);

    let mut rerun_paths = vec![index_path];
    if let Some(config_path) = &self.config_path {
      rerun_paths.push(config_path.clone());
    }

    Ok(GeneratedAssets {
      bundle,
      source,
      output_path: self.layout.output_path(),
      rerun_paths,
    })
  }

  /// Generate the fragment and write it to the configured output path.
  pub fn run(&self) -> GenerateResult<(GeneratedAssets, WriteOutcome)> {
    let generated = self.generate()?;
    let outcome = self.write(&generated)?;
    Ok((generated, outcome))
  }

  /// Write a previously generated fragment to its output path.
  pub fn write(&self, generated: &GeneratedAssets) -> GenerateResult<WriteOutcome> {
    let outcome = write_generated_source(&generated.output_path, &generated.source)?;
    match outcome {
      WriteOutcome::Written => {
        info!(path = %generated.output_path.display(), "wrote embedded asset directives")
      }
      WriteOutcome::Unchanged => {
        debug!(path = %generated.output_path.display(), "embedded asset directives unchanged")
      }
    }
    Ok(outcome)
  }

  /// Generate the fragment and report whether the output on disk already matches it.
  pub fn check(&self) -> GenerateResult<(GeneratedAssets, bool)> {
    let generated = self.generate()?;
    let up_to_date = is_up_to_date(&generated.output_path, &generated.source)?;
    Ok((generated, up_to_date))
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;
  use crate::config::ProjectConfig;
  use tempfile::tempdir;

  fn layout(root: &Path) -> EmbedLayout {
    let mut layout = ProjectConfig::default().into_layout(root);
    layout.index_html = "www/index.html".into();
    layout.asset_dir = "www/assets".into();
    layout.output = "embedded_assets.cpp".into();
    layout
  }

  fn write_index(root: &Path, html: &str) {
    fs::create_dir_all(root.join("www")).unwrap();
    fs::write(root.join("www/index.html"), html).unwrap();
  }

  #[test]
  fn run_writes_directives_and_reports_rerun_paths() {
    let dir = tempdir().unwrap();
    write_index(dir.path(), r#"<script src="/assets/main.a1b2c3.js"></script>"#);

    let generator = EmbedGenerator::new(layout(dir.path()))
      .with_config_path(dir.path().join("embed.config.json"));
    let (generated, outcome) = generator.run().unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(generated.bundle.file_name(), "main.a1b2c3.js");
    assert_eq!(
      generated.rerun_paths,
      vec![
        dir.path().join("www/index.html"),
        dir.path().join("embed.config.json"),
      ]
    );

    let written = fs::read_to_string(dir.path().join("embedded_assets.cpp")).unwrap();
    assert!(written.contains("INCBIN(index_html, \"www/index.html\");"));
    assert!(written.contains("INCBIN(main_js, \"www/assets/main.a1b2c3.js\");"));
  }

  #[test]
  fn missing_html_is_io_error() {
    let dir = tempdir().unwrap();
    let err = EmbedGenerator::new(layout(dir.path())).run().unwrap_err();
    assert!(matches!(err, GenerateError::Io { action: "read", .. }));
  }

  #[test]
  fn missing_reference_leaves_existing_output_untouched() {
    let dir = tempdir().unwrap();
    write_index(dir.path(), "<html><body>no scripts</body></html>");
    let output = dir.path().join("embedded_assets.cpp");
    fs::write(&output, "previous").unwrap();

    let err = EmbedGenerator::new(layout(dir.path())).run().unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
  }

  #[test]
  fn check_detects_stale_output() {
    let dir = tempdir().unwrap();
    write_index(dir.path(), r#"<script src="/assets/a.js"></script>"#);
    let generator = EmbedGenerator::new(layout(dir.path()));

    let (_, up_to_date) = generator.check().unwrap();
    assert!(!up_to_date);
    assert!(!dir.path().join("embedded_assets.cpp").exists());

    generator.run().unwrap();
    let (_, up_to_date) = generator.check().unwrap();
    assert!(up_to_date);

    write_index(dir.path(), r#"<script src="/assets/b.js"></script>"#);
    let (_, up_to_date) = generator.check().unwrap();
    assert!(!up_to_date);
  }
}
