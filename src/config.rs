//! Project configuration loader describing where the frontend build lands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenerateError, GenerateResult};
use crate::layout::{DirectiveKind, EmbedLayout, IncbinStyle};

/// File name looked up in the root directory when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "embed.config.json";

/// Discoverable project configuration describing input and output paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// HTML document produced by the frontend bundler.
  pub index_html: String,
  /// Directory holding the hashed bundle files.
  pub asset_dir: String,
  /// Generated source fragment consumed by the native build.
  pub output: String,
  /// URL prefix that precedes the bundle filename inside `src="..."`.
  pub asset_url_prefix: String,
  /// Header providing the embedding macros.
  pub header: String,
  /// Symbol naming style passed through `INCBIN_STYLE`.
  pub style: IncbinStyle,
  /// Inclusion macro used for both resources.
  pub directive: DirectiveKind,
  /// Symbol name of the embedded HTML document.
  pub index_symbol: String,
  /// Symbol name of the embedded JavaScript bundle.
  pub bundle_symbol: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      index_html: "../qt-app/www/index.html".into(),
      asset_dir: "../qt-app/www/assets".into(),
      output: "../qt-app/embedded_assets.cpp".into(),
      asset_url_prefix: "/assets/".into(),
      header: "incbin.h".into(),
      style: IncbinStyle::Snake,
      directive: DirectiveKind::Incbin,
      index_symbol: "index_html".into(),
      bundle_symbol: "main_js".into(),
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided root directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to the
  /// defaults, which mirror the layout of the native app checkout.
  pub fn discover(root: &Path) -> Self {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file, ignoring failures.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Read configuration from a file the caller explicitly asked for.
  ///
  /// Unlike [`ProjectConfig::from_path`] every failure is reported.
  pub fn load(path: &Path) -> GenerateResult<Self> {
    let content =
      fs::read_to_string(path).map_err(|source| GenerateError::io("read", path, source))?;
    serde_json::from_str(&content).map_err(|source| GenerateError::InvalidConfig {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Convert the configuration into an owned layout rooted at `root`.
  pub fn into_layout(self, root: &Path) -> EmbedLayout {
    EmbedLayout {
      root: root.to_path_buf(),
      index_html: self.index_html,
      asset_dir: self.asset_dir,
      output: self.output,
      asset_url_prefix: self.asset_url_prefix,
      header: self.header,
      style: self.style,
      directive: self.directive,
      index_symbol: self.index_symbol,
      bundle_symbol: self.bundle_symbol,
    }
  }
}

/// Path of the discoverable config file under `root`.
pub fn default_config_path(root: &Path) -> PathBuf {
  root.join(DEFAULT_CONFIG_FILE)
}
