//! Resolved description of the files the generator reads and writes.

use std::path::PathBuf;

use serde::Deserialize;

/// Symbol naming convention selected through `INCBIN_STYLE` in the generated fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncbinStyle {
  /// `INCBIN_STYLE_SNAKE`, producing `g_<name>_data` style symbols.
  #[default]
  Snake,
  /// `INCBIN_STYLE_CAMEL`, producing `g<Name>Data` style symbols.
  Camel,
}

impl IncbinStyle {
  /// Macro value assigned to `INCBIN_STYLE`.
  pub fn macro_name(self) -> &'static str {
    match self {
      Self::Snake => "INCBIN_STYLE_SNAKE",
      Self::Camel => "INCBIN_STYLE_CAMEL",
    }
  }
}

/// Inclusion macro used for each embedded resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
  /// Raw bytes via `INCBIN`.
  #[default]
  Incbin,
  /// NUL-terminated text via `INCTXT`.
  Inctxt,
}

impl DirectiveKind {
  /// Macro name emitted in front of each resource declaration.
  pub fn macro_name(self) -> &'static str {
    match self {
      Self::Incbin => "INCBIN",
      Self::Inctxt => "INCTXT",
    }
  }
}

/// Owned layout describing where the HTML, the bundled assets and the generated
/// fragment live, relative to a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedLayout {
  /// Directory every relative path below is resolved against.
  pub root: PathBuf,
  /// HTML document referencing the bundle. Also used verbatim in the first directive.
  pub index_html: String,
  /// Directory containing the bundled assets, as written in the second directive.
  pub asset_dir: String,
  /// Destination of the generated source fragment.
  pub output: String,
  /// URL prefix preceding the bundle filename in the HTML `src` attribute.
  pub asset_url_prefix: String,
  /// Header providing the embedding macros.
  pub header: String,
  /// Symbol naming style.
  pub style: IncbinStyle,
  /// Inclusion macro kind.
  pub directive: DirectiveKind,
  /// Symbol name for the embedded HTML document.
  pub index_symbol: String,
  /// Symbol name for the embedded JavaScript bundle.
  pub bundle_symbol: String,
}

impl EmbedLayout {
  /// Filesystem location of the HTML input.
  pub fn index_html_path(&self) -> PathBuf {
    self.root.join(&self.index_html)
  }

  /// Filesystem location of the generated fragment.
  pub fn output_path(&self) -> PathBuf {
    self.root.join(&self.output)
  }

  /// Path literal naming the bundle inside the asset directory.
  ///
  /// Always joined with a forward slash so the generated fragment is identical on every
  /// host platform.
  pub fn bundle_literal_path(&self, file_name: &str) -> String {
    let dir = self.asset_dir.replace('\\', "/");
    if dir.is_empty() {
      return file_name.to_string();
    }
    // `/` itself trims to nothing but still names the filesystem root.
    format!("{}/{file_name}", dir.trim_end_matches('/'))
  }
}
