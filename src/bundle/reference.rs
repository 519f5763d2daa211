//! Locating the hashed JavaScript bundle referenced by the generated `index.html`.

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::error::{GenerateError, GenerateResult};

/// Filename of the compiled script asset, as referenced by the HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReference(String);

impl BundleReference {
  /// Filename exactly as it appeared after the asset URL prefix.
  pub fn file_name(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for BundleReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Find the first `src="<prefix><file>"` attribute in document order.
///
/// The filename runs up to the closing quote and is returned untouched, so hashes, dots
/// and hyphens survive verbatim.
pub fn find_bundle_reference(html: &str, asset_url_prefix: &str) -> Option<BundleReference> {
  let pattern = Regex::new(&format!(
    r#"src="{}([^"]+)""#,
    regex::escape(asset_url_prefix)
  ))
  .expect("invalid bundle reference regex");

  pattern
    .captures(html)
    .and_then(|caps| caps.get(1))
    .map(|m| BundleReference(m.as_str().to_string()))
}

/// Like [`find_bundle_reference`], but treats a missing reference as a configuration error
/// attributed to `source_path`.
pub fn require_bundle_reference(
  html: &str,
  asset_url_prefix: &str,
  source_path: &Path,
) -> GenerateResult<BundleReference> {
  find_bundle_reference(html, asset_url_prefix).ok_or_else(|| {
    GenerateError::MissingBundleReference {
      path: source_path.to_path_buf(),
      prefix: asset_url_prefix.to_string(),
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const PREFIX: &str = "/assets/";

  #[test]
  fn extracts_hashed_bundle_name() {
    let html = r#"
      <html>
        <head><title>App</title></head>
        <body>
          <div id="root"></div>
          <script type="module" crossorigin src="/assets/main.a1b2c3.js"></script>
        </body>
      </html>
    "#;

    let reference = find_bundle_reference(html, PREFIX).unwrap();
    assert_eq!(reference.file_name(), "main.a1b2c3.js");
  }

  #[test]
  fn picks_first_reference_in_document_order() {
    let html = r#"<script src="/assets/vendor-9f8e.js"></script>
<script src="/assets/main-1234.js"></script>"#;

    let reference = find_bundle_reference(html, PREFIX).unwrap();
    assert_eq!(reference.to_string(), "vendor-9f8e.js");
  }

  #[test]
  fn keeps_dots_and_hyphens_verbatim() {
    let html = r#"<script src="/assets/app-v2.3.min.js" defer></script>"#;
    let reference = find_bundle_reference(html, PREFIX).unwrap();
    assert_eq!(reference.file_name(), "app-v2.3.min.js");
  }

  #[test]
  fn ignores_other_prefixes_and_empty_names() {
    let html = r#"<link href="/assets/main.css"><script src="/static/main.js"></script>
<script src="/assets/"></script>"#;
    assert!(find_bundle_reference(html, PREFIX).is_none());
  }

  #[test]
  fn escapes_custom_prefix() {
    let html = r#"<script src="./dist+x/bundle.js"></script>"#;
    assert!(find_bundle_reference(html, "./dist+x/").is_some());
    assert!(find_bundle_reference(html, "./distx/").is_none());
  }

  #[test]
  fn missing_reference_is_configuration_error() {
    let err =
      require_bundle_reference("<html></html>", PREFIX, Path::new("www/index.html")).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("www/index.html"));
  }
}
