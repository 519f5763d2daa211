//! Rendering of the `incbin.h` directives that embed the frontend into the native binary.

use crate::bundle::reference::BundleReference;
use crate::layout::EmbedLayout;

/// Render the generated source fragment for `bundle`.
///
/// Paths are written exactly as configured; the bundle filename is appended to the asset
/// directory without escaping.
pub fn render_embedded_assets(layout: &EmbedLayout, bundle: &BundleReference) -> String {
  let directive = layout.directive.macro_name();
  format!(
    r#"
#define INCBIN_STYLE {style}
#include "{header}"

{directive}({index_symbol}, "{index_path}");
{directive}({bundle_symbol}, "{bundle_path}");
"#,
    style = layout.style.macro_name(),
    header = layout.header,
    index_symbol = layout.index_symbol,
    index_path = layout.index_html.replace('\\', "/"),
    bundle_symbol = layout.bundle_symbol,
    bundle_path = layout.bundle_literal_path(bundle.file_name()),
  )
}
