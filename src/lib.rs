#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bundle;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod logging;

pub use bundle::output::WriteOutcome;
pub use bundle::reference::BundleReference;
pub use config::ProjectConfig;
pub use error::{GenerateError, GenerateResult};
pub use generator::{EmbedGenerator, GeneratedAssets};
pub use layout::{DirectiveKind, EmbedLayout, IncbinStyle};
