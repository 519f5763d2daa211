//! Helpers turning the frontend build output into embedding directives.

pub mod directives;
pub mod output;
pub mod reference;
