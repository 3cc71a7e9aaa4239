//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title.
//!     #[config(inline_doc = "required")]
//!     pub title: String,
//!
//!     /// Directory holding the markdown pages.
//!     #[config(default = ".")]
//!     pub src_dir: PathBuf,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteInfoConfig::template() -> TOML string with comments
//! // - SiteInfoConfig::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (required)
//!
//! Field-level:
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc = "x")]` - Trailing comment in template

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
