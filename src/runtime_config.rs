//! # Runtime Configuration Module
//!
//! Environment-based configuration for the generator.
//!
//! ## Environment Variables
//!
//! ### `TAGWRANGLER_TAG_ATTR`
//!
//! Name of the field attribute holding the annotation string.
//! Default: `tag` (i.e. `#[tag = "..."]`).
//!
//! ### `TAGWRANGLER_BINDINGS_SUFFIX`
//!
//! File name suffix of modules written by the same-location strategy. Files
//! with this suffix are also skipped when parsing, so regeneration never
//! reads its own output. Default: `_bindings.rs`.
//!
//! ## Usage
//!
//! ```rust
//! use tagwrangler::runtime_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_env();
//! println!("reading #[{}] attributes", config.tag_attribute);
//! ```

use std::env;

use crate::parse::DEFAULT_TAG_ATTRIBUTE;

/// Default suffix for same-location output files.
pub const DEFAULT_BINDINGS_SUFFIX: &str = "_bindings.rs";

/// Generator configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attribute carrying the annotation string (default: `tag`)
    pub tag_attribute: String,
    /// Suffix of same-location output files (default: `_bindings.rs`)
    pub bindings_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tag_attribute: DEFAULT_TAG_ATTRIBUTE.to_string(),
            bindings_suffix: DEFAULT_BINDINGS_SUFFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            tag_attribute: non_empty("TAGWRANGLER_TAG_ATTR")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.tag_attribute),
            bindings_suffix: non_empty("TAGWRANGLER_BINDINGS_SUFFIX")
                .unwrap_or(defaults.bindings_suffix),
        }
    }
}
