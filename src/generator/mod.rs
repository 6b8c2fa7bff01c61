//! # Generator Module
//!
//! Turns [`RecordDescriptor`]s into Rust source that binds and validates
//! request data.
//!
//! ## Architecture
//!
//! ```text
//! RecordDescriptor → functions (bind_/validate_ text) → templates (module) → project (files)
//! ```
//!
//! 1. **Functions** - [`generate_bind_function`] and [`generate_validate_function`]
//!    produce the text of one function each, deterministically
//! 2. **Templates** - [`synthesize`] renders a whole module with Askama: header,
//!    imports, every record's functions, and the lookup helpers
//! 3. **Project** - [`generate_bindings`] parses input directories and writes
//!    modules according to an [`OutputPlan`]
//!
//! ## Generated Code
//!
//! For a record `User` the module contains:
//!
//! ```rust,ignore
//! pub fn bind_user<B>(
//!     req: &Request<B>,
//!     path_params: &HashMap<String, String>,
//!     s: &mut User,
//! ) -> Result<(), String> { ... }
//!
//! pub fn validate_user(s: &User) -> Result<(), String> { ... }
//! ```
//!
//! Generated modules depend on the `http` and `url` crates only.
//!
//! [`RecordDescriptor`]: crate::descriptor::RecordDescriptor

mod functions;
mod project;
mod templates;


pub use functions::{
    bind_function_name, generate_bind_function, generate_validate_function,
    validate_function_name,
};
pub use project::{generate_bindings, GenerateOptions, OutputPlan};
pub use templates::{synthesize, write_bindings, BindingsTemplateData, RenderedRecord};

/// Convert a type or directory name to snake_case.
///
/// ```rust
/// use tagwrangler::generator::to_snake_case;
///
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let boundary = i > 0 && {
                let prev = chars[i - 1];
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '-' || c == ' ' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}
