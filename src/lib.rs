//! # tagwrangler
//!
//! **tagwrangler** generates request binding and validation functions from
//! Rust structs whose fields carry `bind` and `validate` annotations.
//!
//! ## Overview
//!
//! ```rust,ignore
//! use tagwrangler_macros::Tagged;
//!
//! #[derive(Tagged)]
//! pub struct User {
//!     #[tag = r#"bind:"header,required""#]
//!     pub name: String,
//!     #[tag = r#"bind:"query""#]
//!     pub email: String,
//!     #[tag = r#"validate:"min=18,max=120""#]
//!     pub age: u32,
//! }
//! ```
//!
//! becomes a module with `bind_user` (fills a `User` from an
//! `http::Request`, path parameters and query string, returning
//! `"name is required"`, `"age must be at least 18"`, ... on failure) and
//! `validate_user` (re-checks the bounds only).
//!
//! `#[derive(Tagged)]` from the `tagwrangler_macros` crate registers the
//! `tag` attribute so the annotated structs compile; it generates no code.
//! The generated module reaches the structs through `use super::*;`, so it is
//! declared as a child of the module that defines (or re-exports) them.
//! Structs in inline modules are referenced by path (`api::Login` gets
//! `bind_api_login`); structs declared inside function bodies are skipped.
//!
//! ## Architecture
//!
//! - **[`parse`]** - Annotation tokenizer, directive grammar and source parser
//! - **[`descriptor`]** - Parsed records and fields
//! - **[`generator`]** - Function synthesis, module rendering, output strategies
//! - **[`cli`]** - The `tagwrangler-gen` command line
//! - **[`runtime_config`]** - Environment configuration
//! - **[`logging`]** - Tracing subscriber setup
//!
//! ### Generation Flow
//!
//! ```text
//! directory → parse_directory → parse_source (syn) → RecordDescriptor
//!           → generate_bind_function / generate_validate_function
//!           → synthesize (askama) → write_bindings
//! ```
//!
//! Parsing and synthesis are pure: the same source always yields the same
//! descriptors, and the same descriptors always yield byte-identical text.

pub mod cli;
pub mod descriptor;
pub mod generator;
pub mod logging;
pub mod parse;
pub mod runtime_config;

pub use descriptor::{
    BindDirective, BindSource, FieldDescriptor, FieldKind, RecordDescriptor, ValidateDirective,
};
pub use generator::{generate_bind_function, generate_validate_function, synthesize};
pub use parse::{parse_bind, parse_source, parse_validate, DirectiveError, ParseError};
