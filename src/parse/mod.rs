//! # Parse Module
//!
//! Turns tag-annotated Rust declarations into [`RecordDescriptor`]s.
//!
//! ## Annotation Format
//!
//! Each field carries one raw annotation string in a `#[tag = "..."]`
//! attribute: space-separated `key:"value"` pairs. Only `bind` and
//! `validate` are read; other keys (`json`, `db`, ...) are ignored.
//!
//! ```rust
//! use tagwrangler::parse::parse_source;
//!
//! let records = parse_source(r##"
//!     pub struct User {
//!         #[tag = r#"bind:"header,required" json:"name""#]
//!         pub name: String,
//!         #[tag = r#"validate:"min=18,max=120""#]
//!         pub age: u8,
//!         pub internal: bool,
//!     }
//! "##).unwrap();
//!
//! assert_eq!(records[0].name, "User");
//! assert_eq!(records[0].fields.len(), 2);
//! ```
//!
//! ## Failure Policy
//!
//! - Invalid Rust source fails the whole unit with [`ParseError::Syntax`].
//! - A malformed `bind` or `validate` value only drops that directive. A field
//!   left without directives is dropped, and a struct without qualifying
//!   fields produces no descriptor. Callers cannot tell a dropped directive
//!   from a missing one.
//!
//! [`RecordDescriptor`]: crate::descriptor::RecordDescriptor

mod directive;
mod directory;
mod source;
pub mod tag;


pub use directive::{parse_bind, parse_validate, DirectiveError};
pub use directory::{parse_directory, ParsedDirectory};
pub use source::{parse_source, AnnotationParser, ParseError, DEFAULT_TAG_ATTRIBUTE};
