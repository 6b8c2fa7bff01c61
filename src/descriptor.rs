//! # Descriptor Module
//!
//! In-memory representation of parsed record types. The annotation parser
//! produces these values and the code generator consumes them.
//!
//! A [`RecordDescriptor`] only ever holds fields that carry at least one
//! directive, and fields keep their declaration order: generated functions
//! emit one block of statements per field in exactly this order.

use serde::Serialize;
use std::fmt;

/// A record type (a struct with named fields) and its annotated fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDescriptor {
    /// Type name as declared (e.g. `User`)
    pub name: String,
    /// Inline modules enclosing the declaration, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub module_path: Vec<String>,
    /// Annotated fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Create a descriptor from a name and its fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            module_path: Vec::new(),
            fields,
        }
    }

    /// Place the record inside inline modules, e.g. `["api"]` for `api::Login`.
    #[must_use]
    pub fn in_module<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.module_path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Path of the type relative to the declaring file, e.g. `api::Login`.
    pub fn type_path(&self) -> String {
        let mut path = self.module_path.join("::");
        if !path.is_empty() {
            path.push_str("::");
        }
        path.push_str(&self.name);
        path
    }
}

/// One annotated field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name, also the lookup key for header/query/path values
    pub name: String,
    /// Declared type as written in the source (e.g. `u32`, `Option < String >`)
    pub ty: String,
    /// Scalar kind derived from `ty`
    pub kind: FieldKind,
    /// Where the value is read from, if the field is bound
    pub bind: Option<BindDirective>,
    /// Inclusive integer bounds, if the field is validated
    pub validate: Option<ValidateDirective>,
}

impl FieldDescriptor {
    /// Create a field with no directives. The kind is derived from `ty`.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let ty = ty.into();
        Self {
            name: name.into(),
            kind: FieldKind::from_type_name(&ty),
            ty,
            bind: None,
            validate: None,
        }
    }

    /// Attach a bind directive.
    #[must_use]
    pub fn with_bind(mut self, bind: BindDirective) -> Self {
        self.bind = Some(bind);
        self
    }

    /// Attach a validate directive.
    #[must_use]
    pub fn with_validate(mut self, validate: ValidateDirective) -> Self {
        self.validate = Some(validate);
        self
    }

    /// True when the field carries at least one directive.
    pub fn has_directive(&self) -> bool {
        self.bind.is_some() || self.validate.is_some()
    }

    /// Primitive integer name (`u8`, `usize`, ...) of an integer field.
    pub fn integer_type(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Integer => self.ty.rsplit("::").next().map(str::trim),
            _ => None,
        }
    }

    /// Validate directive of an integer field; other kinds never get bound checks.
    pub fn integer_bounds(&self) -> Option<&ValidateDirective> {
        match self.kind {
            FieldKind::Integer => self.validate.as_ref(),
            _ => None,
        }
    }
}

/// Scalar kind of a field. Only `String` and `Integer` are bindable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Integer,
    Other,
}

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

impl FieldKind {
    /// Classify a type by its rendered name.
    ///
    /// Accepts fully qualified paths such as `std::string::String`.
    pub fn from_type_name(ty: &str) -> Self {
        let compact: String = ty.chars().filter(|c| !c.is_whitespace()).collect();
        let last = compact.rsplit("::").next().unwrap_or_default();
        let qualified_ok = compact == last
            || compact == "std::string::String"
            || compact == "alloc::string::String"
            || compact.starts_with("std::primitive::")
            || compact.starts_with("core::primitive::");
        if !qualified_ok {
            return FieldKind::Other;
        }
        if last == "String" {
            FieldKind::String
        } else if INTEGER_TYPES.contains(&last) {
            FieldKind::Integer
        } else {
            FieldKind::Other
        }
    }
}

/// Where a bound field's runtime value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindSource {
    /// HTTP request header
    Header,
    /// Path parameter, e.g. `{id}` in `/users/{id}`
    Path,
    /// URI query parameter
    Query,
}

impl BindSource {
    /// The literal used in annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            BindSource::Header => "header",
            BindSource::Path => "path",
            BindSource::Query => "query",
        }
    }

    /// Match an annotation literal exactly (case-sensitive).
    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "header" => Some(BindSource::Header),
            "path" => Some(BindSource::Path),
            "query" => Some(BindSource::Query),
            _ => None,
        }
    }
}

impl fmt::Display for BindSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed `bind:"..."` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BindDirective {
    pub source: BindSource,
    /// An empty value fails binding when set
    pub required: bool,
}

impl BindDirective {
    pub fn new(source: BindSource, required: bool) -> Self {
        Self { source, required }
    }

    pub fn optional(source: BindSource) -> Self {
        Self::new(source, false)
    }

    pub fn required(source: BindSource) -> Self {
        Self::new(source, true)
    }
}

/// Parsed `validate:"..."` directive: inclusive integer bounds.
///
/// At least one bound is always present; there is no way to build a
/// directive with neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidateDirective {
    min: Option<i64>,
    max: Option<i64>,
}

impl ValidateDirective {
    /// Returns `None` when both bounds are absent.
    pub fn new(min: Option<i64>, max: Option<i64>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn with_min(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn with_max(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn range(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }
}
