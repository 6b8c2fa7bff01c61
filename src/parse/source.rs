use std::fmt;

use quote::ToTokens;
use syn::visit::Visit;
use syn::{Attribute, Block, Expr, Fields, ItemMod, ItemStruct, Lit, LitStr, Meta};
use tracing::{debug, warn};

use super::directive::{parse_bind, parse_validate, DirectiveError};
use super::tag;
use crate::descriptor::{FieldDescriptor, RecordDescriptor};

/// Attribute that carries the annotation string unless configured otherwise.
pub const DEFAULT_TAG_ATTRIBUTE: &str = "tag";

/// Failure to parse a unit of declaration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source text is not valid Rust, or a tag attribute is not a string literal
    Syntax {
        /// 1-based line of the offending token
        line: usize,
        /// 1-based column of the offending token
        column: usize,
        message: String,
    },
}

impl ParseError {
    fn from_syn(err: &syn::Error) -> Self {
        let start = err.span().start();
        ParseError::Syntax {
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax {
                line,
                column,
                message,
            } => write!(f, "syntax error at {}:{}: {}", line, column, message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts [`RecordDescriptor`]s from Rust source text.
#[derive(Debug, Clone)]
pub struct AnnotationParser {
    attribute: String,
}

impl Default for AnnotationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationParser {
    /// Parser reading annotations from `#[tag = "..."]`.
    pub fn new() -> Self {
        Self::with_attribute(DEFAULT_TAG_ATTRIBUTE)
    }

    /// Parser reading annotations from `#[<attribute> = "..."]`.
    pub fn with_attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Parse one source unit.
    ///
    /// Returns one descriptor per struct that has at least one field with a
    /// valid directive, in source order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the source is not valid Rust or a
    /// tag attribute does not hold a string literal. No partial result is
    /// returned in that case.
    pub fn parse(&self, source: &str) -> Result<Vec<RecordDescriptor>, ParseError> {
        let file = syn::parse_file(source).map_err(|e| ParseError::from_syn(&e))?;

        let mut collector = RecordCollector {
            attribute: &self.attribute,
            module_path: Vec::new(),
            block_depth: 0,
            records: Vec::new(),
            error: None,
        };
        collector.visit_file(&file);

        match collector.error {
            Some(err) => Err(err),
            None => Ok(collector.records),
        }
    }
}

/// Parse one source unit with the default `tag` attribute.
///
/// # Errors
///
/// See [`AnnotationParser::parse`].
pub fn parse_source(source: &str) -> Result<Vec<RecordDescriptor>, ParseError> {
    AnnotationParser::new().parse(source)
}

/// Walks a file collecting annotated structs.
///
/// Structs in inline modules keep their module path. Structs declared inside
/// a block (a function body, a const initializer) cannot be named from
/// outside it and are skipped.
struct RecordCollector<'a> {
    attribute: &'a str,
    module_path: Vec<String>,
    block_depth: usize,
    records: Vec<RecordDescriptor>,
    error: Option<ParseError>,
}

impl<'ast> Visit<'ast> for RecordCollector<'_> {
    fn visit_item_mod(&mut self, item: &'ast ItemMod) {
        if is_cfg_test(&item.attrs) {
            debug!(module = %item.ident, "skipping test-only module");
            return;
        }
        self.module_path.push(item.ident.to_string());
        syn::visit::visit_item_mod(self, item);
        self.module_path.pop();
    }

    fn visit_block(&mut self, block: &'ast Block) {
        self.block_depth += 1;
        syn::visit::visit_block(self, block);
        self.block_depth -= 1;
    }

    fn visit_item_struct(&mut self, item: &'ast ItemStruct) {
        if self.error.is_some() {
            return;
        }
        if let Fields::Named(named) = &item.fields {
            let mut fields = Vec::new();
            for field in &named.named {
                match field_descriptor(self.attribute, field) {
                    Ok(Some(descriptor)) => fields.push(descriptor),
                    Ok(None) => {}
                    Err(err) => {
                        self.error = Some(err);
                        return;
                    }
                }
            }
            if fields.is_empty() {
                return;
            }
            if self.block_depth > 0 {
                warn!(
                    record = %item.ident,
                    "skipping struct declared inside a block: generated code cannot name it"
                );
                return;
            }
            self.records.push(
                RecordDescriptor::new(item.ident.to_string(), fields)
                    .in_module(self.module_path.iter().cloned()),
            );
        }
    }
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .meta
                .require_list()
                .is_ok_and(|list| list.tokens.to_string() == "test")
    })
}

fn field_descriptor(
    attribute: &str,
    field: &syn::Field,
) -> Result<Option<FieldDescriptor>, ParseError> {
    let Some(ident) = &field.ident else {
        return Ok(None);
    };
    let Some(annotation) = annotation_string(attribute, &field.attrs)? else {
        return Ok(None);
    };
    let name = ident.to_string();

    let bind = tag::lookup(&annotation, "bind").map(|value| parse_bind(&value));
    let validate = tag::lookup(&annotation, "validate").map(|value| parse_validate(&value));

    let mut descriptor = FieldDescriptor::new(name, field.ty.to_token_stream().to_string());
    descriptor.bind = keep_valid(&descriptor.name, "bind", bind);
    descriptor.validate = keep_valid(&descriptor.name, "validate", validate);

    Ok(descriptor.has_directive().then_some(descriptor))
}

/// Drop a failed directive, logging why.
fn keep_valid<T>(
    field: &str,
    key: &str,
    parsed: Option<Result<T, DirectiveError>>,
) -> Option<T> {
    match parsed? {
        Ok(directive) => Some(directive),
        Err(err) => {
            debug!(field, key, error = %err, "ignoring invalid directive");
            None
        }
    }
}

/// Raw annotation string of the first `#[<attribute> ...]` on a field.
fn annotation_string(attribute: &str, attrs: &[Attribute]) -> Result<Option<String>, ParseError> {
    let Some(attr) = attrs.iter().find(|a| a.path().is_ident(attribute)) else {
        return Ok(None);
    };
    let lit = match &attr.meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(expr) => match &expr.lit {
                Lit::Str(s) => Ok(s.value()),
                other => Err(syn::Error::new_spanned(
                    other,
                    format!("expected string literal in #[{} = \"...\"]", attribute),
                )),
            },
            other => Err(syn::Error::new_spanned(
                other,
                format!("expected string literal in #[{} = \"...\"]", attribute),
            )),
        },
        Meta::List(list) => list.parse_args::<LitStr>().map(|s| s.value()),
        Meta::Path(path) => Err(syn::Error::new_spanned(
            path,
            format!("expected #[{} = \"...\"]", attribute),
        )),
    };
    lit.map(Some).map_err(|e| ParseError::from_syn(&e))
}
