//! Mini-grammars for the `bind` and `validate` directive values.
//!
//! ```text
//! bind value     ::= kind [ ',' 'required' ]      kind ∈ {header, path, query}
//! validate value ::= bound (',' bound)*           bound ::= 'min=' int | 'max=' int
//! ```

use crate::descriptor::{BindDirective, BindSource, ValidateDirective};
use std::fmt;

/// A malformed `bind` or `validate` value.
///
/// The annotation parser never returns these to its caller: the directive is
/// dropped from the field instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// `bind` value with an empty first token
    EmptyBind,
    /// First `bind` token is not `header`, `path` or `query`
    UnknownSource { value: String },
    /// Second `bind` token is not `required`
    InvalidOption { value: String },
    /// More than two `bind` tokens
    TrailingTokens { value: String },
    /// Empty `validate` value
    EmptyValidate,
    /// `validate` token that is neither `min=` nor `max=`
    UnsupportedRule { rule: String },
    /// `min=`/`max=` with a non-integer operand
    InvalidBound { bound: &'static str, value: String },
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveError::EmptyBind => write!(f, "empty bind directive"),
            DirectiveError::UnknownSource { value } => write!(
                f,
                "invalid bind source '{}': expected header, path or query",
                value
            ),
            DirectiveError::InvalidOption { value } => {
                write!(f, "invalid bind option '{}': only 'required' is allowed", value)
            }
            DirectiveError::TrailingTokens { value } => {
                write!(f, "unexpected bind token '{}'", value)
            }
            DirectiveError::EmptyValidate => write!(f, "empty validate directive"),
            DirectiveError::UnsupportedRule { rule } => {
                write!(f, "unsupported validation rule '{}'", rule)
            }
            DirectiveError::InvalidBound { bound, value } => {
                write!(f, "invalid {} value '{}'", bound, value)
            }
        }
    }
}

impl std::error::Error for DirectiveError {}

/// Parse a `bind` value such as `header` or `path,required`.
///
/// # Errors
///
/// Any token outside the grammar yields a [`DirectiveError`].
pub fn parse_bind(value: &str) -> Result<BindDirective, DirectiveError> {
    let mut tokens = value.split(',').map(str::trim);

    let kind = tokens.next().unwrap_or_default();
    if kind.is_empty() {
        return Err(DirectiveError::EmptyBind);
    }
    let source = BindSource::from_literal(kind).ok_or_else(|| DirectiveError::UnknownSource {
        value: kind.to_string(),
    })?;

    let required = match tokens.next() {
        None => false,
        Some("required") => true,
        Some(other) => {
            return Err(DirectiveError::InvalidOption {
                value: other.to_string(),
            })
        }
    };

    if let Some(extra) = tokens.next() {
        return Err(DirectiveError::TrailingTokens {
            value: extra.to_string(),
        });
    }

    Ok(BindDirective::new(source, required))
}

/// Parse a `validate` value such as `min=1,max=100`.
///
/// Tokens are order-independent; a repeated bound overwrites the earlier one.
///
/// # Errors
///
/// Empty values, unknown rules and non-integer operands yield a [`DirectiveError`].
pub fn parse_validate(value: &str) -> Result<ValidateDirective, DirectiveError> {
    if value.trim().is_empty() {
        return Err(DirectiveError::EmptyValidate);
    }

    let mut min = None;
    let mut max = None;
    for token in value.split(',').map(str::trim) {
        if let Some(operand) = token.strip_prefix("min=") {
            min = Some(parse_bound("min", operand)?);
        } else if let Some(operand) = token.strip_prefix("max=") {
            max = Some(parse_bound("max", operand)?);
        } else {
            return Err(DirectiveError::UnsupportedRule {
                rule: token.to_string(),
            });
        }
    }

    ValidateDirective::new(min, max).ok_or(DirectiveError::EmptyValidate)
}

fn parse_bound(bound: &'static str, operand: &str) -> Result<i64, DirectiveError> {
    operand
        .parse::<i64>()
        .map_err(|_| DirectiveError::InvalidBound {
            bound,
            value: operand.to_string(),
        })
}
