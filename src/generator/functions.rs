use super::to_snake_case;
use crate::descriptor::{BindSource, FieldDescriptor, FieldKind, RecordDescriptor};

const INDENT: &str = "    ";

/// Name of the generated bind function, e.g. `bind_user_profile`.
///
/// Records in inline modules are prefixed with the module path:
/// `api::Login` becomes `bind_api_login`.
pub fn bind_function_name(record: &RecordDescriptor) -> String {
    format!("bind_{}", function_suffix(record))
}

/// Name of the generated validate function, e.g. `validate_user_profile`.
pub fn validate_function_name(record: &RecordDescriptor) -> String {
    format!("validate_{}", function_suffix(record))
}

fn function_suffix(record: &RecordDescriptor) -> String {
    record
        .module_path
        .iter()
        .chain(std::iter::once(&record.name))
        .map(|segment| to_snake_case(segment))
        .collect::<Vec<_>>()
        .join("_")
}

/// Generate the bind function for a record.
///
/// Fields are handled in one pass in declaration order: the value is read
/// from its source, required fields are checked for emptiness, then integer
/// bounds are checked. The generated function returns on the first failure.
pub fn generate_bind_function(record: &RecordDescriptor) -> String {
    let mut body = Lines::default();
    for field in &record.fields {
        if let Some(bind) = &field.bind {
            let lookup = lookup_expr(bind.source, &field.name);
            match field.kind {
                FieldKind::String => {
                    body.push(1, format!("s.{} = {};", field.name, lookup));
                    if bind.required {
                        required_check(&mut body, &format!("s.{}", field.name), &field.name);
                    }
                }
                FieldKind::Integer => {
                    body.push(1, format!("let raw = {};", lookup));
                    let assign =
                        format!("s.{} = parse_integer(&raw, {:?})?;", field.name, field.name);
                    if bind.required {
                        required_check(&mut body, "raw", &field.name);
                        body.push(1, assign);
                    } else {
                        body.push(1, "if !raw.is_empty() {");
                        body.push(2, assign);
                        body.push(1, "}");
                    }
                }
                FieldKind::Other => {
                    body.push(
                        1,
                        format!(
                            "// {}: {} binding skipped for unsupported type `{}`",
                            field.name, bind.source, field.ty
                        ),
                    );
                }
            }
        }
        bound_checks(&mut body, field);
    }
    body.push(1, "Ok(())");

    let mut out = String::new();
    out.push_str(&format!("pub fn {}<B>(\n", bind_function_name(record)));
    out.push_str(&format!("{INDENT}req: &Request<B>,\n"));
    out.push_str(&format!("{INDENT}path_params: &HashMap<String, String>,\n"));
    out.push_str(&format!("{INDENT}s: &mut {},\n", record.type_path()));
    out.push_str(") -> Result<(), String> {\n");
    out.push_str(&body.text);
    out.push_str("}\n");
    out
}

/// Generate the validate function for a record.
///
/// Only integer fields with a validate directive contribute checks; no
/// value is read from the request.
pub fn generate_validate_function(record: &RecordDescriptor) -> String {
    let mut body = Lines::default();
    for field in &record.fields {
        bound_checks(&mut body, field);
    }
    body.push(1, "Ok(())");

    let mut out = String::new();
    out.push_str(&format!(
        "pub fn {}(s: &{}) -> Result<(), String> {{\n",
        validate_function_name(record),
        record.type_path()
    ));
    out.push_str(&body.text);
    out.push_str("}\n");
    out
}

fn lookup_expr(source: BindSource, name: &str) -> String {
    match source {
        BindSource::Header => format!("header_value(req, {:?})", name),
        BindSource::Query => format!("query_value(req, {:?})", name),
        BindSource::Path => format!("path_value(path_params, {:?})", name),
    }
}

fn required_check(body: &mut Lines, value: &str, name: &str) {
    body.push(1, format!("if {}.is_empty() {{", value));
    body.push(2, format!("return Err({});", error_expr(&format!("{} is required", name))));
    body.push(1, "}");
}

/// Min check first, then max.
fn bound_checks(body: &mut Lines, field: &FieldDescriptor) {
    let Some(bounds) = field.integer_bounds() else {
        return;
    };
    let ty = field.integer_type().unwrap_or_default();
    let value = format!("s.{}", field.name);
    if let Some(min) = bounds.min() {
        body.push(1, format!("if {} {{", compare(&value, ty, "<", min)));
        body.push(
            2,
            format!(
                "return Err({});",
                error_expr(&format!("{} must be at least {}", field.name, min))
            ),
        );
        body.push(1, "}");
    }
    if let Some(max) = bounds.max() {
        body.push(1, format!("if {} {{", compare(&value, ty, ">", max)));
        body.push(
            2,
            format!(
                "return Err({});",
                error_expr(&format!("{} must be at most {}", field.name, max))
            ),
        );
        body.push(1, "}");
    }
}

/// Comparison of an integer field against an `i64` bound, carried out in
/// `i128` so the bound never has to fit the field's own type.
fn compare(value: &str, ty: &str, op: &str, bound: i64) -> String {
    match ty {
        "i128" => format!("{} {} {}", value, op, bound),
        // A u128 beyond i128::MAX is above every bound.
        "u128" => format!(
            "i128::try_from({}).map_or({}, |v| v {} {})",
            value,
            op == ">",
            op,
            bound
        ),
        "usize" | "isize" => format!("({} as i128) {} {}", value, op, bound),
        _ => format!("i128::from({}) {} {}", value, op, bound),
    }
}

fn error_expr(message: &str) -> String {
    format!("{:?}.to_string()", message)
}

#[derive(Default)]
struct Lines {
    text: String,
}

impl Lines {
    fn push(&mut self, depth: usize, line: impl AsRef<str>) {
        for _ in 0..depth {
            self.text.push_str(INDENT);
        }
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }
}
