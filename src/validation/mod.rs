//! # Field Validation
//!
//! Turns a raw JSON request body into a typed [`ProductDraft`] or [`ProductPatch`], or into
//! the list of [`Violation`]s explaining why it cannot be.
//!
//! Every field in [`PRODUCT_RULES`] is evaluated, so one report can name several fields.
//! Within a field the chain stops at the first failing step, so each field appears at most
//! once. Validation never mutates the body.

pub mod rules;

pub use rules::{Check, FieldRule, Step, PRODUCT_RULES};

use crate::model::{ProductDraft, ProductPatch};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which fields a validation pass looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Every rule runs; absent fields are reported.
    #[default]
    Full,
    /// Only fields present in the body are checked.
    Present,
}

/// A single rule failure tied to one body field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The submitted value. Absent when the key was not in the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: &'static str,
    pub path: &'static str,
    pub location: &'static str,
}

impl Violation {
    fn new(field: &'static str, value: Option<&Value>, msg: &'static str) -> Self {
        Self {
            kind: "field",
            value: value.cloned(),
            msg,
            path: field,
            location: "body",
        }
    }
}

/// Runs `rules` against `body`, collecting at most one violation per field.
pub fn validate(
    rules: &[FieldRule],
    body: &Map<String, Value>,
    mode: ValidationMode,
) -> Vec<Violation> {
    rules
        .iter()
        .filter(|rule| mode == ValidationMode::Full || body.contains_key(rule.field))
        .filter_map(|rule| {
            let value = body.get(rule.field);
            rule.steps
                .iter()
                .find(|step| !step.check.passes(value))
                .map(|step| Violation::new(rule.field, value, step.msg))
        })
        .collect()
}

/// Validates a complete product payload and converts it into a draft.
///
/// Used for create and full replace. Known fields are coerced to their typed form (the name
/// is trimmed, numeric strings become numbers); other keys except `id` are carried in
/// `extra`.
pub fn parse_draft(body: &Value) -> Result<ProductDraft, Vec<Violation>> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let violations = validate(PRODUCT_RULES, fields, ValidationMode::Full);
    if !violations.is_empty() {
        return Err(violations);
    }

    let typed = TypedFields::read(fields);
    let draft = ProductDraft {
        name: typed.name.ok_or_else(|| invalid("name", fields))?,
        category: typed.category.ok_or_else(|| invalid("category", fields))?,
        quantity: typed.quantity.ok_or_else(|| invalid("quantity", fields))?,
        unit_price: typed.unit_price.ok_or_else(|| invalid("unitPrice", fields))?,
        date_added: typed.date_added.ok_or_else(|| invalid("dateAdded", fields))?,
        supplier: typed.supplier.ok_or_else(|| invalid("supplier", fields))?,
        extra: extra_fields(fields),
    };
    Ok(draft)
}

/// Validates a partial payload with `mode` and converts the present fields into a patch.
pub fn parse_patch(body: &Value, mode: ValidationMode) -> Result<ProductPatch, Vec<Violation>> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let violations = validate(PRODUCT_RULES, fields, mode);
    if !violations.is_empty() {
        return Err(violations);
    }

    let typed = TypedFields::read(fields);
    Ok(ProductPatch {
        name: typed.name,
        category: typed.category,
        quantity: typed.quantity,
        unit_price: typed.unit_price,
        date_added: typed.date_added,
        supplier: typed.supplier,
        extra: extra_fields(fields),
    })
}

/// Typed views of the known fields. A field is `None` when absent or not convertible.
struct TypedFields {
    name: Option<String>,
    category: Option<String>,
    quantity: Option<u64>,
    unit_price: Option<f64>,
    date_added: Option<chrono::NaiveDate>,
    supplier: Option<String>,
}

impl TypedFields {
    fn read(fields: &Map<String, Value>) -> Self {
        let string = |key: &str| fields.get(key).and_then(Value::as_str);
        Self {
            name: string("name").map(|s| s.trim().to_string()),
            category: string("category").map(str::to_string),
            quantity: fields
                .get("quantity")
                .and_then(rules::as_integer)
                .and_then(|n| u64::try_from(n).ok()),
            unit_price: fields.get("unitPrice").and_then(rules::as_number),
            date_added: string("dateAdded").and_then(rules::parse_date),
            supplier: string("supplier").map(str::to_string),
        }
    }
}

fn extra_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(key, _)| {
            key.as_str() != "id" && !PRODUCT_RULES.iter().any(|rule| rule.field == key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn invalid(field: &'static str, fields: &Map<String, Value>) -> Vec<Violation> {
    vec![Violation::new(field, fields.get(field), "Invalid value")]
}
