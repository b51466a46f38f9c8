//! Extends-field merge engine
//!
//! Reconciles a possibly pre-existing `extends` declaration with the
//! newly selected canonical config name. The canonical Airbnb configs
//! are mutually exclusive, so every canonical entry other than the
//! target is stripped; user-defined entries are always preserved in
//! their original relative order.

use crate::error::EsbnbError;
use serde_json::{Map, Value};

/// Shape of the `extends` value found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendsField {
    /// Key does not exist (or no document existed at all)
    Absent,
    /// Key holds a single config name
    Single(String),
    /// Key holds a list of entries, kept verbatim
    Multiple(Vec<Value>),
}

/// Result of a merge: the new document and whether it differs from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub doc: Map<String, Value>,
    pub changed: bool,
}

/// Classify the `extends` value of a document
///
/// # Errors
///
/// Returns `EsbnbError::UnsupportedExtendsShape` when the value is
/// neither a string nor an array (number, object, boolean, null).
pub fn classify_extends(extends: Option<&Value>, path: &str) -> Result<ExtendsField, EsbnbError> {
    match extends {
        None => Ok(ExtendsField::Absent),
        Some(Value::String(name)) => Ok(ExtendsField::Single(name.clone())),
        Some(Value::Array(entries)) => Ok(ExtendsField::Multiple(entries.clone())),
        Some(_) => Err(EsbnbError::unsupported_extends_shape(path)),
    }
}

/// Compute the new state of a config document's `extends` field
///
/// `doc` is the parsed document, or `None` when no config file existed
/// (both produce the same output: a fresh document extending `target`).
/// `target` must be a member of `canonical`; `path` is only used in
/// error messages.
///
/// The decision procedure is total over the field's shapes:
/// - absent key: set to `target`
/// - string equal to `target`: no-op
/// - canonical string other than `target`: replaced
/// - user-defined string: upgraded to a two-entry list, original first
/// - list: every canonical entry other than `target` is stripped in a
///   single pass, surviving entries keep their relative order, and
///   `target` is appended at the end
///
/// Unrelated document keys pass through untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The document is not a JSON object (`NotAnObject`)
/// - The `extends` value is neither a string nor an array
///   (`UnsupportedExtendsShape`)
pub fn merge(
    doc: Option<Value>,
    target: &str,
    canonical: &[&str],
    path: &str,
) -> Result<MergeOutcome, EsbnbError> {
    let mut doc = match doc {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(EsbnbError::not_an_object(path)),
    };

    let field = classify_extends(doc.get("extends"), path)?;

    let (new_value, changed) = match field {
        ExtendsField::Absent => (Value::String(target.to_owned()), true),
        ExtendsField::Single(name) => {
            if name == target {
                (Value::String(name), false)
            } else if canonical.contains(&name.as_str()) {
                // A different canonical flavor: replace, never stack
                (Value::String(target.to_owned()), true)
            } else {
                // User-defined config: keep it, original first
                (
                    Value::Array(vec![
                        Value::String(name),
                        Value::String(target.to_owned()),
                    ]),
                    true,
                )
            }
        }
        ExtendsField::Multiple(entries) => {
            let mut kept: Vec<Value> = entries
                .iter()
                .filter(|entry| !is_canonical(entry, canonical))
                .cloned()
                .collect();
            kept.push(Value::String(target.to_owned()));

            let changed = kept != entries;
            (Value::Array(kept), changed)
        }
    };

    doc.insert("extends".to_owned(), new_value);

    Ok(MergeOutcome { doc, changed })
}

/// Check whether a list entry names any canonical config
fn is_canonical(entry: &Value, canonical: &[&str]) -> bool {
    entry
        .as_str()
        .is_some_and(|name| canonical.contains(&name))
}
