//! Deep merge of JSON patches into existing documents.
use serde_json::Value;
use thiserror::Error;

/// Merge `other` into `base`.
///
/// Objects are merged key by key, recursively; any other value in `other`
/// (arrays included) replaces the value in `base`.  New keys are appended
/// after the existing ones.
pub fn merge(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_obj), Value::Object(other_obj)) => {
            for (key, value) in other_obj {
                if let Some(base_value) = base_obj.get_mut(key) {
                    merge(base_value, value);
                } else {
                    base_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}

/// Result of patching a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patched {
    /// The merge changed nothing.
    Unchanged,
    /// The merged document, pretty-printed with a trailing newline.
    Updated(String),
}

/// Parse `current`, merge `data` into it, and render the result.
///
/// # Errors
///
/// Returns the parser error if `current` is not valid JSON, or the
/// serialiser error if the merged document cannot be rendered.
pub fn patch_document(current: &str, data: &Value) -> Result<Patched, PatchError> {
    let original: Value = serde_json::from_str(current).map_err(PatchError::Parse)?;
    let mut merged = original.clone();
    merge(&mut merged, data);
    if merged == original {
        return Ok(Patched::Unchanged);
    }
    let mut text = serde_json::to_string_pretty(&merged).map_err(PatchError::Serialize)?;
    text.push('\n');
    Ok(Patched::Updated(text))
}

/// Why [`patch_document`] failed.
///
/// Carries no path; the applier attaches one when converting to
/// [`ActionError`](crate::error::ActionError).
#[derive(Error, Debug)]
pub enum PatchError {
    /// The existing document is not valid JSON.
    #[error("existing document is not valid JSON")]
    Parse(#[source] serde_json::Error),
    /// The merged document could not be serialised.
    #[error("merged document could not be serialised")]
    Serialize(#[source] serde_json::Error),
}
