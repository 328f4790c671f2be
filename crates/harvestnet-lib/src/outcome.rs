use serde::Serialize;

use crate::error::Result;

/// Per-item outcome used where one failed item must not abort the report.
///
/// Serialises as the bare value on success and as `{"error": "..."}` on
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemResult<T> {
    Ok(T),
    Failed { error: String },
}

impl<T> ItemResult<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            ItemResult::Ok(value) => Some(value),
            ItemResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ItemResult::Ok(_) => None,
            ItemResult::Failed { error } => Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ItemResult::Ok(_))
    }
}

impl<T> From<Result<T>> for ItemResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => ItemResult::Ok(value),
            Err(err) => ItemResult::Failed {
                error: err.to_string(),
            },
        }
    }
}
