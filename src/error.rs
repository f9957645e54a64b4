//! Crate-wide error type.
//!
//! Lookups that only ask "is it there?" return `Option`; everything that would
//! mutate a value on success returns `Result<_, Error>` and leaves the value
//! untouched on failure.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("`{type_name}` has no enumerator named {name:?}")]
    UnknownEnumeratorName { type_name: &'static str, name: String },

    #[error("`{type_name}` has no enumerator with value {value}")]
    UnknownEnumeratorValue { type_name: &'static str, value: i32 },

    #[error("`{type_name}` has no selection with id {id}")]
    UnknownSelectionId { type_name: &'static str, id: i32 },

    #[error("`{type_name}` has no selection named {name:?}")]
    UnknownSelectionName { type_name: &'static str, name: String },

    #[error("value does not satisfy the restrictions of `{type_name}`")]
    RestrictionViolated { type_name: &'static str },

    #[error("no fixture type named {0:?}")]
    UnknownType(String),

    #[error("unknown day-count convention {0:?}")]
    UnknownConvention(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
