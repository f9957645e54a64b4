//! Introspectable value types and the templates that generate them.
//!
//! - [`info`]: static attribute/selection/enumerator descriptors.
//! - [`value`]: the `FieldValue` reflection trait and its container impls.
//! - [`visit`]: visitor protocol plus the `Sequence` and `Choice` traits.
//! - [`printer`]: indentation-aware rendering shared by every type.
//! - [`sequence!`], [`choice!`], [`enumeration!`], [`customized_type!`]: templates.
//! - [`fixtures`]: concrete schema families built with the templates.
//! - [`daycount`]: day-count conventions over calendar dates.
#[macro_use]
mod macros;

pub mod cli;
pub mod daycount;
pub mod error;
pub mod fixtures;
pub mod info;
pub mod printer;
pub mod value;
pub mod visit;

pub use error::{Error, Result};

#[doc(hidden)]
pub use tracing as __tracing;
