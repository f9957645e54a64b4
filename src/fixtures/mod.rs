//! Concrete instantiations of the type templates, grouped by the schema they
//! model.
pub mod basic_schema;
pub mod encoder;
pub mod nillable;
pub mod ratsnest;
pub mod registry;
