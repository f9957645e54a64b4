//! Name-keyed index of every fixture type.
//!
//! Entries are kept in declaration order. Each one carries the type's metadata
//! table and a constructor for a default value behind `Box<dyn FieldValue>`, so
//! generic tooling (the CLI, the dev test runner) can work without naming types.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::{basic_schema::*, encoder::*, nillable::*, ratsnest::*};
use crate::error::{Error, Result};
use crate::info::{EnumeratorInfo, FieldInfo};
use crate::value::{Category, FieldValue};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum Table {
    Attributes(&'static [FieldInfo]),
    Selections(&'static [FieldInfo]),
    Enumerators(&'static [EnumeratorInfo]),
    /// Customized types wrap a primitive and have no table.
    Empty,
}

impl Table {
    pub fn len(&self) -> usize {
        match self {
            Self::Attributes(t) | Self::Selections(t) => t.len(),
            Self::Enumerators(t) => t.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field descriptors, for sequences and choices.
    pub fn fields(&self) -> &'static [FieldInfo] {
        match self {
            Self::Attributes(t) | Self::Selections(t) => *t,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeEntry {
    pub name: &'static str,
    pub family: &'static str,
    pub category: Category,
    pub table: Table,
    #[serde(skip)]
    pub make: fn() -> Box<dyn FieldValue>,
}

fn make<T: FieldValue + Default>() -> Box<dyn FieldValue> {
    Box::new(T::default())
}

macro_rules! entry {
    (sequence $family:literal $ty:ident) => {
        TypeEntry {
            name: $ty::CLASS_NAME,
            family: $family,
            category: Category::Sequence,
            table: Table::Attributes($ty::ATTRIBUTE_INFO_ARRAY),
            make: make::<$ty>,
        }
    };
    (choice $family:literal $ty:ident) => {
        TypeEntry {
            name: $ty::CLASS_NAME,
            family: $family,
            category: Category::Choice,
            table: Table::Selections($ty::SELECTION_INFO_ARRAY),
            make: make::<$ty>,
        }
    };
    (enumeration $family:literal $ty:ident) => {
        TypeEntry {
            name: $ty::CLASS_NAME,
            family: $family,
            category: Category::Enumeration,
            table: Table::Enumerators($ty::ENUMERATOR_INFO_ARRAY),
            make: make::<$ty>,
        }
    };
    (customized $family:literal $ty:ident) => {
        TypeEntry {
            name: $ty::CLASS_NAME,
            family: $family,
            category: Category::CustomizedType,
            table: Table::Empty,
            make: make::<$ty>,
        }
    };
}

macro_rules! registry {
    ($($kind:ident $family:literal $ty:ident),* $(,)?) => {{
        let mut map = IndexMap::new();
        $(
            let entry = entry!($kind $family $ty);
            map.insert(entry.name, entry);
        )*
        map
    }};
}

pub static REGISTRY: Lazy<IndexMap<&'static str, TypeEntry>> = Lazy::new(|| {
    registry! {
        enumeration "ratsnest" Enumerated,
        customized "ratsnest" CustomString,
        customized "ratsnest" CustomInt,
        sequence "ratsnest" Sequence1,
        sequence "ratsnest" Sequence2,
        sequence "ratsnest" Sequence3,
        sequence "ratsnest" Sequence4,
        sequence "ratsnest" Sequence5,
        sequence "ratsnest" Sequence6,
        choice "ratsnest" Choice1,
        choice "ratsnest" Choice2,
        choice "ratsnest" Choice3,

        sequence "basic_schema" BasicSchemaAnnotationElement,
        choice "basic_schema" BasicSchemaEnumerationElementChoice,
        sequence "basic_schema" BasicSchemaEnumerationElement,
        choice "basic_schema" BasicSchemaRestrictionElementChoice,
        sequence "basic_schema" BasicSchemaRestrictionElement,
        choice "basic_schema" BasicSchemaSimpleTypeElementChoice,
        sequence "basic_schema" BasicSchemaSimpleTypeElement,
        sequence "basic_schema" BasicSchemaChoiceElement,
        choice "basic_schema" BasicSchemaChoiceElementChoice,
        sequence "basic_schema" BasicSchemaComplexTypeElement,
        choice "basic_schema" BasicSchemaComplexTypeElementChoice,
        sequence "basic_schema" BasicSchemaElement,
        choice "basic_schema" BasicSchemaElementChoice,
        sequence "basic_schema" BasicSchemaSequenceElement,
        choice "basic_schema" BasicSchemaSequenceElementChoice,
        choice "basic_schema" BasicSchemaChoice,
        sequence "basic_schema" BasicSchema,

        sequence "nillable" MySequenceWithNillable,
        sequence "nillable" MySequenceWithNillableBase64Binary,
        sequence "nillable" MySequenceWithNillableHexBinary,
        sequence "nillable" MySequenceWithNillableIntArray,
        sequence "nillable" MySequenceWithNillableIntList,
        sequence "nillable" MySequenceWithNillableIntSequenceArraySequence,
        sequence "nillable" MySequenceWithNillableIntSequenceArray,
        sequence "nillable" MySequenceWithNillableStringArray,
        sequence "nillable" MySequenceWithNillableStringList,
        sequence "nillable" MySequenceWithNillableStringSequenceArraySequence,
        sequence "nillable" MySequenceWithNillableStringSequenceArray,

        sequence "encoder" EncoderTestAddress,
        sequence "encoder" EncoderTestEmployee,
        choice "encoder" EncoderTestSequenceWithAllCategoriesChoice,
        sequence "encoder" EncoderTestSequenceWithAllCategoriesSequence,
        enumeration "encoder" EncoderTestSequenceWithAllCategoriesEnumeration,
        customized "encoder" EncoderTestSequenceWithAllCategoriesCustomizedType,
        sequence "encoder" EncoderTestSequenceWithAllCategories,
        choice "encoder" EncoderTestChoiceWithAllCategoriesChoice,
        sequence "encoder" EncoderTestChoiceWithAllCategoriesSequence,
        enumeration "encoder" EncoderTestChoiceWithAllCategoriesEnumeration,
        customized "encoder" EncoderTestChoiceWithAllCategoriesCustomizedType,
        choice "encoder" EncoderTestChoiceWithAllCategories,
        sequence "encoder" EncoderTestDegenerateChoice1Sequence,
        choice "encoder" EncoderTestDegenerateChoice1,
        sequence "encoder" EncoderTestSequenceWithUntagged0,
        sequence "encoder" EncoderTestSequenceWithUntagged1Sequence,
        sequence "encoder" EncoderTestSequenceWithUntagged1,
        sequence "encoder" EncoderTestSequenceWithUntagged2,
        sequence "encoder" EncoderTestSequenceWithUntagged3Sequence,
        sequence "encoder" EncoderTestSequenceWithUntagged3Sequence1,
        sequence "encoder" EncoderTestSequenceWithUntagged3,
        sequence "encoder" EncoderTestSequenceWithUntagged10Sequence,
        sequence "encoder" EncoderTestSequenceWithUntagged10,
        sequence "encoder" EncoderTestSequenceWithUntagged14,
    }
});

pub fn lookup(name: &str) -> Result<&'static TypeEntry> {
    REGISTRY.get(name).ok_or_else(|| {
        tracing::debug!(name, "no registered fixture type");
        Error::UnknownType(name.to_string())
    })
}

pub fn entries() -> impl Iterator<Item = &'static TypeEntry> {
    REGISTRY.values()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_family() {
        assert_eq!(REGISTRY.len(), 64);
        for family in ["ratsnest", "basic_schema", "nillable", "encoder"] {
            assert!(entries().any(|e| e.family == family), "{family}");
        }
        assert_eq!(entries().filter(|e| e.family == "basic_schema").count(), 17);
    }

    #[test]
    fn constructors_match_metadata() {
        for entry in entries() {
            let value = (entry.make)();
            assert_eq!(value.type_name(), entry.name);
            assert_eq!(value.category(), entry.category);
        }
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(matches!(lookup("Sequence7"), Err(Error::UnknownType(_))));
        assert_eq!(lookup("Choice2").unwrap().table.len(), 4);
    }

    #[test]
    fn table_serializes_with_kind_tag() {
        let entry = lookup("Enumerated").unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["table"]["kind"], "enumerators");
        assert_eq!(json["table"]["entries"][2]["name"], "LONDON");
        assert!(json.get("make").is_none());
    }
}
