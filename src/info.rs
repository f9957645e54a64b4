//! Static metadata tables.
//!
//! Every sequence carries an attribute table, every choice a selection table and
//! every enumeration an enumerator table. Ids are dense and zero-based, so the id
//! of an entry is also its index in the table.
use std::fmt;
use std::ops::BitOr;

use serde::Serialize;

// ————————————————————————————————————————————————————————————————————————————
// FORMATTING MODE
// ————————————————————————————————————————————————————————————————————————————

/// Encoding hints attached to a field: a base mode in the low bits plus flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FormattingMode(u32);

impl FormattingMode {
    pub const DEFAULT: Self = Self(0x0);
    pub const DEC: Self = Self(0x1);
    pub const HEX: Self = Self(0x2);
    pub const BASE64: Self = Self(0x3);
    pub const TEXT: Self = Self(0x4);
    pub const TYPE_MASK: Self = Self(0x7);

    pub const UNTAGGED: Self = Self(0x0001_0000);
    pub const ATTRIBUTE: Self = Self(0x0002_0000);
    pub const SIMPLE_CONTENT: Self = Self(0x0004_0000);
    pub const NILLABLE: Self = Self(0x0008_0000);
    pub const LIST: Self = Self(0x0010_0000);
    pub const FLAGS_MASK: Self = Self(0x001F_0000);

    const FLAG_NAMES: [(Self, &'static str); 5] = [
        (Self::UNTAGGED, "UNTAGGED"),
        (Self::ATTRIBUTE, "ATTRIBUTE"),
        (Self::SIMPLE_CONTENT, "SIMPLE_CONTENT"),
        (Self::NILLABLE, "NILLABLE"),
        (Self::LIST, "LIST"),
    ];

    pub const fn bits(self) -> u32 { self.0 }

    pub const fn union(self, other: Self) -> Self { Self(self.0 | other.0) }

    /// True if every bit of `other` is set. Meant for the flag constants.
    pub const fn contains(self, other: Self) -> bool { self.0 & other.0 == other.0 }

    pub const fn base(self) -> Self { Self(self.0 & Self::TYPE_MASK.0) }

    pub fn base_name(self) -> &'static str {
        match self.base() {
            Self::DEC => "DEC",
            Self::HEX => "HEX",
            Self::BASE64 => "BASE64",
            Self::TEXT => "TEXT",
            _ => "DEFAULT",
        }
    }
}

impl BitOr for FormattingMode {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self { self.union(rhs) }
}

impl fmt::Display for FormattingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())?;
        for (flag, name) in Self::FLAG_NAMES {
            if self.contains(flag) {
                write!(f, " | {name}")?;
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DESCRIPTORS
// ————————————————————————————————————————————————————————————————————————————

/// Descriptor of one sequence attribute or one choice selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldInfo {
    pub id: i32,
    pub name: &'static str,
    pub annotation: &'static str,
    pub formatting_mode: FormattingMode,
}

pub type AttributeInfo = FieldInfo;
pub type SelectionInfo = FieldInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EnumeratorInfo {
    pub value: i32,
    pub name: &'static str,
    pub annotation: &'static str,
}

/// Id of a choice with no active selection.
pub const UNDEFINED_SELECTION_ID: i32 = -1;

/// Placeholder returned by `selection_name` for an undefined choice.
pub const UNDEFINED_SELECTION_NAME: &str = "(* UNDEFINED *)";

// ————————————————————————————————————————————————————————————————————————————
// LOOKUP
// ————————————————————————————————————————————————————————————————————————————

pub fn lookup_by_id(table: &'static [FieldInfo], id: i32) -> Option<&'static FieldInfo> {
    usize::try_from(id)
        .ok()
        .and_then(|index| table.get(index))
        .filter(|info| info.id == id)
}

pub fn lookup_by_name(table: &'static [FieldInfo], name: &str) -> Option<&'static FieldInfo> {
    table.iter().find(|info| info.name == name)
}

/// Case-insensitive variant, used when a name is forwarded through an untagged
/// choice.
pub fn lookup_by_name_caseless(table: &'static [FieldInfo], name: &str) -> Option<&'static FieldInfo> {
    table.iter().find(|info| info.name.eq_ignore_ascii_case(name))
}

pub fn lookup_enumerator_by_name(table: &'static [EnumeratorInfo], name: &str) -> Option<&'static EnumeratorInfo> {
    table.iter().find(|info| info.name == name)
}

pub fn lookup_enumerator_by_value(table: &'static [EnumeratorInfo], value: i32) -> Option<&'static EnumeratorInfo> {
    table.iter().find(|info| info.value == value)
}

/// Compile-time guard used by the type templates: entry `i` must carry id `i`.
pub const fn assert_dense_ids(table: &[FieldInfo]) {
    let mut index = 0;
    while index < table.len() {
        assert!(table[index].id == index as i32, "field ids must be dense and zero-based");
        index += 1;
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[FieldInfo] = &[
        FieldInfo { id: 0, name: "street", annotation: "", formatting_mode: FormattingMode::TEXT },
        FieldInfo { id: 1, name: "city", annotation: "", formatting_mode: FormattingMode::TEXT },
        FieldInfo {
            id: 2,
            name: "Choice",
            annotation: "",
            formatting_mode: FormattingMode::DEFAULT.union(FormattingMode::UNTAGGED),
        },
    ];

    #[test]
    fn lookup_by_id_rejects_out_of_range_and_negative() {
        assert_eq!(lookup_by_id(TABLE, 1).map(|i| i.name), Some("city"));
        assert!(lookup_by_id(TABLE, 3).is_none());
        assert!(lookup_by_id(TABLE, -1).is_none());
    }

    #[test]
    fn name_lookup_is_exact_unless_caseless() {
        assert!(lookup_by_name(TABLE, "choice").is_none());
        assert_eq!(lookup_by_name_caseless(TABLE, "choice").map(|i| i.id), Some(2));
        assert_eq!(lookup_by_name(TABLE, "Choice").map(|i| i.id), Some(2));
    }

    #[test]
    fn formatting_mode_display_lists_flags() {
        let mode = FormattingMode::DEC | FormattingMode::NILLABLE;
        assert_eq!(mode.to_string(), "DEC | NILLABLE");
        assert!(mode.contains(FormattingMode::NILLABLE));
        assert!(!mode.contains(FormattingMode::UNTAGGED));
        assert_eq!(mode.base(), FormattingMode::DEC);
        assert_eq!(FormattingMode::DEFAULT.to_string(), "DEFAULT");
    }

    #[test]
    fn descriptors_serialize_flat() {
        let json = serde_json::to_value(TABLE[2]).unwrap();
        assert_eq!(json["name"], "Choice");
        assert_eq!(json["formatting_mode"], 0x0001_0000);
    }
}
