//! Visitor protocol for sequences and choices.
//!
//! A visitor is called with a field and its descriptor and returns an `i32`:
//! zero continues, anything else stops the walk and is passed back to the
//! caller unchanged. `NOT_FOUND` is returned when an id or name does not
//! resolve, or when a choice has no active selection.
use crate::error::{Error, Result};
use crate::info::{self, FieldInfo, UNDEFINED_SELECTION_ID, UNDEFINED_SELECTION_NAME};
use crate::value::FieldValue;

pub const NOT_FOUND: i32 = -1;

/// Visitor with mutable access to each field.
pub trait Manipulator {
    fn manipulate(&mut self, value: &mut dyn FieldValue, info: &FieldInfo) -> i32;
}

/// Visitor with read-only access to each field.
pub trait Accessor {
    fn access(&mut self, value: &dyn FieldValue, info: &FieldInfo) -> i32;
}

impl<F> Manipulator for F
where
    F: FnMut(&mut dyn FieldValue, &FieldInfo) -> i32,
{
    fn manipulate(&mut self, value: &mut dyn FieldValue, info: &FieldInfo) -> i32 {
        self(value, info)
    }
}

impl<F> Accessor for F
where
    F: FnMut(&dyn FieldValue, &FieldInfo) -> i32,
{
    fn access(&mut self, value: &dyn FieldValue, info: &FieldInfo) -> i32 {
        self(value, info)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SEQUENCE
// ————————————————————————————————————————————————————————————————————————————

pub trait Sequence: FieldValue {
    fn class_name(&self) -> &'static str;

    /// Attribute descriptors in id order.
    fn attribute_info(&self) -> &'static [FieldInfo];

    /// Name lookup, including names forwarded through untagged attributes.
    fn lookup_attribute(&self, name: &str) -> Option<&'static FieldInfo>;

    fn manipulate_attribute(&mut self, manipulator: &mut dyn Manipulator, id: i32) -> i32;

    fn access_attribute(&self, accessor: &mut dyn Accessor, id: i32) -> i32;

    /// Visit every attribute in id order.
    fn manipulate_attributes(&mut self, manipulator: &mut dyn Manipulator) -> i32 {
        for info in self.attribute_info() {
            let ret = self.manipulate_attribute(manipulator, info.id);
            if ret != 0 {
                return ret;
            }
        }
        0
    }

    fn access_attributes(&self, accessor: &mut dyn Accessor) -> i32 {
        for info in self.attribute_info() {
            let ret = self.access_attribute(accessor, info.id);
            if ret != 0 {
                return ret;
            }
        }
        0
    }

    fn manipulate_attribute_by_name(&mut self, manipulator: &mut dyn Manipulator, name: &str) -> i32 {
        match self.lookup_attribute(name) {
            Some(info) => self.manipulate_attribute(manipulator, info.id),
            None => NOT_FOUND,
        }
    }

    fn access_attribute_by_name(&self, accessor: &mut dyn Accessor, name: &str) -> i32 {
        match self.lookup_attribute(name) {
            Some(info) => self.access_attribute(accessor, info.id),
            None => NOT_FOUND,
        }
    }

    fn has_attribute(&self, id: i32) -> bool {
        info::lookup_by_id(self.attribute_info(), id).is_some()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// CHOICE
// ————————————————————————————————————————————————————————————————————————————

pub trait Choice: FieldValue {
    fn class_name(&self) -> &'static str;

    /// Selection descriptors in id order.
    fn selection_info(&self) -> &'static [FieldInfo];

    fn lookup_selection(&self, name: &str) -> Option<&'static FieldInfo> {
        info::lookup_by_name(self.selection_info(), name)
    }

    /// Id of the active selection or `UNDEFINED_SELECTION_ID`.
    fn selection_id(&self) -> i32;

    /// Activate `id` holding its default value. `UNDEFINED_SELECTION_ID`
    /// resets the choice. On an unknown id the choice is left unchanged.
    fn make_selection(&mut self, id: i32) -> Result<()>;

    /// Visit the active selection; `NOT_FOUND` when none is active.
    fn manipulate_selection(&mut self, manipulator: &mut dyn Manipulator) -> i32;

    fn access_selection(&self, accessor: &mut dyn Accessor) -> i32;

    fn make_selection_by_name(&mut self, name: &str) -> Result<()> {
        match self.lookup_selection(name) {
            Some(info) => self.make_selection(info.id),
            None => Err(Error::UnknownSelectionName {
                type_name: Choice::class_name(self),
                name: name.to_string(),
            }),
        }
    }

    fn has_selection(&self, id: i32) -> bool {
        info::lookup_by_id(self.selection_info(), id).is_some()
    }

    fn is_undefined(&self) -> bool {
        self.selection_id() == UNDEFINED_SELECTION_ID
    }

    /// Name of the active selection, or the undefined placeholder.
    fn selection_name(&self) -> &'static str {
        info::lookup_by_id(self.selection_info(), self.selection_id())
            .map_or(UNDEFINED_SELECTION_NAME, |info| info.name)
    }
}
