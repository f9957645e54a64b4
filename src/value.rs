//! Dynamic reflection over field values.
//!
//! `FieldValue` is what a visitor receives for every attribute or selection. It
//! exposes the value's category plus typed views (`as_array`, `as_nullable`,
//! `as_sequence`, ...) so generic code can walk a whole tree without knowing
//! the concrete types. `Box<T>` is transparent: it only exists to give the
//! recursive fixture types a finite size.
use std::any::Any;
use std::fmt::{self, Write};

use chrono::{DateTime, FixedOffset};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::Result;
use crate::info::EnumeratorInfo;
use crate::printer::{self, Printer};
use crate::visit::{Choice, Sequence};

/// Timestamp with a fixed UTC offset.
pub type DatetimeTz = DateTime<FixedOffset>;

/// Double-precision field. Wrapped so records keep `Eq` and `Hash`.
pub type Double = OrderedFloat<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Simple,
    Array,
    Nullable,
    Sequence,
    Choice,
    Enumeration,
    CustomizedType,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Simple => "simple",
            Self::Array => "array",
            Self::Nullable => "nullable",
            Self::Sequence => "sequence",
            Self::Choice => "choice",
            Self::Enumeration => "enumeration",
            Self::CustomizedType => "customized",
        };
        f.write_str(name)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TRAITS
// ————————————————————————————————————————————————————————————————————————————

pub trait FieldValue: Any + fmt::Debug {
    fn category(&self) -> Category;

    /// Schema-level type name, e.g. `int`, `vector<string>`, `Sequence3`.
    fn type_name(&self) -> String;

    /// Static counterpart of `type_name`, needed for empty containers.
    fn describe_type() -> String
    where
        Self: Sized;

    /// Restore the default value.
    fn reset(&mut self);

    fn print_value(&self, out: &mut dyn Write, level: i32, spaces_per_level: i32) -> fmt::Result;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Deep copy behind a fresh box.
    fn clone_value(&self) -> Box<dyn FieldValue>;

    /// Equality against a value of unknown type; false if the types differ.
    fn equals(&self, other: &dyn FieldValue) -> bool;

    fn as_array(&self) -> Option<&dyn ArrayValue> { None }
    fn as_array_mut(&mut self) -> Option<&mut dyn ArrayValue> { None }
    fn as_nullable(&self) -> Option<&dyn NullableValue> { None }
    fn as_nullable_mut(&mut self) -> Option<&mut dyn NullableValue> { None }
    fn as_sequence(&self) -> Option<&dyn Sequence> { None }
    fn as_sequence_mut(&mut self) -> Option<&mut dyn Sequence> { None }
    fn as_choice(&self) -> Option<&dyn Choice> { None }
    fn as_choice_mut(&mut self) -> Option<&mut dyn Choice> { None }
    fn as_enumeration(&self) -> Option<&dyn EnumerationValue> { None }
    fn as_enumeration_mut(&mut self) -> Option<&mut dyn EnumerationValue> { None }
    fn as_customized(&self) -> Option<&dyn CustomizedValue> { None }

    /// True if `name` names a selection of this type. An untagged attribute of
    /// this type then answers to that name in its parent's name lookup.
    fn forwards_selection_name(_name: &str) -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Resizable sequence of homogeneous elements.
pub trait ArrayValue {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    fn element(&self, index: usize) -> Option<&dyn FieldValue>;
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn FieldValue>;
    /// Grow with default elements or truncate.
    fn resize(&mut self, len: usize);
}

/// Value that is either null or holds exactly one `T`.
pub trait NullableValue {
    fn is_null(&self) -> bool;
    fn value(&self) -> Option<&dyn FieldValue>;
    fn value_mut(&mut self) -> Option<&mut dyn FieldValue>;
    /// Hold a default value unless one is already held, and return it.
    fn make_value(&mut self) -> &mut dyn FieldValue;
    fn make_null(&mut self);
}

/// Object-safe view of an enumeration.
pub trait EnumerationValue {
    fn class_name(&self) -> &'static str;
    fn enumerator_info(&self) -> &'static [EnumeratorInfo];
    fn to_int(&self) -> i32;
    fn to_str(&self) -> &'static str;
    /// On failure the value is left unchanged.
    fn assign_from_int(&mut self, number: i32) -> Result<()>;
    /// On failure the value is left unchanged.
    fn assign_from_name(&mut self, name: &str) -> Result<()>;
}

/// Object-safe view of a restricted primitive.
pub trait CustomizedValue {
    fn class_name(&self) -> &'static str;
    fn base_value(&self) -> &dyn FieldValue;
}

// ————————————————————————————————————————————————————————————————————————————
// SIMPLE TYPES
// ————————————————————————————————————————————————————————————————————————————

macro_rules! impl_simple_field_value {
    ($($ty:ty => $name:literal, |$v:ident| $shown:expr;)*) => {$(
        impl FieldValue for $ty {
            fn category(&self) -> Category { Category::Simple }
            fn type_name(&self) -> String { Self::describe_type() }
            fn describe_type() -> String { $name.to_string() }
            fn reset(&mut self) { *self = Default::default(); }
            fn print_value(&self, out: &mut dyn Write, level: i32, spaces_per_level: i32) -> fmt::Result {
                let $v = self;
                printer::print_scalar(out, level, spaces_per_level, format_args!("{}", $shown))
            }
            fn as_any(&self) -> &dyn Any { self }
            fn as_any_mut(&mut self) -> &mut dyn Any { self }
            fn clone_value(&self) -> Box<dyn FieldValue> { clone_value(self) }
            fn equals(&self, other: &dyn FieldValue) -> bool { equals(self, other) }
        }
    )*};
}

impl_simple_field_value! {
    bool => "bool", |v| v;
    u8 => "unsigned char", |v| v;
    i32 => "int", |v| v;
    u32 => "unsigned int", |v| v;
    i64 => "Int64", |v| v;
    Double => "double", |v| v.0;
    String => "string", |v| format_args!("\"{v}\"");
    DatetimeTz => "DatetimeTz", |v| v.format("%Y-%m-%dT%H:%M:%S%.3f%:z");
}

// ————————————————————————————————————————————————————————————————————————————
// CONTAINERS
// ————————————————————————————————————————————————————————————————————————————

impl<T: FieldValue + Default + Clone + PartialEq> FieldValue for Vec<T> {
    fn category(&self) -> Category { Category::Array }
    fn type_name(&self) -> String { Self::describe_type() }
    fn describe_type() -> String { format!("vector<{}>", T::describe_type()) }
    fn reset(&mut self) { self.clear(); }

    fn print_value(&self, out: &mut dyn Write, level: i32, spaces_per_level: i32) -> fmt::Result {
        let mut printer = Printer::new(out, level, spaces_per_level);
        printer.start()?;
        for element in self {
            printer.print_value(element)?;
        }
        printer.end()
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
    fn clone_value(&self) -> Box<dyn FieldValue> { clone_value(self) }
    fn equals(&self, other: &dyn FieldValue) -> bool { equals(self, other) }
    fn as_array(&self) -> Option<&dyn ArrayValue> { Some(self) }
    fn as_array_mut(&mut self) -> Option<&mut dyn ArrayValue> { Some(self) }

    fn forwards_selection_name(name: &str) -> bool {
        T::forwards_selection_name(name)
    }
}

impl<T: FieldValue + Default + Clone + PartialEq> ArrayValue for Vec<T> {
    fn len(&self) -> usize { Vec::len(self) }

    fn element(&self, index: usize) -> Option<&dyn FieldValue> {
        self.get(index).map(|x| x as &dyn FieldValue)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn FieldValue> {
        self.get_mut(index).map(|x| x as &mut dyn FieldValue)
    }

    fn resize(&mut self, len: usize) { self.resize_with(len, T::default); }
}

impl<T: FieldValue + Default + Clone + PartialEq> FieldValue for Option<T> {
    fn category(&self) -> Category { Category::Nullable }
    fn type_name(&self) -> String { Self::describe_type() }
    fn describe_type() -> String { format!("nullable<{}>", T::describe_type()) }
    fn reset(&mut self) { *self = None; }

    fn print_value(&self, out: &mut dyn Write, level: i32, spaces_per_level: i32) -> fmt::Result {
        match self {
            Some(value) => value.print_value(out, level, spaces_per_level),
            None => printer::print_scalar(out, level, spaces_per_level, format_args!("NULL")),
        }
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
    fn clone_value(&self) -> Box<dyn FieldValue> { clone_value(self) }
    fn equals(&self, other: &dyn FieldValue) -> bool { equals(self, other) }
    fn as_nullable(&self) -> Option<&dyn NullableValue> { Some(self) }
    fn as_nullable_mut(&mut self) -> Option<&mut dyn NullableValue> { Some(self) }

    fn forwards_selection_name(name: &str) -> bool {
        T::forwards_selection_name(name)
    }
}

impl<T: FieldValue + Default + Clone + PartialEq> NullableValue for Option<T> {
    fn is_null(&self) -> bool { self.is_none() }

    fn value(&self) -> Option<&dyn FieldValue> {
        self.as_ref().map(|x| x as &dyn FieldValue)
    }

    fn value_mut(&mut self) -> Option<&mut dyn FieldValue> {
        self.as_mut().map(|x| x as &mut dyn FieldValue)
    }

    fn make_value(&mut self) -> &mut dyn FieldValue {
        self.get_or_insert_with(T::default)
    }

    fn make_null(&mut self) { *self = None; }
}

/// Indirection at a recursive edge; every query goes to the boxed value.
impl<T: FieldValue + Default> FieldValue for Box<T> {
    fn category(&self) -> Category { (**self).category() }
    fn type_name(&self) -> String { (**self).type_name() }
    fn describe_type() -> String { T::describe_type() }
    fn reset(&mut self) { (**self).reset(); }

    fn print_value(&self, out: &mut dyn Write, level: i32, spaces_per_level: i32) -> fmt::Result {
        (**self).print_value(out, level, spaces_per_level)
    }

    fn as_any(&self) -> &dyn Any { (**self).as_any() }
    fn as_any_mut(&mut self) -> &mut dyn Any { (**self).as_any_mut() }
    fn clone_value(&self) -> Box<dyn FieldValue> { (**self).clone_value() }
    fn equals(&self, other: &dyn FieldValue) -> bool { (**self).equals(other) }
    fn as_array(&self) -> Option<&dyn ArrayValue> { (**self).as_array() }
    fn as_array_mut(&mut self) -> Option<&mut dyn ArrayValue> { (**self).as_array_mut() }
    fn as_nullable(&self) -> Option<&dyn NullableValue> { (**self).as_nullable() }
    fn as_nullable_mut(&mut self) -> Option<&mut dyn NullableValue> { (**self).as_nullable_mut() }
    fn as_sequence(&self) -> Option<&dyn Sequence> { (**self).as_sequence() }
    fn as_sequence_mut(&mut self) -> Option<&mut dyn Sequence> { (**self).as_sequence_mut() }
    fn as_choice(&self) -> Option<&dyn Choice> { (**self).as_choice() }
    fn as_choice_mut(&mut self) -> Option<&mut dyn Choice> { (**self).as_choice_mut() }
    fn as_enumeration(&self) -> Option<&dyn EnumerationValue> { (**self).as_enumeration() }
    fn as_enumeration_mut(&mut self) -> Option<&mut dyn EnumerationValue> { (**self).as_enumeration_mut() }
    fn as_customized(&self) -> Option<&dyn CustomizedValue> { (**self).as_customized() }

    fn forwards_selection_name(name: &str) -> bool {
        T::forwards_selection_name(name)
    }
}

/// `FieldValue::clone_value` for any `Clone` implementor.
pub fn clone_value<T: FieldValue + Clone>(value: &T) -> Box<dyn FieldValue> {
    Box::new(value.clone())
}

/// `FieldValue::equals` for any `PartialEq` implementor.
pub fn equals<T: FieldValue + PartialEq>(value: &T, other: &dyn FieldValue) -> bool {
    downcast_ref::<T>(other).is_some_and(|other| value == other)
}

/// Downcast helper that sees through the reflection layer.
pub fn downcast_ref<T: FieldValue>(value: &dyn FieldValue) -> Option<&T> {
    value.as_any().downcast_ref::<T>()
}

pub fn downcast_mut<T: FieldValue>(value: &mut dyn FieldValue) -> Option<&mut T> {
    value.as_any_mut().downcast_mut::<T>()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_values_print_and_reset() {
        let mut s = String::from("abc");
        assert_eq!(printer::render(&s, 0, -1), "\"abc\"");
        s.reset();
        assert!(s.is_empty());

        let d = OrderedFloat(1.5);
        assert_eq!(printer::render(&d, 1, 4), "    1.5\n");
        assert_eq!(d.type_name(), "double");
    }

    #[test]
    fn arrays_resize_with_defaults_and_print_inline() {
        let mut xs: Vec<i32> = vec![1, 2];
        assert_eq!(printer::render(&xs, 0, -1), "[ 1 2 ]");
        let array = xs.as_array_mut().unwrap();
        array.resize(4);
        assert_eq!(array.len(), 4);
        assert_eq!(downcast_ref::<i32>(array.element(3).unwrap()), Some(&0));
        assert_eq!(xs.type_name(), "vector<int>");
    }

    #[test]
    fn nullable_make_value_keeps_existing() {
        let mut n: Option<String> = Some("kept".into());
        let held = n.as_nullable_mut().unwrap().make_value();
        assert_eq!(downcast_ref::<String>(held).map(String::as_str), Some("kept"));

        let mut m: Option<i32> = None;
        assert_eq!(printer::render(&m, 0, -1), "NULL");
        m.as_nullable_mut().unwrap().make_value();
        assert_eq!(m, Some(0));
        m.reset();
        assert!(m.is_none());
    }

    #[test]
    fn dynamic_clone_and_equality() {
        let xs: Vec<Option<i32>> = vec![Some(1), None];
        let copy = xs.clone_value();
        assert!(xs.equals(copy.as_ref()));
        assert!(!xs.equals(&5i32));

        let boxed: Box<String> = Box::new("s".into());
        assert!(boxed.equals(&String::from("s")));
    }

    #[test]
    fn box_is_transparent() {
        let mut b: Box<i32> = Box::new(9);
        let value: &mut dyn FieldValue = &mut b;
        assert_eq!(value.category(), Category::Simple);
        *downcast_mut::<i32>(value).unwrap() = 11;
        assert_eq!(*b, 11);
    }
}
