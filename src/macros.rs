//! Type templates.
//!
//! Each macro expands a compact declaration into a complete value type:
//! - `sequence!`: a record with an attribute table, id/name lookup, visitor
//!   dispatch, reset and print.
//! - `choice!`: a tagged union with an explicit `Undefined` state, a selection
//!   table, typed accessors and `make_*` transitions.
//! - `enumeration!`: a closed `#[repr(i32)]` enum with name and number round-trips.
//! - `customized_type!`: a newtype over a primitive guarded by a restriction check.
//!
//! Field and selection ids must be written as dense zero-based literals. This is
//! checked at compile time.

/// Formatting mode from a `|`-separated list of `FormattingMode` constants.
#[doc(hidden)]
#[macro_export]
macro_rules! __formatting_mode {
    ($($mode:ident)|+) => {
        $crate::info::FormattingMode::DEFAULT $(.union($crate::info::FormattingMode::$mode))+
    };
}

#[macro_export]
macro_rules! sequence {
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($class:literal) {
            $(
                $(#[$fmeta:meta])*
                $id_const:ident = $id:literal => $field:ident : $ty:ty as $fname:literal [$($mode:ident)|+]
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            pub const CLASS_NAME: &'static str = $class;
            $( pub const $id_const: i32 = $id; )*

            pub const ATTRIBUTE_INFO_ARRAY: &'static [$crate::info::AttributeInfo] = &[
                $(
                    $crate::info::FieldInfo {
                        id: $id,
                        name: $fname,
                        annotation: "",
                        formatting_mode: $crate::__formatting_mode!($($mode)|+),
                    },
                )*
            ];

            pub const NUM_ATTRIBUTES: usize = Self::ATTRIBUTE_INFO_ARRAY.len();

            pub fn lookup_attribute_info(id: i32) -> Option<&'static $crate::info::AttributeInfo> {
                $crate::info::lookup_by_id(Self::ATTRIBUTE_INFO_ARRAY, id)
            }

            /// Exact name lookup, except that the selection names of an untagged
            /// attribute resolve (case-insensitively) to that attribute.
            pub fn lookup_attribute_info_by_name(name: &str) -> Option<&'static $crate::info::AttributeInfo> {
                $(
                    if Self::ATTRIBUTE_INFO_ARRAY[$id].formatting_mode.contains($crate::info::FormattingMode::UNTAGGED)
                        && <$ty as $crate::value::FieldValue>::forwards_selection_name(name)
                    {
                        return $crate::info::lookup_by_id(Self::ATTRIBUTE_INFO_ARRAY, $id);
                    }
                )*
                $crate::info::lookup_by_name(Self::ATTRIBUTE_INFO_ARRAY, name)
            }

            pub fn reset(&mut self) {
                $( $crate::value::FieldValue::reset(&mut self.$field); )*
            }

            pub fn print(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                let mut printer = $crate::printer::Printer::new(out, level, spaces_per_level);
                printer.start()?;
                $( printer.print_field(&Self::ATTRIBUTE_INFO_ARRAY[Self::$id_const as usize], &self.$field)?; )*
                printer.end()
            }
        }

        const _: () = $crate::info::assert_dense_ids($name::ATTRIBUTE_INFO_ARRAY);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.print(f, 0, -1)
            }
        }

        impl $crate::value::FieldValue for $name {
            fn category(&self) -> $crate::value::Category { $crate::value::Category::Sequence }
            fn type_name(&self) -> String { $class.to_string() }
            fn describe_type() -> String { $class.to_string() }
            fn reset(&mut self) { $name::reset(self) }

            fn print_value(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                $name::print(self, out, level, spaces_per_level)
            }

            fn as_any(&self) -> &dyn ::std::any::Any { self }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }

            fn clone_value(&self) -> Box<dyn $crate::value::FieldValue> {
                $crate::value::clone_value(self)
            }

            fn equals(&self, other: &dyn $crate::value::FieldValue) -> bool {
                $crate::value::equals(self, other)
            }

            fn as_sequence(&self) -> Option<&dyn $crate::visit::Sequence> { Some(self) }
            fn as_sequence_mut(&mut self) -> Option<&mut dyn $crate::visit::Sequence> { Some(self) }
        }

        impl $crate::visit::Sequence for $name {
            fn class_name(&self) -> &'static str { Self::CLASS_NAME }

            fn attribute_info(&self) -> &'static [$crate::info::AttributeInfo] {
                Self::ATTRIBUTE_INFO_ARRAY
            }

            fn lookup_attribute(&self, name: &str) -> Option<&'static $crate::info::AttributeInfo> {
                Self::lookup_attribute_info_by_name(name)
            }

            #[allow(unused_variables)]
            fn manipulate_attribute(&mut self, manipulator: &mut dyn $crate::visit::Manipulator, id: i32) -> i32 {
                match id {
                    $( $id => manipulator.manipulate(&mut self.$field, &Self::ATTRIBUTE_INFO_ARRAY[$id]), )*
                    _ => $crate::visit::NOT_FOUND,
                }
            }

            #[allow(unused_variables)]
            fn access_attribute(&self, accessor: &mut dyn $crate::visit::Accessor, id: i32) -> i32 {
                match id {
                    $( $id => accessor.access(&self.$field, &Self::ATTRIBUTE_INFO_ARRAY[$id]), )*
                    _ => $crate::visit::NOT_FOUND,
                }
            }
        }
    };
}

#[macro_export]
macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($class:literal) {
            $(
                $id_const:ident = $id:literal => $variant:ident($ty:ty) as $sname:literal [$($mode:ident)|+] {
                    $is:ident, $get:ident, $get_mut:ident, $make:ident, $make_with:ident
                }
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            Undefined,
            $( $variant($ty), )+
        }

        impl $name {
            pub const CLASS_NAME: &'static str = $class;
            pub const SELECTION_ID_UNDEFINED: i32 = $crate::info::UNDEFINED_SELECTION_ID;
            $( pub const $id_const: i32 = $id; )+

            pub const SELECTION_INFO_ARRAY: &'static [$crate::info::SelectionInfo] = &[
                $(
                    $crate::info::FieldInfo {
                        id: $id,
                        name: $sname,
                        annotation: "",
                        formatting_mode: $crate::__formatting_mode!($($mode)|+),
                    },
                )+
            ];

            pub const NUM_SELECTIONS: usize = Self::SELECTION_INFO_ARRAY.len();

            pub fn lookup_selection_info(id: i32) -> Option<&'static $crate::info::SelectionInfo> {
                $crate::info::lookup_by_id(Self::SELECTION_INFO_ARRAY, id)
            }

            pub fn lookup_selection_info_by_name(name: &str) -> Option<&'static $crate::info::SelectionInfo> {
                $crate::info::lookup_by_name(Self::SELECTION_INFO_ARRAY, name)
            }

            pub fn selection_id(&self) -> i32 {
                match self {
                    Self::Undefined => Self::SELECTION_ID_UNDEFINED,
                    $( Self::$variant(_) => $id, )+
                }
            }

            pub fn is_undefined_value(&self) -> bool {
                matches!(self, Self::Undefined)
            }

            pub fn reset(&mut self) {
                *self = Self::Undefined;
            }

            /// Activate `id` with its default value; the undefined id resets.
            pub fn make_selection(&mut self, id: i32) -> $crate::error::Result<()> {
                match id {
                    $crate::info::UNDEFINED_SELECTION_ID => {
                        if !self.is_undefined_value() {
                            self.trace_switch(id);
                        }
                        self.reset();
                    }
                    $( $id => { self.$make(); } )+
                    _ => {
                        return Err($crate::error::Error::UnknownSelectionId { type_name: $class, id });
                    }
                }
                Ok(())
            }

            fn trace_switch(&self, to: i32) {
                $crate::__tracing::trace!(
                    class = $class,
                    from = self.selection_id(),
                    to,
                    "switching selection"
                );
            }

            pub fn make_selection_by_name(&mut self, name: &str) -> $crate::error::Result<()> {
                match Self::lookup_selection_info_by_name(name) {
                    Some(info) => self.make_selection(info.id),
                    None => Err($crate::error::Error::UnknownSelectionName {
                        type_name: $class,
                        name: name.to_string(),
                    }),
                }
            }

            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                /// Panics unless this selection is active.
                #[track_caller]
                pub fn $get(&self) -> &$ty {
                    match self {
                        Self::$variant(value) => value,
                        _ => panic!("`{}`: selection `{}` is not active", $class, $sname),
                    }
                }

                /// Panics unless this selection is active.
                #[track_caller]
                pub fn $get_mut(&mut self) -> &mut $ty {
                    match self {
                        Self::$variant(value) => value,
                        _ => panic!("`{}`: selection `{}` is not active", $class, $sname),
                    }
                }

                /// Activate this selection holding its default value. Re-selecting
                /// the active selection resets it.
                pub fn $make(&mut self) -> &mut $ty {
                    match self {
                        Self::$variant(value) => $crate::value::FieldValue::reset(value),
                        _ => {
                            self.trace_switch($id);
                            *self = Self::$variant(Default::default());
                        }
                    }
                    self.$get_mut()
                }

                /// Activate this selection holding `value`.
                pub fn $make_with(&mut self, value: $ty) -> &mut $ty {
                    if !self.$is() {
                        self.trace_switch($id);
                    }
                    *self = Self::$variant(value);
                    self.$get_mut()
                }
            )+

            pub fn print(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                let mut printer = $crate::printer::Printer::new(out, level, spaces_per_level);
                printer.start()?;
                match self {
                    Self::Undefined => printer.print_text("SELECTION UNDEFINED")?,
                    $( Self::$variant(value) => printer.print_field(&Self::SELECTION_INFO_ARRAY[Self::$id_const as usize], value)?, )+
                }
                printer.end()
            }
        }

        const _: () = $crate::info::assert_dense_ids($name::SELECTION_INFO_ARRAY);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.print(f, 0, -1)
            }
        }

        impl $crate::value::FieldValue for $name {
            fn category(&self) -> $crate::value::Category { $crate::value::Category::Choice }
            fn type_name(&self) -> String { $class.to_string() }
            fn describe_type() -> String { $class.to_string() }
            fn reset(&mut self) { $name::reset(self) }

            fn print_value(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                $name::print(self, out, level, spaces_per_level)
            }

            fn as_any(&self) -> &dyn ::std::any::Any { self }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }

            fn clone_value(&self) -> Box<dyn $crate::value::FieldValue> {
                $crate::value::clone_value(self)
            }

            fn equals(&self, other: &dyn $crate::value::FieldValue) -> bool {
                $crate::value::equals(self, other)
            }

            fn as_choice(&self) -> Option<&dyn $crate::visit::Choice> { Some(self) }
            fn as_choice_mut(&mut self) -> Option<&mut dyn $crate::visit::Choice> { Some(self) }

            fn forwards_selection_name(name: &str) -> bool {
                $crate::info::lookup_by_name_caseless(Self::SELECTION_INFO_ARRAY, name).is_some()
            }
        }

        impl $crate::visit::Choice for $name {
            fn class_name(&self) -> &'static str { Self::CLASS_NAME }

            fn selection_info(&self) -> &'static [$crate::info::SelectionInfo] {
                Self::SELECTION_INFO_ARRAY
            }

            fn selection_id(&self) -> i32 { $name::selection_id(self) }

            fn make_selection(&mut self, id: i32) -> $crate::error::Result<()> {
                $name::make_selection(self, id)
            }

            fn manipulate_selection(&mut self, manipulator: &mut dyn $crate::visit::Manipulator) -> i32 {
                match self {
                    Self::Undefined => $crate::visit::NOT_FOUND,
                    $( Self::$variant(value) => manipulator.manipulate(value, &Self::SELECTION_INFO_ARRAY[$id]), )+
                }
            }

            fn access_selection(&self, accessor: &mut dyn $crate::visit::Accessor) -> i32 {
                match self {
                    Self::Undefined => $crate::visit::NOT_FOUND,
                    $( Self::$variant(value) => accessor.access(value, &Self::SELECTION_INFO_ARRAY[$id]), )+
                }
            }
        }
    };
}

#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($class:literal) {
            $first:ident = $first_value:literal => $first_name:literal
            $(, $variant:ident = $value:literal => $vname:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(i32)]
        pub enum $name {
            #[default]
            $first = $first_value,
            $( $variant = $value, )*
        }

        impl $name {
            pub const CLASS_NAME: &'static str = $class;

            pub const ENUMERATOR_INFO_ARRAY: &'static [$crate::info::EnumeratorInfo] = &[
                $crate::info::EnumeratorInfo { value: $first_value, name: $first_name, annotation: "" },
                $( $crate::info::EnumeratorInfo { value: $value, name: $vname, annotation: "" }, )*
            ];

            pub const NUM_ENUMERATORS: usize = Self::ENUMERATOR_INFO_ARRAY.len();

            pub fn to_str(self) -> &'static str {
                match self {
                    Self::$first => $first_name,
                    $( Self::$variant => $vname, )*
                }
            }

            pub fn to_int(self) -> i32 {
                self as i32
            }

            pub fn from_int(number: i32) -> Option<Self> {
                match number {
                    $first_value => Some(Self::$first),
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $first_name => Some(Self::$first),
                    $( $vname => Some(Self::$variant), )*
                    _ => None,
                }
            }

            pub fn reset(&mut self) {
                *self = Self::default();
            }

            pub fn print(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                $crate::printer::print_scalar(out, level, spaces_per_level, format_args!("{}", self.to_str()))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.to_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(name: &str) -> $crate::error::Result<Self> {
                Self::from_name(name).ok_or_else(|| $crate::error::Error::UnknownEnumeratorName {
                    type_name: $class,
                    name: name.to_string(),
                })
            }
        }

        impl ::std::convert::TryFrom<i32> for $name {
            type Error = $crate::error::Error;

            fn try_from(value: i32) -> $crate::error::Result<Self> {
                Self::from_int(value)
                    .ok_or($crate::error::Error::UnknownEnumeratorValue { type_name: $class, value })
            }
        }

        impl $crate::value::FieldValue for $name {
            fn category(&self) -> $crate::value::Category { $crate::value::Category::Enumeration }
            fn type_name(&self) -> String { $class.to_string() }
            fn describe_type() -> String { $class.to_string() }
            fn reset(&mut self) { $name::reset(self) }

            fn print_value(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                $name::print(self, out, level, spaces_per_level)
            }

            fn as_any(&self) -> &dyn ::std::any::Any { self }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }

            fn clone_value(&self) -> Box<dyn $crate::value::FieldValue> {
                $crate::value::clone_value(self)
            }

            fn equals(&self, other: &dyn $crate::value::FieldValue) -> bool {
                $crate::value::equals(self, other)
            }

            fn as_enumeration(&self) -> Option<&dyn $crate::value::EnumerationValue> { Some(self) }
            fn as_enumeration_mut(&mut self) -> Option<&mut dyn $crate::value::EnumerationValue> { Some(self) }
        }

        impl $crate::value::EnumerationValue for $name {
            fn class_name(&self) -> &'static str { Self::CLASS_NAME }

            fn enumerator_info(&self) -> &'static [$crate::info::EnumeratorInfo] {
                Self::ENUMERATOR_INFO_ARRAY
            }

            fn to_int(&self) -> i32 { $name::to_int(*self) }
            fn to_str(&self) -> &'static str { $name::to_str(*self) }

            fn assign_from_int(&mut self, number: i32) -> $crate::error::Result<()> {
                match <$name as ::std::convert::TryFrom<i32>>::try_from(number) {
                    Ok(value) => {
                        *self = value;
                        Ok(())
                    }
                    Err(err) => {
                        $crate::__tracing::debug!(class = $class, number, "unknown enumerator value");
                        Err(err)
                    }
                }
            }

            fn assign_from_name(&mut self, name: &str) -> $crate::error::Result<()> {
                match name.parse::<$name>() {
                    Ok(value) => {
                        *self = value;
                        Ok(())
                    }
                    Err(err) => {
                        $crate::__tracing::debug!(class = $class, name, "unknown enumerator name");
                        Err(err)
                    }
                }
            }
        }
    };
}

#[macro_export]
macro_rules! customized_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($base:ty) ($class:literal);
        check($value:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name($base);

        impl $name {
            pub const CLASS_NAME: &'static str = $class;

            pub fn check_restrictions($value: &$base) -> bool $check

            pub fn new(value: $base) -> $crate::error::Result<Self> {
                if Self::check_restrictions(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::error::Error::RestrictionViolated { type_name: $class })
                }
            }

            /// Validated write; on failure the current value is kept.
            pub fn from_value(&mut self, value: $base) -> $crate::error::Result<()> {
                if !Self::check_restrictions(&value) {
                    $crate::__tracing::debug!(class = $class, ?value, "restriction violated");
                    return Err($crate::error::Error::RestrictionViolated { type_name: $class });
                }
                self.0 = value;
                Ok(())
            }

            pub fn value(&self) -> &$base {
                &self.0
            }

            pub fn into_value(self) -> $base {
                self.0
            }

            pub fn reset(&mut self) {
                *self = Self::default();
            }

            pub fn print(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                $crate::value::FieldValue::print_value(&self.0, out, level, spaces_per_level)
            }
        }

        impl ::std::convert::TryFrom<$base> for $name {
            type Error = $crate::error::Error;

            fn try_from(value: $base) -> $crate::error::Result<Self> {
                Self::new(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.print(f, 0, -1)
            }
        }

        impl $crate::value::FieldValue for $name {
            fn category(&self) -> $crate::value::Category { $crate::value::Category::CustomizedType }
            fn type_name(&self) -> String { $class.to_string() }
            fn describe_type() -> String { $class.to_string() }
            fn reset(&mut self) { $name::reset(self) }

            fn print_value(
                &self,
                out: &mut dyn ::std::fmt::Write,
                level: i32,
                spaces_per_level: i32,
            ) -> ::std::fmt::Result {
                $name::print(self, out, level, spaces_per_level)
            }

            fn as_any(&self) -> &dyn ::std::any::Any { self }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }

            fn clone_value(&self) -> Box<dyn $crate::value::FieldValue> {
                $crate::value::clone_value(self)
            }

            fn equals(&self, other: &dyn $crate::value::FieldValue) -> bool {
                $crate::value::equals(self, other)
            }

            fn as_customized(&self) -> Option<&dyn $crate::value::CustomizedValue> { Some(self) }
        }

        impl $crate::value::CustomizedValue for $name {
            fn class_name(&self) -> &'static str { Self::CLASS_NAME }
            fn base_value(&self) -> &dyn $crate::value::FieldValue { &self.0 }
        }
    };
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::info::FormattingMode;
    use crate::value::{Category, FieldValue};
    use crate::visit::{Choice as _, Sequence as _, NOT_FOUND};

    crate::enumeration! {
        pub enum Colour ("Colour") {
            Red = 0 => "RED",
            Blue = 7 => "BLUE",
        }
    }

    crate::customized_type! {
        pub struct Short(String) ("Short");
        check(value) { value.len() <= 3 }
    }

    crate::sequence! {
        pub struct Point ("Point") {
            ATTRIBUTE_ID_X = 0 => x: i32 as "x" [DEC],
            ATTRIBUTE_ID_LABEL = 1 => label: Option<Short> as "label" [TEXT | NILLABLE],
        }
    }

    crate::choice! {
        pub enum Shape ("Shape") {
            SELECTION_ID_DOT = 0 => Dot(Point) as "dot" [DEFAULT] { is_dot_value, dot, dot_mut, make_dot, make_dot_with },
            SELECTION_ID_TINT = 1 => Tint(Colour) as "tint" [DEFAULT] { is_tint_value, tint, tint_mut, make_tint, make_tint_with },
        }
    }

    crate::sequence! {
        pub struct Canvas ("Canvas") {
            ATTRIBUTE_ID_NAME = 0 => name: String as "name" [TEXT],
            ATTRIBUTE_ID_CHOICE = 1 => shapes: Vec<Shape> as "Choice" [DEFAULT | UNTAGGED],
        }
    }

    crate::sequence! {
        pub struct Nothing ("Nothing") {}
    }

    #[test]
    fn sequence_metadata_and_lookup() {
        assert_eq!(Point::NUM_ATTRIBUTES, 2);
        assert_eq!(Point::lookup_attribute_info(1).map(|i| i.name), Some("label"));
        assert!(Point::lookup_attribute_info(2).is_none());
        let mode = Point::ATTRIBUTE_INFO_ARRAY[1].formatting_mode;
        assert_eq!(mode, FormattingMode::TEXT | FormattingMode::NILLABLE);
        assert_eq!(Nothing::NUM_ATTRIBUTES, 0);
        assert!(Nothing::lookup_attribute_info_by_name("x").is_none());
    }

    #[test]
    fn untagged_attribute_answers_to_selection_names() {
        let info = Canvas::lookup_attribute_info_by_name("TINT").unwrap();
        assert_eq!(info.id, Canvas::ATTRIBUTE_ID_CHOICE);
        assert_eq!(Canvas::lookup_attribute_info_by_name("name").map(|i| i.id), Some(0));
        assert!(Canvas::lookup_attribute_info_by_name("Name").is_none());
    }

    #[test]
    fn visitors_see_fields_in_order_and_stop_early() {
        let mut point = Point { x: 3, label: Short::new("ab".into()).ok() };
        let mut names = Vec::new();
        let ret = point.access_attributes(&mut |_: &dyn FieldValue, info: &crate::info::FieldInfo| {
            names.push(info.name);
            0
        });
        assert_eq!(ret, 0);
        assert_eq!(names, ["x", "label"]);

        let ret = point.manipulate_attributes(&mut |value: &mut dyn FieldValue, _: &crate::info::FieldInfo| {
            value.reset();
            42
        });
        assert_eq!(ret, 42);
        assert_eq!(point.x, 0);
        assert!(point.label.is_some());

        let mut noop = |_: &dyn FieldValue, _: &crate::info::FieldInfo| 0;
        assert_eq!(point.access_attribute(&mut noop, 9), NOT_FOUND);
        assert_eq!(point.access_attribute_by_name(&mut noop, "y"), NOT_FOUND);
    }

    #[test]
    fn choice_transitions() {
        let mut shape = Shape::default();
        assert!(shape.is_undefined_value());
        let mut noop = |_: &dyn FieldValue, _: &crate::info::FieldInfo| 0;
        assert_eq!(shape.access_selection(&mut noop), NOT_FOUND);

        shape.make_dot().x = 4;
        assert_eq!(shape.selection_id(), Shape::SELECTION_ID_DOT);
        shape.make_dot();
        assert_eq!(shape.dot().x, 0);

        shape.make_tint_with(Colour::Blue);
        assert_eq!(*shape.tint(), Colour::Blue);
        assert!(shape.make_selection(5).is_err());
        assert!(shape.is_tint_value());
        shape.make_selection(-1).unwrap();
        assert!(shape.is_undefined_value());
        shape.make_selection_by_name("dot").unwrap();
        assert!(shape.is_dot_value());
    }

    /// Counts TRACE events on the current thread.
    struct TraceCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for TraceCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool { true }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::TRACE {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn every_selection_switch_is_traced() {
        let switches = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(TraceCounter(switches.clone()), || {
            let mut shape = Shape::default();
            shape.make_tint_with(Colour::Blue);
            shape.make_tint_with(Colour::Red);
            shape.make_selection(-1).unwrap();
            shape.make_selection(-1).unwrap();
            shape.make_dot();
            shape.make_dot();
            shape.make_selection_by_name("tint").unwrap();
        });
        // undefined -> tint, tint -> undefined, undefined -> dot, dot -> tint
        assert_eq!(switches.load(Ordering::SeqCst), 4);
    }

    #[test]
    #[should_panic]
    fn inactive_selection_access_panics() {
        let shape = Shape::Tint(Colour::Red);
        let _ = shape.dot();
    }

    #[test]
    fn enumeration_and_customized_rules() {
        assert_eq!(Colour::from_int(7), Some(Colour::Blue));
        assert_eq!(Colour::from_name("GREEN"), None);
        assert_eq!(Colour::default().to_str(), "RED");

        let mut short = Short::new("abc".into()).unwrap();
        assert!(short.from_value("abcd".into()).is_err());
        assert_eq!(short.value(), "abc");
        assert_eq!(short.category(), Category::CustomizedType);
    }

    #[test]
    fn printing_nests_and_collapses() {
        let canvas = Canvas {
            name: "c".into(),
            shapes: vec![Shape::Tint(Colour::Blue), Shape::Undefined],
        };
        assert_eq!(
            canvas.to_string(),
            "[ name = \"c\" Choice = [ [ tint = BLUE ] [ SELECTION UNDEFINED ] ] ]"
        );
        let point = Point { x: 1, label: None };
        let mut out = String::new();
        point.print(&mut out, 0, 2).unwrap();
        assert_eq!(out, "[\n  x = 1\n  label = NULL\n]\n");
    }
}
