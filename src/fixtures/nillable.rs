//! Sequences whose single attribute exercises one nillable shape each.
crate::sequence! {
    pub struct MySequenceWithNillable ("MySequenceWithNillable") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: i32 as "attribute1" [DEC],
        ATTRIBUTE_ID_MY_NILLABLE = 1 => my_nillable: Option<String> as "myNillable" [TEXT | NILLABLE],
        ATTRIBUTE_ID_ATTRIBUTE2 = 2 => attribute2: String as "attribute2" [TEXT],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableBase64Binary ("MySequenceWithNillableBase64Binary") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Option<Vec<u8>> as "attribute1" [BASE64 | NILLABLE],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableHexBinary ("MySequenceWithNillableHexBinary") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Option<Vec<u8>> as "attribute1" [HEX | NILLABLE],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableIntArray ("MySequenceWithNillableIntArray") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Vec<Option<i32>> as "attribute1" [DEC | NILLABLE],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableIntList ("MySequenceWithNillableIntList") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Vec<Option<i32>> as "attribute1" [DEC | NILLABLE | LIST],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableIntSequenceArraySequence ("MySequenceWithNillableIntSequenceArraySequence") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: i32 as "attribute1" [DEC],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableIntSequenceArray ("MySequenceWithNillableIntSequenceArray") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Vec<Option<MySequenceWithNillableIntSequenceArraySequence>>
            as "attribute1" [DEFAULT | NILLABLE],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableStringArray ("MySequenceWithNillableStringArray") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Vec<Option<String>> as "attribute1" [TEXT | NILLABLE],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableStringList ("MySequenceWithNillableStringList") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Vec<Option<String>> as "attribute1" [TEXT | NILLABLE | LIST],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableStringSequenceArraySequence ("MySequenceWithNillableStringSequenceArraySequence") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: String as "attribute1" [TEXT],
    }
}

crate::sequence! {
    pub struct MySequenceWithNillableStringSequenceArray ("MySequenceWithNillableStringSequenceArray") {
        ATTRIBUTE_ID_ATTRIBUTE1 = 0 => attribute1: Vec<Option<MySequenceWithNillableStringSequenceArraySequence>>
            as "attribute1" [DEFAULT | NILLABLE],
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::FormattingMode;
    use crate::value::FieldValue;
    use crate::visit::Sequence as _;

    #[test]
    fn nillable_flag_is_reported() {
        let info = MySequenceWithNillable::lookup_attribute_info_by_name("myNillable").unwrap();
        assert!(info.formatting_mode.contains(FormattingMode::NILLABLE));
        let list = MySequenceWithNillableIntList::ATTRIBUTE_INFO_ARRAY[0].formatting_mode;
        assert!(list.contains(FormattingMode::LIST));
        assert_eq!(list.base(), FormattingMode::DEC);
    }

    #[test]
    fn visitor_can_fill_nulls_in_place() {
        let mut value = MySequenceWithNillableIntArray { attribute1: vec![Some(1), None, Some(3)] };
        value.manipulate_attributes(&mut |field: &mut dyn FieldValue, _: &crate::info::FieldInfo| {
            let array = field.as_array_mut().unwrap();
            for index in 0..array.len() {
                let element = array.element_mut(index).unwrap().as_nullable_mut().unwrap();
                if element.is_null() {
                    element.make_value();
                }
            }
            0
        });
        assert_eq!(value.attribute1, vec![Some(1), Some(0), Some(3)]);
    }

    #[test]
    fn prints_nulls_inside_arrays() {
        let value = MySequenceWithNillableStringSequenceArray {
            attribute1: vec![
                None,
                Some(MySequenceWithNillableStringSequenceArraySequence { attribute1: "a".into() }),
            ],
        };
        let mut out = String::new();
        value.print(&mut out, 0, 2).unwrap();
        assert_eq!(
            out,
            "[\n  attribute1 = [\n    NULL\n    [\n      attribute1 = \"a\"\n    ]\n  ]\n]\n"
        );
    }
}
