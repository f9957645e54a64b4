//! Types used to drive a field-driven encoder: one of every category, plus
//! degenerate shapes (empty sequences, untagged attributes, single-selection
//! choices).
crate::sequence! {
    pub struct EncoderTestAddress ("EncoderTestAddress") {
        ATTRIBUTE_ID_STREET = 0 => street: String as "street" [TEXT],
        ATTRIBUTE_ID_CITY = 1 => city: String as "city" [TEXT],
        ATTRIBUTE_ID_STATE = 2 => state: String as "state" [TEXT],
    }
}

crate::sequence! {
    pub struct EncoderTestEmployee ("EncoderTestEmployee") {
        ATTRIBUTE_ID_NAME = 0 => name: String as "name" [TEXT],
        ATTRIBUTE_ID_HOME_ADDRESS = 1 => home_address: EncoderTestAddress as "homeAddress" [DEFAULT],
        ATTRIBUTE_ID_AGE = 2 => age: i32 as "age" [DEC],
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ALL CATEGORIES
// ————————————————————————————————————————————————————————————————————————————

crate::choice! {
    pub enum EncoderTestSequenceWithAllCategoriesChoice ("EncoderTestSequenceWithAllCategoriesChoice") {
        SELECTION_ID_SELECTION0 = 0 => Selection0(i32) as "selection0" [DEC] {
            is_selection0_value, selection0, selection0_mut, make_selection0, make_selection0_with
        },
    }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithAllCategoriesSequence ("EncoderTestSequenceWithAllCategoriesSequence") {
        ATTRIBUTE_ID_ATTRIBUTE = 0 => attribute: i32 as "attribute" [DEC],
    }
}

crate::enumeration! {
    pub enum EncoderTestSequenceWithAllCategoriesEnumeration ("EncoderTestSequenceWithAllCategoriesEnumeration") {
        A = 0 => "A",
        B = 1 => "B",
    }
}

crate::customized_type! {
    pub struct EncoderTestSequenceWithAllCategoriesCustomizedType(String)
        ("EncoderTestSequenceWithAllCategoriesCustomizedType");
    check(value) { value.chars().count() <= 10 }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithAllCategories ("EncoderTestSequenceWithAllCategories") {
        ATTRIBUTE_ID_CHAR_ARRAY = 0 => char_array: Vec<u8> as "charArray" [HEX],
        ATTRIBUTE_ID_ARRAY = 1 => array: Vec<i32> as "array" [DEC],
        ATTRIBUTE_ID_CHOICE = 2 => choice: EncoderTestSequenceWithAllCategoriesChoice as "choice" [DEFAULT],
        ATTRIBUTE_ID_CUSTOMIZED_TYPE = 3 => customized_type: EncoderTestSequenceWithAllCategoriesCustomizedType
            as "customizedType" [TEXT],
        ATTRIBUTE_ID_ENUMERATION = 4 => enumeration: EncoderTestSequenceWithAllCategoriesEnumeration
            as "enumeration" [DEFAULT],
        ATTRIBUTE_ID_NULLABLE_VALUE = 5 => nullable_value: Option<i32> as "nullableValue" [DEC],
        ATTRIBUTE_ID_SEQUENCE = 6 => sequence: EncoderTestSequenceWithAllCategoriesSequence as "sequence" [DEFAULT],
        ATTRIBUTE_ID_SIMPLE = 7 => simple: i32 as "simple" [DEC],
    }
}

crate::choice! {
    pub enum EncoderTestChoiceWithAllCategoriesChoice ("EncoderTestChoiceWithAllCategoriesChoice") {
        SELECTION_ID_SELECTION0 = 0 => Selection0(i32) as "selection0" [DEC] {
            is_selection0_value, selection0, selection0_mut, make_selection0, make_selection0_with
        },
    }
}

crate::sequence! {
    pub struct EncoderTestChoiceWithAllCategoriesSequence ("EncoderTestChoiceWithAllCategoriesSequence") {
        ATTRIBUTE_ID_ATTRIBUTE = 0 => attribute: i32 as "attribute" [DEC],
    }
}

crate::enumeration! {
    pub enum EncoderTestChoiceWithAllCategoriesEnumeration ("EncoderTestChoiceWithAllCategoriesEnumeration") {
        A = 0 => "A",
        B = 1 => "B",
    }
}

crate::customized_type! {
    pub struct EncoderTestChoiceWithAllCategoriesCustomizedType(String)
        ("EncoderTestChoiceWithAllCategoriesCustomizedType");
    check(value) { value.chars().count() <= 10 }
}

crate::choice! {
    pub enum EncoderTestChoiceWithAllCategories ("EncoderTestChoiceWithAllCategories") {
        SELECTION_ID_CHAR_ARRAY = 0 => CharArray(Vec<u8>) as "charArray" [HEX] {
            is_char_array_value, char_array, char_array_mut, make_char_array, make_char_array_with
        },
        SELECTION_ID_CHOICE = 1 => Choice(EncoderTestChoiceWithAllCategoriesChoice) as "choice" [DEFAULT] {
            is_choice_value, choice, choice_mut, make_choice, make_choice_with
        },
        SELECTION_ID_CUSTOMIZED_TYPE = 2 => CustomizedType(EncoderTestChoiceWithAllCategoriesCustomizedType)
            as "customizedType" [TEXT] {
            is_customized_type_value, customized_type, customized_type_mut, make_customized_type,
            make_customized_type_with
        },
        SELECTION_ID_ENUMERATION = 3 => Enumeration(EncoderTestChoiceWithAllCategoriesEnumeration)
            as "enumeration" [DEFAULT] {
            is_enumeration_value, enumeration, enumeration_mut, make_enumeration, make_enumeration_with
        },
        SELECTION_ID_SEQUENCE = 4 => Sequence(EncoderTestChoiceWithAllCategoriesSequence) as "sequence" [DEFAULT] {
            is_sequence_value, sequence, sequence_mut, make_sequence, make_sequence_with
        },
        SELECTION_ID_SIMPLE = 5 => Simple(i32) as "simple" [DEC] {
            is_simple_value, simple, simple_mut, make_simple, make_simple_with
        },
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DEGENERATE SHAPES
// ————————————————————————————————————————————————————————————————————————————

crate::sequence! {
    pub struct EncoderTestDegenerateChoice1Sequence ("EncoderTestDegenerateChoice1Sequence") {}
}

crate::choice! {
    pub enum EncoderTestDegenerateChoice1 ("EncoderTestDegenerateChoice1") {
        SELECTION_ID_SEQUENCE = 0 => Sequence(EncoderTestDegenerateChoice1Sequence) as "Sequence" [DEFAULT | UNTAGGED] {
            is_sequence_value, sequence, sequence_mut, make_sequence, make_sequence_with
        },
    }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged0 ("EncoderTestSequenceWithUntagged0") {}
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged1Sequence ("EncoderTestSequenceWithUntagged1Sequence") {}
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged1 ("EncoderTestSequenceWithUntagged1") {
        ATTRIBUTE_ID_SEQUENCE = 0 => sequence: EncoderTestSequenceWithUntagged1Sequence
            as "Sequence" [DEFAULT | UNTAGGED],
    }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged2 ("EncoderTestSequenceWithUntagged2") {
        ATTRIBUTE_ID_ATTRIBUTE0 = 0 => attribute0: i32 as "attribute0" [DEC],
    }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged3Sequence ("EncoderTestSequenceWithUntagged3Sequence") {}
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged3Sequence1 ("EncoderTestSequenceWithUntagged3Sequence1") {}
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged3 ("EncoderTestSequenceWithUntagged3") {
        ATTRIBUTE_ID_SEQUENCE = 0 => sequence: EncoderTestSequenceWithUntagged3Sequence
            as "Sequence" [DEFAULT | UNTAGGED],
        ATTRIBUTE_ID_SEQUENCE1 = 1 => sequence1: EncoderTestSequenceWithUntagged3Sequence1
            as "Sequence-1" [DEFAULT | UNTAGGED],
    }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged10Sequence ("EncoderTestSequenceWithUntagged10Sequence") {}
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged10 ("EncoderTestSequenceWithUntagged10") {
        ATTRIBUTE_ID_SEQUENCE = 0 => sequence: EncoderTestSequenceWithUntagged10Sequence
            as "Sequence" [DEFAULT | UNTAGGED],
        ATTRIBUTE_ID_ATTRIBUTE0 = 1 => attribute0: i32 as "attribute0" [DEC],
        ATTRIBUTE_ID_ATTRIBUTE1 = 2 => attribute1: i32 as "attribute1" [DEC],
    }
}

crate::sequence! {
    pub struct EncoderTestSequenceWithUntagged14 ("EncoderTestSequenceWithUntagged14") {
        ATTRIBUTE_ID_ATTRIBUTE0 = 0 => attribute0: i32 as "attribute0" [DEC],
        ATTRIBUTE_ID_ATTRIBUTE1 = 1 => attribute1: i32 as "attribute1" [DEC],
        ATTRIBUTE_ID_ATTRIBUTE2 = 2 => attribute2: i32 as "attribute2" [DEC],
    }
}

// ------------------------------- Tests ------------------------------------ //
