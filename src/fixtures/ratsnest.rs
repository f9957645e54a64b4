//! The "rat's nest": mutually recursive sequences and choices that touch every
//! field shape (arrays of nullables, nullable arrays, boxed cycles, customized
//! and enumerated leaves).
use crate::value::{DatetimeTz, Double};

crate::enumeration! {
    pub enum Enumerated ("Enumerated") {
        NewYork = 0 => "NEW_YORK",
        NewJersey = 1 => "NEW_JERSEY",
        London = 2 => "LONDON",
    }
}

crate::customized_type! {
    /// String of at most 8 characters.
    pub struct CustomString(String) ("CustomString");
    check(value) { value.chars().count() <= 8 }
}

crate::customized_type! {
    /// Integer no greater than 1000.
    pub struct CustomInt(i32) ("CustomInt");
    check(value) { *value <= 1000 }
}

crate::choice! {
    pub enum Choice1 ("Choice1") {
        SELECTION_ID_SELECTION1 = 0 => Selection1(i32) as "selection1" [DEC] {
            is_selection1_value, selection1, selection1_mut, make_selection1, make_selection1_with
        },
        SELECTION_ID_SELECTION2 = 1 => Selection2(Double) as "selection2" [DEFAULT] {
            is_selection2_value, selection2, selection2_mut, make_selection2, make_selection2_with
        },
        SELECTION_ID_SELECTION3 = 2 => Selection3(Box<Sequence4>) as "selection3" [DEFAULT] {
            is_selection3_value, selection3, selection3_mut, make_selection3, make_selection3_with
        },
        SELECTION_ID_SELECTION4 = 3 => Selection4(Box<Choice2>) as "selection4" [DEFAULT] {
            is_selection4_value, selection4, selection4_mut, make_selection4, make_selection4_with
        },
    }
}

crate::choice! {
    pub enum Choice2 ("Choice2") {
        SELECTION_ID_SELECTION1 = 0 => Selection1(bool) as "selection1" [TEXT] {
            is_selection1_value, selection1, selection1_mut, make_selection1, make_selection1_with
        },
        SELECTION_ID_SELECTION2 = 1 => Selection2(String) as "selection2" [TEXT] {
            is_selection2_value, selection2, selection2_mut, make_selection2, make_selection2_with
        },
        SELECTION_ID_SELECTION3 = 2 => Selection3(Box<Choice1>) as "selection3" [DEFAULT] {
            is_selection3_value, selection3, selection3_mut, make_selection3, make_selection3_with
        },
        SELECTION_ID_SELECTION4 = 3 => Selection4(u32) as "selection4" [DEC] {
            is_selection4_value, selection4, selection4_mut, make_selection4, make_selection4_with
        },
    }
}

crate::choice! {
    pub enum Choice3 ("Choice3") {
        SELECTION_ID_SELECTION1 = 0 => Selection1(Sequence6) as "selection1" [DEFAULT] {
            is_selection1_value, selection1, selection1_mut, make_selection1, make_selection1_with
        },
        SELECTION_ID_SELECTION2 = 1 => Selection2(u8) as "selection2" [DEC] {
            is_selection2_value, selection2, selection2_mut, make_selection2, make_selection2_with
        },
        SELECTION_ID_SELECTION3 = 2 => Selection3(CustomString) as "selection3" [TEXT] {
            is_selection3_value, selection3, selection3_mut, make_selection3, make_selection3_with
        },
        SELECTION_ID_SELECTION4 = 3 => Selection4(CustomInt) as "selection4" [DEC] {
            is_selection4_value, selection4, selection4_mut, make_selection4, make_selection4_with
        },
    }
}

crate::sequence! {
    pub struct Sequence1 ("Sequence1") {
        ATTRIBUTE_ID_ELEMENT1 = 0 => element1: Option<Choice3> as "element1" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT2 = 1 => element2: Vec<Choice1> as "element2" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT3 = 2 => element3: Box<Choice2> as "element3" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT4 = 3 => element4: Vec<Option<Choice1>> as "element4" [DEFAULT | NILLABLE],
        ATTRIBUTE_ID_ELEMENT5 = 4 => element5: Vec<Choice3> as "element5" [DEFAULT],
    }
}

crate::sequence! {
    pub struct Sequence2 ("Sequence2") {
        ATTRIBUTE_ID_ELEMENT1 = 0 => element1: CustomString as "element1" [TEXT],
        ATTRIBUTE_ID_ELEMENT2 = 1 => element2: u8 as "element2" [DEC],
        ATTRIBUTE_ID_ELEMENT3 = 2 => element3: DatetimeTz as "element3" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT4 = 3 => element4: Option<Choice1> as "element4" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT5 = 4 => element5: Option<Double> as "element5" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT6 = 5 => element6: Vec<Option<String>> as "element6" [TEXT | NILLABLE],
        ATTRIBUTE_ID_ELEMENT7 = 6 => element7: Vec<Option<CustomString>> as "element7" [TEXT | NILLABLE],
    }
}

crate::sequence! {
    pub struct Sequence3 ("Sequence3") {
        ATTRIBUTE_ID_ELEMENT1 = 0 => element1: Vec<Enumerated> as "element1" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT2 = 1 => element2: Vec<String> as "element2" [TEXT],
        ATTRIBUTE_ID_ELEMENT3 = 2 => element3: Option<bool> as "element3" [TEXT],
        ATTRIBUTE_ID_ELEMENT4 = 3 => element4: Option<String> as "element4" [TEXT],
        ATTRIBUTE_ID_ELEMENT5 = 4 => element5: Option<Box<Sequence5>> as "element5" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT6 = 5 => element6: Vec<Option<Enumerated>> as "element6" [DEFAULT | NILLABLE],
    }
}

crate::sequence! {
    pub struct Sequence4 ("Sequence4") {
        ATTRIBUTE_ID_ELEMENT1 = 0 => element1: Vec<Sequence3> as "element1" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT2 = 1 => element2: Vec<Choice1> as "element2" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT3 = 2 => element3: Option<Vec<u8>> as "element3" [HEX],
        ATTRIBUTE_ID_ELEMENT4 = 3 => element4: Option<i32> as "element4" [DEC],
        ATTRIBUTE_ID_ELEMENT5 = 4 => element5: Option<DatetimeTz> as "element5" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT6 = 5 => element6: Option<CustomString> as "element6" [TEXT],
        ATTRIBUTE_ID_ELEMENT7 = 6 => element7: Option<Enumerated> as "element7" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT8 = 7 => element8: bool as "element8" [TEXT],
        ATTRIBUTE_ID_ELEMENT9 = 8 => element9: String as "element9" [TEXT],
        ATTRIBUTE_ID_ELEMENT10 = 9 => element10: Double as "element10" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT11 = 10 => element11: Vec<u8> as "element11" [HEX],
        ATTRIBUTE_ID_ELEMENT12 = 11 => element12: i32 as "element12" [DEC],
        ATTRIBUTE_ID_ELEMENT13 = 12 => element13: Enumerated as "element13" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT14 = 13 => element14: Vec<bool> as "element14" [TEXT],
        ATTRIBUTE_ID_ELEMENT15 = 14 => element15: Vec<Double> as "element15" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT16 = 15 => element16: Option<Vec<u8>> as "element16" [HEX],
        ATTRIBUTE_ID_ELEMENT17 = 16 => element17: Vec<i32> as "element17" [DEC],
        ATTRIBUTE_ID_ELEMENT18 = 17 => element18: Vec<DatetimeTz> as "element18" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT19 = 18 => element19: Vec<CustomString> as "element19" [TEXT],
    }
}

crate::sequence! {
    pub struct Sequence5 ("Sequence5") {
        ATTRIBUTE_ID_ELEMENT1 = 0 => element1: Box<Sequence3> as "element1" [DEFAULT],
        ATTRIBUTE_ID_ELEMENT2 = 1 => element2: Vec<Option<bool>> as "element2" [TEXT | NILLABLE],
        ATTRIBUTE_ID_ELEMENT3 = 2 => element3: Vec<Option<Double>> as "element3" [DEFAULT | NILLABLE],
        ATTRIBUTE_ID_ELEMENT4 = 3 => element4: Option<Vec<u8>> as "element4" [HEX | NILLABLE],
        ATTRIBUTE_ID_ELEMENT5 = 4 => element5: Vec<Option<i32>> as "element5" [DEC | NILLABLE],
        ATTRIBUTE_ID_ELEMENT6 = 5 => element6: Vec<Option<DatetimeTz>> as "element6" [DEFAULT | NILLABLE],
        ATTRIBUTE_ID_ELEMENT7 = 6 => element7: Vec<Option<Box<Sequence3>>> as "element7" [DEFAULT | NILLABLE],
    }
}

crate::sequence! {
    pub struct Sequence6 ("Sequence6") {
        ATTRIBUTE_ID_ELEMENT1 = 0 => element1: Option<u8> as "element1" [DEC],
        ATTRIBUTE_ID_ELEMENT2 = 1 => element2: Option<CustomString> as "element2" [TEXT],
        ATTRIBUTE_ID_ELEMENT3 = 2 => element3: Option<CustomInt> as "element3" [DEC],
        ATTRIBUTE_ID_ELEMENT4 = 3 => element4: u32 as "element4" [DEC],
        ATTRIBUTE_ID_ELEMENT5 = 4 => element5: u8 as "element5" [DEC],
        ATTRIBUTE_ID_ELEMENT6 = 5 => element6: Vec<Option<CustomInt>> as "element6" [DEC | NILLABLE],
        ATTRIBUTE_ID_ELEMENT7 = 6 => element7: CustomString as "element7" [TEXT],
        ATTRIBUTE_ID_ELEMENT8 = 7 => element8: CustomInt as "element8" [DEC],
        ATTRIBUTE_ID_ELEMENT9 = 8 => element9: Option<u32> as "element9" [DEC],
        ATTRIBUTE_ID_ELEMENT10 = 9 => element10: Vec<u8> as "element10" [DEC],
        ATTRIBUTE_ID_ELEMENT11 = 10 => element11: Vec<CustomString> as "element11" [TEXT],
        ATTRIBUTE_ID_ELEMENT12 = 11 => element12: Vec<u32> as "element12" [DEC],
        ATTRIBUTE_ID_ELEMENT13 = 12 => element13: Vec<Option<u8>> as "element13" [DEC | NILLABLE],
        ATTRIBUTE_ID_ELEMENT14 = 13 => element14: Vec<CustomInt> as "element14" [DEC],
        ATTRIBUTE_ID_ELEMENT15 = 14 => element15: Vec<Option<u32>> as "element15" [DEC | NILLABLE],
    }
}

// ------------------------------- Tests ------------------------------------ //
