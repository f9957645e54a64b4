use std::collections::HashSet;

use chrono::{FixedOffset, TimeZone};
use ordered_float::OrderedFloat;
use schema_fixtures::fixtures::basic_schema::{BasicSchemaElement, BasicSchemaElementChoice};
use schema_fixtures::fixtures::encoder::EncoderTestChoiceWithAllCategories;
use schema_fixtures::fixtures::ratsnest::{
    Choice1, Choice2, Choice3, CustomString, Enumerated, Sequence2, Sequence4, Sequence6,
};
use schema_fixtures::fixtures::registry;
use schema_fixtures::info::{FieldInfo, FormattingMode};
use schema_fixtures::printer;
use schema_fixtures::value::{Category, FieldValue};
use schema_fixtures::visit::{Choice as _, NOT_FOUND, Sequence as _};

#[test]
fn visitor_walks_a_whole_tree() {
    let mut seq4 = Sequence4::default();
    seq4.element2.push(Choice1::default());
    seq4.element2[0].make_selection4().make_selection2_with("leaf".into());
    seq4.element1.push(Default::default());

    fn count(value: &dyn FieldValue) -> usize {
        let mut total = 1;
        if let Some(sequence) = value.as_sequence() {
            sequence.access_attributes(&mut |field: &dyn FieldValue, _: &FieldInfo| {
                total += count(field);
                0
            });
        } else if let Some(choice) = value.as_choice() {
            choice.access_selection(&mut |field: &dyn FieldValue, _: &FieldInfo| {
                total += count(field);
                0
            });
        } else if let Some(array) = value.as_array() {
            for index in 0..array.len() {
                total += count(array.element(index).unwrap());
            }
        } else if let Some(nullable) = value.as_nullable() {
            if let Some(inner) = nullable.value() {
                total += count(inner);
            }
        }
        total
    }

    // seq4, its 19 attributes, one Sequence3 with 6 attributes, Choice1 -> Choice2 -> String
    assert_eq!(count(&seq4), 1 + 19 + (1 + 6) + 3);
}

#[test]
fn manipulate_by_name_reaches_the_named_field() {
    let mut seq6 = Sequence6::default();
    let ret = seq6.manipulate_attribute_by_name(
        &mut |value: &mut dyn FieldValue, info: &FieldInfo| {
            assert_eq!(info.formatting_mode, FormattingMode::DEC);
            *value.as_any_mut().downcast_mut::<u32>().unwrap() = 77;
            5
        },
        "element4",
    );
    assert_eq!(ret, 5);
    assert_eq!(seq6.element4, 77);

    let mut untouched = |_: &mut dyn FieldValue, _: &FieldInfo| 0;
    assert_eq!(seq6.manipulate_attribute_by_name(&mut untouched, "element16"), NOT_FOUND);
}

#[test]
fn choice_through_the_dyn_view() {
    let mut value = (registry::lookup("Choice3").unwrap().make)();
    let choice = value.as_choice_mut().unwrap();
    assert_eq!(choice.selection_name(), "(* UNDEFINED *)");
    choice.make_selection_by_name("selection3").unwrap();
    assert_eq!(choice.selection_id(), Choice3::SELECTION_ID_SELECTION3);
    assert!(choice.make_selection_by_name("selection9").is_err());
    assert_eq!(choice.selection_name(), "selection3");

    let concrete = value.as_any().downcast_ref::<Choice3>().unwrap();
    assert_eq!(concrete.selection3(), &CustomString::default());
}

#[test]
fn enumeration_through_the_dyn_view() {
    let mut value: Box<dyn FieldValue> = Box::new(Enumerated::NewYork);
    let view = value.as_enumeration_mut().unwrap();
    view.assign_from_name("LONDON").unwrap();
    assert!(view.assign_from_int(3).is_err());
    assert_eq!(view.to_int(), 2);
    assert_eq!(printer::render(value.as_ref(), 0, -1), "LONDON");
}

#[test]
fn equal_values_hash_equal() {
    let mut a = Choice2::default();
    a.make_selection3().make_selection2_with(OrderedFloat(2.5));
    let b = a.clone();
    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
    set.insert(Choice2::default());
    assert_eq!(set.len(), 2);
}

#[test]
fn multi_line_print_of_a_populated_sequence() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let seq2 = Sequence2 {
        element1: CustomString::new("abc".into()).unwrap(),
        element2: 7,
        element3: offset.with_ymd_and_hms(2012, 3, 4, 5, 6, 7).unwrap(),
        element4: Some(Choice1::Selection1(-3)),
        element6: vec![Some("x".into()), None],
        ..Default::default()
    };
    let mut out = String::new();
    seq2.print(&mut out, 1, 2).unwrap();
    let expected = "  [\n\
                    \x20   element1 = \"abc\"\n\
                    \x20   element2 = 7\n\
                    \x20   element3 = 2012-03-04T05:06:07.000+01:00\n\
                    \x20   element4 = [\n\
                    \x20     selection1 = -3\n\
                    \x20   ]\n\
                    \x20   element5 = NULL\n\
                    \x20   element6 = [\n\
                    \x20     \"x\"\n\
                    \x20     NULL\n\
                    \x20   ]\n\
                    \x20   element7 = [\n\
                    \x20   ]\n\
                    \x20 ]\n";
    assert_eq!(out, expected);
}

#[test]
fn deep_schema_element_resets_to_default() {
    let mut element = BasicSchemaElement { name: Some("root".into()), ..Default::default() };
    let mut child = BasicSchemaElementChoice::default();
    child.make_complex_type().name = Some("T".into());
    element.choice.push(child);

    let snapshot = element.clone_value();
    assert!(snapshot.equals(&element));
    FieldValue::reset(&mut element);
    assert_eq!(element, BasicSchemaElement::default());
    assert!(!snapshot.equals(&element));
    assert_eq!(element.category(), Category::Sequence);
}

#[test]
fn every_registered_table_has_dense_ids() {
    for entry in registry::entries() {
        for (index, info) in entry.table.fields().iter().enumerate() {
            assert_eq!(info.id as usize, index, "{}", entry.name);
        }
    }
}

#[test]
fn exactly_one_alternative_is_active() {
    let mut all = EncoderTestChoiceWithAllCategories::default();
    for info in EncoderTestChoiceWithAllCategories::SELECTION_INFO_ARRAY {
        all.make_selection(info.id).unwrap();
        let active = [
            all.is_char_array_value(),
            all.is_choice_value(),
            all.is_customized_type_value(),
            all.is_enumeration_value(),
            all.is_sequence_value(),
            all.is_simple_value(),
        ];
        let expected: Vec<bool> = (0..active.len() as i32).map(|id| id == info.id).collect();
        assert_eq!(active.to_vec(), expected, "{}", info.name);
        assert_eq!(all.selection_id(), info.id);
        assert!(!all.is_undefined_value());
    }

    let mut choice1 = Choice1::default();
    for info in Choice1::SELECTION_INFO_ARRAY {
        choice1.make_selection(info.id).unwrap();
        let active = [
            choice1.is_selection1_value(),
            choice1.is_selection2_value(),
            choice1.is_selection3_value(),
            choice1.is_selection4_value(),
        ];
        assert_eq!(active.iter().filter(|on| **on).count(), 1, "{}", info.name);
        assert!(active[info.id as usize], "{}", info.name);
    }
}

#[test]
fn taken_values_reset_to_default() {
    let mut seq6 = Sequence6 { element4: 9, ..Default::default() };
    let moved = std::mem::take(&mut seq6);
    assert_eq!(moved.element4, 9);
    seq6.reset();
    assert_eq!(seq6, Sequence6::default());

    let mut choice = Choice1::default();
    choice.make_selection1_with(5);
    let moved = std::mem::take(&mut choice);
    assert_eq!(*moved.selection1(), 5);
    assert!(choice.is_undefined_value());
    choice.reset();
    assert_eq!(choice, Choice1::default());

    let mut reused = moved;
    reused.reset();
    assert_eq!(reused, Choice1::default());
}
