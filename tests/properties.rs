use chrono::NaiveDate;
use proptest::prelude::*;
use schema_fixtures::daycount::{BasicActual36525, Convention, DayCountConvention};
use schema_fixtures::fixtures::ratsnest::{CustomInt, CustomString, Enumerated, Sequence6};
use schema_fixtures::value::EnumerationValue;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1601i32..=2400, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day 1..=28 is always valid"))
}

fn convention_strategy() -> impl Strategy<Value = Convention> {
    prop_oneof![
        Just(Convention::Actual36525),
        Just(Convention::Actual360),
        Just(Convention::Actual365Fixed),
    ]
}

proptest! {
    #[test]
    fn days_diff_is_antisymmetric(begin in date_strategy(), end in date_strategy()) {
        let forward = BasicActual36525::days_diff(begin, end);
        let backward = BasicActual36525::days_diff(end, begin);
        prop_assert_eq!(forward, -backward);
        prop_assert_eq!(forward >= 0, begin <= end);
    }

    #[test]
    fn years_diff_is_antisymmetric(begin in date_strategy(), end in date_strategy()) {
        let sum = BasicActual36525::years_diff(begin, end) + BasicActual36525::years_diff(end, begin);
        prop_assert!(sum.abs() <= 1.0e-15, "{sum}");
    }

    #[test]
    fn years_are_days_over_the_year_length(
        convention in convention_strategy(),
        begin in date_strategy(),
        end in date_strategy(),
    ) {
        let days = convention.days_diff(begin, end) as f64;
        let years = convention.years_diff(begin, end);
        let per_year = match convention {
            Convention::Actual36525 => 365.25,
            Convention::Actual360 => 360.0,
            Convention::Actual365Fixed => 365.0,
        };
        prop_assert_eq!(years, days / per_year);
    }

    #[test]
    fn enumeration_int_lookup_matches_table(number in -4i32..8) {
        let known = Enumerated::ENUMERATOR_INFO_ARRAY.iter().any(|info| info.value == number);
        match Enumerated::from_int(number) {
            Some(value) => {
                prop_assert!(known);
                prop_assert_eq!(value.to_int(), number);
                prop_assert_eq!(Enumerated::from_name(value.to_str()), Some(value));
            }
            None => prop_assert!(!known),
        }
    }

    #[test]
    fn failed_enumeration_assign_leaves_value(start in 0i32..3, name in "[A-Z_]{0,12}") {
        let mut value = Enumerated::from_int(start).unwrap();
        let before = value;
        match value.assign_from_name(&name) {
            Ok(()) => prop_assert_eq!(value.to_str(), name.as_str()),
            Err(_) => prop_assert_eq!(value, before),
        }
    }

    #[test]
    fn custom_string_accepts_exactly_short_values(text in "\\PC{0,12}") {
        let fits = text.chars().count() <= 8;
        prop_assert_eq!(CustomString::check_restrictions(&text), fits);

        let mut value = CustomString::new("seed".into()).unwrap();
        let result = value.from_value(text.clone());
        prop_assert_eq!(result.is_ok(), fits);
        let expected = if fits { text.as_str() } else { "seed" };
        prop_assert_eq!(value.value().as_str(), expected);
    }

    #[test]
    fn custom_int_accepts_up_to_a_thousand(number in any::<i32>()) {
        prop_assert_eq!(CustomInt::new(number).is_ok(), number <= 1000);
    }

    #[test]
    fn sequence_equality_tracks_fields(a in any::<u32>(), b in any::<u32>()) {
        let left = Sequence6 { element4: a, ..Default::default() };
        let right = Sequence6 { element4: b, ..Default::default() };
        prop_assert_eq!(left == right, a == b);
        prop_assert_eq!(left.clone(), left);
    }
}
