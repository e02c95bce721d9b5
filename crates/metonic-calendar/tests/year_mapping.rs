use metonic_calendar::{from_metonic, to_metonic, CalendarAnchor, MetonicPosition};
use metonic_core::MetonicError;
use proptest::prelude::*;

#[test]
fn epoch_is_first_year_of_first_cycle() {
    assert_eq!(to_metonic(-431).as_tuple(), (1, 1));
    assert_eq!(from_metonic(1, 1).unwrap(), -431);
}

#[test]
fn known_years_map_both_ways() {
    let cases = [(-430, (1, 2)), (-261, (9, 19)), (-260, (10, 1)), (-344, (5, 12))];
    for (year, expected) in cases {
        assert_eq!(<(i64, u32)>::from(to_metonic(year)), expected);
        assert_eq!(from_metonic(expected.0, expected.1).unwrap(), year);
    }
}

#[test]
fn years_before_the_epoch_use_earlier_cycles() {
    assert_eq!(
        to_metonic(-432),
        MetonicPosition {
            cycle: 0,
            position: 19
        }
    );
    assert_eq!(to_metonic(-450).as_tuple(), (0, 1));
    assert_eq!(from_metonic(0, 1).unwrap(), -450);
}

#[test]
fn positions_outside_the_cycle_are_rejected() {
    for position in [0, 20] {
        match from_metonic(3, position).unwrap_err() {
            MetonicError::Argument(info) => assert_eq!(info.code, "position-out-of-range"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn custom_anchor_shifts_numbering() {
    let anchor = CalendarAnchor {
        epoch_year: 0,
        cycle_length: 8,
    };
    assert_eq!(anchor.to_position(17).unwrap().as_tuple(), (3, 2));
    assert_eq!(anchor.to_year(3, 2).unwrap(), 17);
    let broken = CalendarAnchor {
        epoch_year: 0,
        cycle_length: 0,
    };
    assert_eq!(broken.to_position(5).unwrap_err().code(), "cycle-length");
}

#[test]
fn positions_serialize_as_objects() {
    let json = serde_json::to_string(&to_metonic(-344)).unwrap();
    assert_eq!(json, r#"{"cycle":5,"position":12}"#);
}

proptest! {
    #[test]
    fn cycle_position_round_trip(cycle in -500i64..500, position in 1u32..=19) {
        let year = from_metonic(cycle, position).unwrap();
        prop_assert_eq!(to_metonic(year).as_tuple(), (cycle, position));
    }

    #[test]
    fn year_round_trip(year in -100_000i64..100_000) {
        let located = to_metonic(year);
        prop_assert!((1..=19).contains(&located.position));
        prop_assert_eq!(from_metonic(located.cycle, located.position).unwrap(), year);
        prop_assert_eq!(CalendarAnchor::default().to_position(year).unwrap(), located);
    }
}

#[test]
fn extreme_years_map_without_overflow() {
    for year in [i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX] {
        let located = to_metonic(year);
        assert!((1..=19).contains(&located.position));
        assert_eq!(from_metonic(located.cycle, located.position).unwrap(), year);
    }
}

#[test]
fn unrepresentable_years_are_rejected() {
    for cycle in [i64::MIN, i64::MAX] {
        match from_metonic(cycle, 1).unwrap_err() {
            MetonicError::Argument(info) => assert_eq!(info.code, "year-out-of-range"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
    let anchor = CalendarAnchor {
        epoch_year: i64::MIN,
        cycle_length: 1,
    };
    assert_eq!(anchor.to_position(i64::MAX).unwrap_err().code(), "year-out-of-range");
}
