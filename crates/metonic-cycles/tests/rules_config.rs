use metonic_core::MetonicError;
use metonic_cycles::{
    from_json_slice, generate, to_canonical_json_bytes, IntercalaryCounts, Rules,
};

#[test]
fn default_rules_are_metonic() {
    let rules = Rules::default();
    assert_eq!(rules.n, 19);
    assert_eq!(rules.i_count.iter().collect::<Vec<_>>(), vec![7]);
    assert_eq!((rules.max_i, rules.max_o), (1, 2));
    assert!(rules.validate().is_ok());
}

#[test]
fn counts_deserialize_from_one_or_many() {
    let single: Rules = from_json_slice(br#"{"i_count": 8}"#).unwrap();
    assert_eq!(single, Rules::default().with_counts([8]));

    let many: Rules = from_json_slice(br#"{"n": 19, "i_count": [8, 7, 8], "max_o": 3}"#).unwrap();
    assert_eq!(many.i_count.iter().collect::<Vec<_>>(), vec![7, 8]);
    assert_eq!(many.max_o, 3);
    assert_eq!(many.max_i, 1);
}

#[test]
fn rules_serialize_canonically() {
    let bytes = to_canonical_json_bytes(&Rules::default().with_counts([8, 7])).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"i_count":[7,8],"max_i":1,"max_o":2,"n":19}"#
    );
}

#[test]
fn negative_counts_are_rejected() {
    let err = IntercalaryCounts::from_signed(&[7, -1]).unwrap_err();
    match err {
        MetonicError::Constraint(info) => {
            assert_eq!(info.code, "negative-count");
            assert_eq!(info.context.get("i_count"), Some(&"-1".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let counts = IntercalaryCounts::from_signed(&[8, 7, 7]).unwrap();
    assert_eq!(counts.iter().collect::<Vec<_>>(), vec![7, 8]);
    assert_eq!(counts.len(), 2);
}

#[test]
fn negative_counts_in_config_fail_validation() {
    let rules: Rules = from_json_slice(br#"{"i_count": -1}"#).unwrap();
    match rules.validate().unwrap_err() {
        MetonicError::Constraint(info) => {
            assert_eq!(info.code, "negative-count");
            assert_eq!(info.context.get("i_count"), Some(&"-1".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let mixed: Rules = from_json_slice(br#"{"i_count": [7, -2]}"#).unwrap();
    assert_eq!(generate(&mixed).unwrap_err().code(), "negative-count");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = from_json_slice::<Rules>(br#"{"n": "nineteen"}"#).unwrap_err();
    assert_eq!(err.code(), "json_deserialize");
}

#[test]
fn count_above_length_names_both_values() {
    let err = Rules::new(5, 6, 1, 2).validate().unwrap_err();
    assert_eq!(err.info().context.get("i_count"), Some(&"6".to_string()));
    assert_eq!(err.info().context.get("n"), Some(&"5".to_string()));
}
