use progtrack::reporting::programs::{
    validate_program_name, validate_program_number, FieldValidation, ValidationError,
    ValidationPolicy,
};

#[test]
fn accepted_number_produces_an_empty_message() {
    let policy = ValidationPolicy::default();
    let outcome =
        FieldValidation::from_result(validate_program_number(Some("1.1.A"), Some("1.1"), &policy));
    assert!(outcome.valid);
    assert_eq!(outcome.message, "");
}

#[test]
fn wrong_initiative_is_named_in_the_message() {
    let policy = ValidationPolicy::default();
    let outcome =
        FieldValidation::from_result(validate_program_number(Some("2.1.A"), Some("1.1"), &policy));
    assert!(!outcome.valid);
    assert!(outcome.message.contains("must start with \"1.1.\""));
}

#[test]
fn bare_prefix_mentions_the_missing_suffix() {
    let policy = ValidationPolicy::default();
    let outcome =
        FieldValidation::from_result(validate_program_number(Some("1.1."), Some("1.1"), &policy));
    assert!(!outcome.valid);
    assert!(outcome.message.contains("suffix"));
}

#[test]
fn numbers_longer_than_twenty_characters_are_rejected() {
    let policy = ValidationPolicy::default();
    let candidate = "1.1.ABCDEFGHIJKLMNOPQ";
    assert_eq!(candidate.len(), 21);
    let error = validate_program_number(Some(candidate), Some("1.1"), &policy)
        .expect_err("length limit enforced");
    assert_eq!(error, ValidationError::TooLong { max: 20 });
}

#[test]
fn well_formed_suffixes_round_trip() {
    let policy = ValidationPolicy::default();
    let prefix = "3.2";
    for suffix in ["A", "7", "A.1", "beta3", "X.Y.Z"] {
        let candidate = format!("{prefix}.{suffix}");
        assert!(
            validate_program_number(Some(&candidate), Some(prefix), &policy).is_ok(),
            "{candidate:?} should validate"
        );
    }
}

#[test]
fn deep_prefixes_are_matched_whole() {
    let policy = ValidationPolicy::default();
    assert!(validate_program_number(Some("10.2.1.B"), Some("10.2.1"), &policy).is_ok());
    let error = validate_program_number(Some("10.21.B"), Some("10.2.1"), &policy)
        .expect_err("partial prefix is not enough");
    assert!(matches!(error, ValidationError::WrongPrefix { .. }));
}

#[test]
fn names_at_the_boundary_are_accepted() {
    let policy = ValidationPolicy::default();
    let at_limit = "n".repeat(255);
    assert!(validate_program_name(Some(&at_limit), &policy).is_ok());

    let over_limit = "n".repeat(256);
    assert_eq!(
        validate_program_name(Some(&over_limit), &policy),
        Err(ValidationError::TooLong { max: 255 })
    );
}

#[test]
fn name_length_counts_characters_not_bytes() {
    let policy = ValidationPolicy::default();
    let accented = "é".repeat(255);
    assert!(validate_program_name(Some(&accented), &policy).is_ok());
}

#[test]
fn surrounding_whitespace_does_not_count_against_names() {
    let policy = ValidationPolicy::new(10, 20);
    assert!(validate_program_name(Some("   ten chars  "), &policy).is_ok());
}
