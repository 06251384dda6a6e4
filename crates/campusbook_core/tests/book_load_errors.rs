use campusbook_core::storage::serialized_person::{TYPE_PROFESSOR, TYPE_STUDENT};
use campusbook_core::{
    load_book, DuplicateRule, Email, Gender, IllegalValueError, ModuleCode, Name, OfficeHour,
    Phone, Rating, SerializedBook, SerializedPerson, StorageError,
};

fn valid_student_record() -> SerializedPerson {
    SerializedPerson {
        kind: TYPE_STUDENT.to_string(),
        name: Some("Bernice Yu".to_string()),
        module_code: None,
        phone: Some("99272758".to_string()),
        email: Some("berniceyu@example.com".to_string()),
        gender: Some("M".to_string()),
        tagged: vec!["colleagues".to_string()],
        location: Some("UTown".to_string()),
        github_username: None,
        rating: None,
        specialisation: None,
        office_hour: None,
    }
}

fn valid_professor_record() -> SerializedPerson {
    SerializedPerson {
        kind: TYPE_PROFESSOR.to_string(),
        name: Some("Wong Tin Lok".to_string()),
        module_code: Some("CS1231S".to_string()),
        phone: Some("91031282".to_string()),
        email: Some("wongtk@example.com".to_string()),
        gender: Some("M".to_string()),
        tagged: vec!["family".to_string()],
        location: Some("COM2 LT4".to_string()),
        github_username: Some("-".to_string()),
        rating: Some("5".to_string()),
        specialisation: Some("-".to_string()),
        office_hour: Some("-".to_string()),
    }
}

#[test]
fn first_invalid_field_in_declared_order_wins() {
    // Both phone and email are malformed; only the earlier field (phone) may
    // be reported.
    let mut record = valid_student_record();
    record.phone = Some("12".to_string());
    record.email = Some("not an email".to_string());

    let err = record.to_person().unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::InvalidFormat {
            field: Phone::FIELD_NAME,
            constraint: Phone::MESSAGE_CONSTRAINTS,
        }
    );
}

#[test]
fn missing_field_outranks_later_invalid_field() {
    let mut record = valid_professor_record();
    record.module_code = None;
    record.location = Some("".to_string());

    let err = record.to_person().unwrap_err();
    assert_eq!(err, IllegalValueError::MissingField(ModuleCode::FIELD_NAME));
}

#[test]
fn mandatory_field_order_is_name_phone_email_gender() {
    let mut record = valid_student_record();
    record.name = Some("".to_string());
    record.gender = Some("male".to_string());
    let err = record.to_person().unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::InvalidFormat {
            field: Name::FIELD_NAME,
            constraint: Name::MESSAGE_CONSTRAINTS,
        }
    );

    let mut record = valid_student_record();
    record.gender = Some("male".to_string());
    record.location = Some(" ".to_string());
    let err = record.to_person().unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::InvalidFormat {
            field: Gender::FIELD_NAME,
            constraint: Gender::MESSAGE_CONSTRAINTS,
        }
    );
}

#[test]
fn optional_fields_check_in_declared_order_after_mandatory_ones() {
    let mut record = valid_professor_record();
    record.rating = Some("11".to_string());
    record.office_hour = Some("whenever".to_string());
    let err = record.to_person().unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::InvalidFormat {
            field: Rating::FIELD_NAME,
            constraint: Rating::MESSAGE_CONSTRAINTS,
        }
    );
}

#[test]
fn sentinel_is_absent_but_other_invalid_text_is_not() {
    // The sentinel bypasses validation entirely.
    let record = valid_professor_record();
    assert!(record.to_person().is_ok());

    // Any other non-conforming text is a format violation, not absence.
    let mut record = valid_professor_record();
    record.office_hour = Some("sometime tomorrow".to_string());
    let err = record.to_person().unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::InvalidFormat {
            field: OfficeHour::FIELD_NAME,
            constraint: OfficeHour::MESSAGE_CONSTRAINTS,
        }
    );

    // An empty string is not the sentinel either.
    let mut record = valid_professor_record();
    record.specialisation = Some(String::new());
    assert!(record.to_person().is_err());
}

#[test]
fn absent_optional_key_is_a_missing_field() {
    // The writer always emits the sentinel for professors, so a missing
    // rating key means the record is damaged rather than "blank".
    let mut record = valid_professor_record();
    record.rating = None;
    let err = record.to_person().unwrap_err();
    assert_eq!(err, IllegalValueError::MissingField(Rating::FIELD_NAME));
}

#[test]
fn missing_email_key_in_raw_json_reports_missing_field() {
    let raw = r#"{
        "persons": [
            {
                "type": "student",
                "name": "Bernice Yu",
                "phone": "99272758",
                "gender": "M",
                "tagged": [],
                "location": "UTown"
            }
        ]
    }"#;

    let err = load_book(raw.as_bytes()).unwrap_err();
    match err {
        StorageError::IllegalValue(err) => {
            assert_eq!(err, IllegalValueError::MissingField(Email::FIELD_NAME));
        }
        other => panic!("expected an illegal value error, got {other:?}"),
    }
}

#[test]
fn unknown_discriminator_in_raw_json_is_rejected() {
    let raw = r#"{
        "persons": [
            {
                "type": "alien",
                "name": "Zork",
                "phone": "99272758",
                "email": "zork@example.com",
                "gender": "M",
                "tagged": [],
                "location": "Mothership"
            }
        ]
    }"#;

    let err = load_book(raw.as_bytes()).unwrap_err();
    match err {
        StorageError::IllegalValue(err) => {
            assert_eq!(err, IllegalValueError::UnknownType("alien".to_string()));
        }
        other => panic!("expected an illegal value error, got {other:?}"),
    }
}

#[test]
fn first_failing_record_stops_the_whole_load() {
    let mut bad_record = valid_professor_record();
    bad_record.phone = Some("no digits".to_string());
    let book = SerializedBook {
        persons: vec![valid_student_record(), bad_record, valid_professor_record()],
    };

    let err = book.to_persons(DuplicateRule::default()).unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::InvalidFormat {
            field: Phone::FIELD_NAME,
            constraint: Phone::MESSAGE_CONSTRAINTS,
        }
    );
}

#[test]
fn duplicate_records_are_a_collection_level_failure() {
    let book = SerializedBook {
        persons: vec![valid_student_record(), valid_student_record()],
    };
    let err = book.to_persons(DuplicateRule::default()).unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::DuplicateIdentity("Bernice Yu".to_string())
    );
}

#[test]
fn same_name_rule_rejects_cross_variant_name_collisions() {
    let mut renamed_professor = valid_professor_record();
    renamed_professor.name = Some("Bernice Yu".to_string());
    let book = SerializedBook {
        persons: vec![valid_student_record(), renamed_professor],
    };

    assert!(book.to_persons(DuplicateRule::FullRecord).is_ok());
    let err = book.to_persons(DuplicateRule::SameName).unwrap_err();
    assert_eq!(
        err,
        IllegalValueError::DuplicateIdentity("Bernice Yu".to_string())
    );
}

#[test]
fn load_with_rule_applies_the_chosen_policy() {
    let mut renamed_professor = valid_professor_record();
    renamed_professor.name = Some("Bernice Yu".to_string());
    let book = SerializedBook {
        persons: vec![valid_student_record(), renamed_professor],
    };
    let text = serde_json::to_string(&book).unwrap();

    assert!(campusbook_core::load_book_with_rule(text.as_bytes(), DuplicateRule::FullRecord).is_ok());
    let err = campusbook_core::load_book_with_rule(text.as_bytes(), DuplicateRule::SameName)
        .unwrap_err();
    assert!(matches!(err, StorageError::IllegalValue(_)));
}

#[test]
fn empty_book_loads_as_empty_list() {
    let reloaded = load_book(r#"{ "persons": [] }"#.as_bytes()).unwrap();
    assert!(reloaded.is_empty());

    let reloaded = load_book(r#"{}"#.as_bytes()).unwrap();
    assert!(reloaded.is_empty());
}
