use jiff::civil::date;
use mhforms_core::models::patient::{Gender, PatientField, PatientInfo};
use mhforms_ingest::patient::{
    extract_patient_info, fill_patient_info, find_date_of_birth, find_explicit_gender,
    find_legal_section, infer_gender_from_pronouns,
};

const HEADER: &str = "Patient Name: John Smith\n\
                      DOB: 04/07/1985\n\
                      NHS No: 485 777 3456\n\
                      Ward: Cedar Ward\n\
                      Legal status: Section 37/41\n\
                      \n\
                      12/03/2023 Seen by Dr Patel. He was settled.";

#[test]
fn labelled_header_fills_every_field() {
    let info = extract_patient_info(HEADER, None);
    assert_eq!(info.name.as_deref(), Some("John Smith"));
    assert_eq!(info.date_of_birth, Some(date(1985, 7, 4)));
    assert_eq!(info.reference.as_deref(), Some("4857773456"));
    assert_eq!(info.ward.as_deref(), Some("Cedar Ward"));
    assert_eq!(info.legal_section.as_deref(), Some("Section 37/41"));
    assert!(info.missing_fields().contains(&PatientField::Gender));
}

#[test]
fn specific_layer_wins_over_looser_layer() {
    let text = "Mr Peter Jones attended.\nPatient name: Paul Jones";
    assert_eq!(extract_patient_info(text, None).name.as_deref(), Some("Paul Jones"));
}

#[test]
fn title_layer_used_when_no_label() {
    let info = extract_patient_info("Reviewed Mrs Anne Marie Clarke on Birch Ward under s.3.", None);
    assert_eq!(info.name.as_deref(), Some("Anne Marie Clarke"));
    assert_eq!(info.gender, Some(Gender::Female));
    assert_eq!(info.ward.as_deref(), Some("Birch Ward"));
    assert_eq!(info.legal_section.as_deref(), Some("Section 3"));
}

#[test]
fn existing_fields_are_never_overwritten() {
    let mut info = PatientInfo {
        name: Some("Known Name".to_string()),
        ..Default::default()
    };
    fill_patient_info(&mut info, HEADER, None);
    assert_eq!(info.name.as_deref(), Some("Known Name"));
    assert_eq!(info.ward.as_deref(), Some("Cedar Ward"));
}

#[test]
fn explicit_gender_field_beats_titles() {
    assert_eq!(find_explicit_gender("Sex: F\nSeen with Mr Alan Reed"), Some(Gender::Female));
    assert_eq!(find_explicit_gender("Gender: male"), Some(Gender::Male));
    assert_eq!(find_explicit_gender("no demographics here"), None);
}

#[test]
fn pronoun_inference_needs_five_and_a_two_to_one_margin() {
    let five_he = "he said he was fine and he ate, he slept, he walked";
    assert_eq!(infer_gender_from_pronouns(five_he), Some(Gender::Male));

    let four_she = "she said she was fine and she ate, she slept";
    assert_eq!(infer_gender_from_pronouns(four_she), None);

    // 6 against 3 is exactly two to one, which is not enough.
    let close = "he he he he he he she she she";
    assert_eq!(infer_gender_from_pronouns(close), None);

    let clear = "she she she she she she she he he he";
    assert_eq!(infer_gender_from_pronouns(clear), Some(Gender::Female));
}

#[test]
fn pronoun_fallback_applies_only_without_explicit_gender() {
    let text = "He was calm. He ate. He slept. He walked. He read. Sex: Female";
    assert_eq!(extract_patient_info(text, None).gender, Some(Gender::Female));

    let text = "He was calm. He ate. He slept. He walked. He read.";
    assert_eq!(extract_patient_info(text, None).gender, Some(Gender::Male));
}

#[test]
fn section_numbers_are_normalized() {
    assert_eq!(find_legal_section("detained under section 37 / 41 MHA").as_deref(), Some("Section 37/41"));
    assert_eq!(find_legal_section("Section: 2").as_deref(), Some("Section 2"));
    assert_eq!(find_legal_section("granted section 17 leave"), None);
}

#[test]
fn missing_everything_is_partial_not_an_error() {
    let info = extract_patient_info("Nothing useful.", None);
    assert_eq!(info.missing_fields().len(), 6);
}

#[test]
fn two_digit_birth_year_after_latest_note_moves_back_a_century() {
    let latest = Some(date(2023, 3, 12));
    assert_eq!(find_date_of_birth("DOB: 12/05/45", latest), Some(date(1945, 5, 12)));
    assert_eq!(find_date_of_birth("DOB: 12/05/85", latest), Some(date(1985, 5, 12)));
    assert_eq!(find_date_of_birth("DOB: 01/01/19", latest), Some(date(2019, 1, 1)));
}

#[test]
fn four_digit_birth_year_after_latest_note_is_rejected() {
    let latest = Some(date(2023, 3, 12));
    assert_eq!(find_date_of_birth("DOB: 2045-05-12", latest), None);
    assert_eq!(find_date_of_birth("Date of birth: 12 May 2045", latest), None);
    assert_eq!(
        find_date_of_birth("DOB: 12/05/2045\nborn on 03/02/1960", latest),
        Some(date(1960, 2, 3))
    );
}

#[test]
fn birth_date_is_unchecked_without_dated_notes() {
    assert_eq!(find_date_of_birth("DOB: 12/05/45", None), Some(date(2045, 5, 12)));
}
