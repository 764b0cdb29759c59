use jiff::civil::date;
use mhforms_core::models::medication::DrugSubtype;
use mhforms_core::models::note::ClinicalNote;
use mhforms_extract::medication::{
    DEFAULT_LOOKBACK_MONTHS, classify_drug, extract_medications, fill_medications,
    mentions_in_text, normalize_frequency,
};

#[test]
fn selection_walks_subtype_priority() {
    let notes = vec![
        ClinicalNote::new(Some(date(2023, 3, 1)), "Commenced sertraline 50mg OD for low mood."),
        ClinicalNote::new(Some(date(2023, 5, 1)), "Takes olanzapine 10mg OD without prompting."),
    ];
    let selected = extract_medications(&notes, DEFAULT_LOOKBACK_MONTHS).select();
    let names: Vec<&str> = selected.iter().map(|m| m.drug_name.as_str()).collect();
    assert_eq!(names, vec!["olanzapine", "sertraline"]);
    assert_eq!(selected[0].dose.as_deref(), Some("10mg"));
    assert_eq!(selected[0].frequency.as_deref(), Some("OD"));
    assert_eq!(selected[0].subtype, DrugSubtype::Antipsychotic);
    assert_eq!(selected[1].dose.as_deref(), Some("50mg"));
}

#[test]
fn latest_dosed_mention_is_preferred() {
    let notes = vec![
        ClinicalNote::new(Some(date(2023, 1, 10)), "olanzapine 5mg nocte"),
        ClinicalNote::new(Some(date(2023, 4, 10)), "olanzapine 15 mg nocte"),
        ClinicalNote::new(Some(date(2023, 6, 10)), "Discussed olanzapine side effects."),
    ];
    let selected = extract_medications(&notes, 12).select();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].dose.as_deref(), Some("15mg"));
    assert_eq!(selected[0].frequency.as_deref(), Some("Nocte"));
    assert_eq!(selected[0].date, date(2023, 4, 10));
}

#[test]
fn most_recent_drug_wins_within_a_subtype() {
    let notes = vec![
        ClinicalNote::new(Some(date(2023, 1, 1)), "risperidone 2mg BD"),
        ClinicalNote::new(Some(date(2023, 2, 1)), "switched to aripiprazole 10mg OD"),
    ];
    let selected = extract_medications(&notes, 12).select();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].drug_name, "aripiprazole");
}

#[test]
fn brand_names_resolve_to_generics() {
    let found = mentions_in_text("Clopixol 200mg every 2 weeks; Priadel 400mg nocte", date(2023, 1, 1));
    let names: Vec<&str> = found.iter().map(|m| m.drug_name.as_str()).collect();
    assert_eq!(names, vec!["zuclopenthixol", "lithium"]);
    assert_eq!(found[0].frequency.as_deref(), Some("Fortnightly"));
    assert_eq!(classify_drug("Depakote"), DrugSubtype::Antimanic);
    assert_eq!(classify_drug("unknownazine"), DrugSubtype::Other);
}

#[test]
fn longest_drug_name_wins() {
    let found = mentions_in_text("sodium valproate 500mg b.d.", date(2023, 1, 1));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].drug_name, "sodium valproate");
    assert_eq!(found[0].frequency.as_deref(), Some("BD"));
}

#[test]
fn frequency_lookup_is_closed() {
    assert_eq!(normalize_frequency("once daily"), "OD");
    assert_eq!(normalize_frequency("b.d."), "BD");
    assert_eq!(normalize_frequency("tds"), "TDS");
    assert_eq!(normalize_frequency("Four times a day"), "QDS");
    assert_eq!(normalize_frequency("at night"), "Nocte");
    assert_eq!(normalize_frequency("as required"), "PRN");
    assert_eq!(normalize_frequency("weekly"), "Weekly");
    assert_eq!(normalize_frequency("2-weekly"), "Fortnightly");
    assert_eq!(normalize_frequency("every 4 weeks"), "Monthly");
    assert_eq!(normalize_frequency("mane"), "MANE");
}

#[test]
fn physical_drugs_are_capped_at_two() {
    let notes = vec![
        ClinicalNote::new(Some(date(2023, 1, 1)), "metformin 500mg BD"),
        ClinicalNote::new(Some(date(2023, 2, 1)), "atorvastatin 20mg nocte"),
        ClinicalNote::new(Some(date(2023, 3, 1)), "amlodipine 5mg OD"),
        ClinicalNote::new(Some(date(2023, 3, 2)), "clozapine 300mg nocte"),
    ];
    let selected = extract_medications(&notes, 12).select();
    let names: Vec<&str> = selected.iter().map(|m| m.drug_name.as_str()).collect();
    assert_eq!(names, vec!["clozapine", "amlodipine", "atorvastatin"]);
}

#[test]
fn notes_outside_lookback_and_undated_notes_are_ignored() {
    let notes = vec![
        ClinicalNote::new(None, "haloperidol 5mg PRN"),
        ClinicalNote::new(Some(date(2021, 1, 1)), "quetiapine 100mg nocte"),
        ClinicalNote::new(Some(date(2023, 6, 1)), "sertraline 100mg OD"),
    ];
    let index = extract_medications(&notes, 12);
    assert_eq!(index.drugs().collect::<Vec<_>>(), vec!["sertraline"]);
    assert!(index.mentions("quetiapine").is_empty());
}

#[test]
fn fill_never_overwrites_existing_list() {
    let notes = vec![ClinicalNote::new(Some(date(2023, 6, 1)), "lithium 400mg nocte")];
    let mut meds = Vec::new();
    assert!(fill_medications(&mut meds, &notes, 12));
    assert_eq!(meds.len(), 1);

    let other = vec![ClinicalNote::new(Some(date(2023, 7, 1)), "olanzapine 10mg OD")];
    assert!(!fill_medications(&mut meds, &other, 12));
    assert_eq!(meds[0].drug_name, "lithium");
}

#[test]
fn empty_input_selects_nothing() {
    assert!(extract_medications(&[], 12).is_empty());
    assert!(extract_medications(&[], 12).select().is_empty());
}
