//! Best-effort demographics.
//!
//! Each field runs its own cascade of patterns, most specific first. A field
//! set by an earlier layer (or already set by the caller) is never replaced
//! by a later, looser one.

use std::sync::LazyLock;

use jiff::ToSpan;
use jiff::civil::Date;
use mhforms_core::dates::parse_leading_date;
use mhforms_core::models::patient::{Gender, PatientInfo};
use regex::Regex;
use tracing::debug;

/// Minimum pronoun count before gender is inferred from pronouns.
pub const MIN_PRONOUN_COUNT: usize = 5;

fn layers(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("patient field pattern"))
        .collect()
}

static NAME: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    layers(&[
        r"(?im)^[ \t]*(?:patient(?:'s)?[ \t]+name|full[ \t]+name|client[ \t]+name)[ \t]*[:\-][ \t]*(?P<v>[A-Za-z][A-Za-z'\- ]{1,60})$",
        r"(?im)^[ \t]*name[ \t]*[:\-][ \t]*(?P<v>[A-Za-z][A-Za-z'\- ]{1,60})$",
        r"\b(?:Mr|Mrs|Ms|Miss|Mx)\.?[ \t]+(?P<v>[A-Z][a-z'\-]+(?:[ \t]+[A-Z][a-z'\-]+){1,2})\b",
    ])
});

static DATE_OF_BIRTH: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    layers(&[
        r"(?i)\b(?:date[ \t]+of[ \t]+birth|d\.?o\.?b\.?)[ \t]*[:\-]?[ \t]*(?P<v>[^\n]{6,30})",
        r"(?i)\bborn[ \t]+(?:on[ \t]+)?(?P<v>[^\n]{6,30})",
    ])
});

static GENDER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\b(?:gender|sex)[ \t]*[:\-][ \t]*(?P<v>male|female|man|woman|non[- ]?binary|other|m|f)\b")
        .expect("gender field pattern")
});

static MALE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bMr\.?[ \t]+[A-Z]").expect("male title pattern"));

static FEMALE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Mrs|Ms|Miss)\.?[ \t]+[A-Z]").expect("female title pattern"));

static MASCULINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:he|him|his|himself)\b").expect("pronoun pattern"));

static FEMININE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:she|her|hers|herself)\b").expect("pronoun pattern"));

static WARD: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    layers(&[
        r"(?im)^[ \t]*(?:ward|unit)[ \t]*[:\-][ \t]*(?P<v>[^\n|]{2,60})",
        r"\b(?P<v>[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)?[ \t]+Ward)\b",
    ])
});

static LEGAL_SECTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    layers(&[
        r"(?im)^[ \t]*(?:legal[ \t]+status|mha[ \t]+status|section)[ \t]*[:\-][ \t]*(?P<v>[^\n|]{1,40})",
        r"(?i)\b(?:section|s\.)[ \t]*(?P<num>37[ \t]*/[ \t]*41|47[ \t]*/[ \t]*49|48[ \t]*/[ \t]*49|17a|45a|135|136|35|36|37|38|41|47|48|2|3)\b",
    ])
});

static REFERENCE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    layers(&[
        r"(?i)\bnhs[ \t]*(?:no\.?|number)?[ \t]*[:\-]?[ \t]*(?P<v>\d{3}[ \-]?\d{3}[ \-]?\d{4})\b",
        r"(?i)\b(?:hospital|patient|rio|mrn)[ \t]*(?:no\.?|number|id)[ \t]*[:\-]?[ \t]*(?P<v>[A-Z0-9]{5,12})\b",
    ])
});

/// First value produced by any layer, in layer order.
fn cascade<T>(patterns: &[Regex], text: &str, parse: impl Fn(&regex::Captures) -> Option<T>) -> Option<T> {
    patterns
        .iter()
        .find_map(|re| re.captures_iter(text).find_map(|caps| parse(&caps)))
}

fn value(caps: &regex::Captures) -> Option<String> {
    let v = caps.name("v")?.as_str().trim();
    (!v.is_empty()).then(|| v.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn fill<T>(slot: &mut Option<T>, find: impl FnOnce() -> Option<T>) {
    if slot.is_none() {
        *slot = find();
    }
}

pub fn find_name(text: &str) -> Option<String> {
    cascade(&NAME, text, value)
}

/// Date of birth, checked against `reference`, the latest note date.
///
/// A two-digit year that lands after the reference is moved back a century
/// (`12/05/45` is 1945 in a 2023 record). Any other date after the reference
/// is rejected and the cascade moves on.
pub fn find_date_of_birth(text: &str, reference: Option<Date>) -> Option<Date> {
    cascade(&DATE_OF_BIRTH, text, |caps| {
        let raw = caps.name("v")?.as_str();
        let (date, end) = parse_leading_date(raw)?;
        let Some(reference) = reference else {
            return Some(date);
        };
        if date <= reference {
            return Some(date);
        }
        if !has_two_digit_year(&raw[..end]) {
            debug!(%date, %reference, "date of birth after latest note, skipped");
            return None;
        }
        let earlier = date.checked_sub(100.years()).ok()?;
        (earlier <= reference).then_some(earlier)
    })
}

/// True for day-first numeric markers such as `12/05/45`.
fn has_two_digit_year(marker: &str) -> bool {
    let marker = marker.trim();
    let trailing = marker.chars().rev().take_while(char::is_ascii_digit).count();
    let leading = marker.chars().take_while(char::is_ascii_digit).count();
    trailing == 2 && leading <= 2
}

/// Explicit field or title; pronouns are a separate, weaker fallback.
pub fn find_explicit_gender(text: &str) -> Option<Gender> {
    if let Some(caps) = GENDER_FIELD.captures(text) {
        let v = caps.name("v")?.as_str().to_lowercase();
        return Some(match v.as_str() {
            "male" | "man" | "m" => Gender::Male,
            "female" | "woman" | "f" => Gender::Female,
            _ => Gender::Other,
        });
    }
    match (MALE_TITLE.find(text), FEMALE_TITLE.find(text)) {
        (Some(m), Some(f)) => Some(if m.start() < f.start() {
            Gender::Male
        } else {
            Gender::Female
        }),
        (Some(_), None) => Some(Gender::Male),
        (None, Some(_)) => Some(Gender::Female),
        (None, None) => None,
    }
}

/// Infer gender from third-person pronouns. The winning class must reach
/// [`MIN_PRONOUN_COUNT`] and outnumber the other by more than two to one.
pub fn infer_gender_from_pronouns(text: &str) -> Option<Gender> {
    let masculine = MASCULINE.find_iter(text).count();
    let feminine = FEMININE.find_iter(text).count();
    debug!(masculine, feminine, "pronoun counts");
    if masculine >= MIN_PRONOUN_COUNT && masculine > feminine * 2 {
        Some(Gender::Male)
    } else if feminine >= MIN_PRONOUN_COUNT && feminine > masculine * 2 {
        Some(Gender::Female)
    } else {
        None
    }
}

pub fn find_ward(text: &str) -> Option<String> {
    cascade(&WARD, text, value)
}

pub fn find_legal_section(text: &str) -> Option<String> {
    cascade(&LEGAL_SECTION, text, |caps| match caps.name("num") {
        Some(num) => {
            let compact: String = num.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            Some(format!("Section {}", compact.to_uppercase()))
        }
        None => value(caps).map(|v| {
            if v.starts_with(|c: char| c.is_ascii_digit()) {
                format!("Section {v}")
            } else {
                v
            }
        }),
    })
}

pub fn find_reference(text: &str) -> Option<String> {
    cascade(&REFERENCE, text, |caps| {
        let v = caps.name("v")?.as_str();
        Some(v.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>().to_uppercase())
    })
}

/// Fill every unset field of `info` from `text`. Set fields are kept.
///
/// `reference` is the document's latest note date; dates of birth after it
/// are corrected or dropped.
pub fn fill_patient_info(info: &mut PatientInfo, text: &str, reference: Option<Date>) {
    fill(&mut info.name, || find_name(text));
    fill(&mut info.date_of_birth, || find_date_of_birth(text, reference));
    fill(&mut info.gender, || {
        find_explicit_gender(text).or_else(|| infer_gender_from_pronouns(text))
    });
    fill(&mut info.ward, || find_ward(text));
    fill(&mut info.legal_section, || find_legal_section(text));
    fill(&mut info.reference, || find_reference(text));
}

pub fn extract_patient_info(text: &str, reference: Option<Date>) -> PatientInfo {
    let mut info = PatientInfo::default();
    fill_patient_info(&mut info, text, reference);
    info
}
