//! One function per clause group. Each returns `None` when its attributes
//! are absent so the composer can skip it.

use std::collections::BTreeMap;

use crate::attributes::{
    ComplianceLevel, EngagementLevel, RelapsePrevention, RiskFactor, RiskRecord, TreatmentArea,
    TreatmentStatus, UnderstandingDomain, UnderstandingLevel,
};
use crate::list::format_list;
use crate::pronouns::{Pronouns, capitalize};
use crate::severity::{
    COMPLIANCE_WORDING, ENGAGEMENT_WORDING, Level, RISK_WORDING, ScaleWording,
    UNDERSTANDING_WORDING, group_by_level, join_groups,
};

fn graded<K: Copy, L: Level>(
    items: &BTreeMap<K, L>,
    wording: &ScaleWording,
    render: impl Fn(L, Vec<K>) -> String,
) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let groups: Vec<(L, String)> = group_by_level(items.iter().map(|(k, l)| (*k, *l)))
        .into_iter()
        .map(|(level, keys)| (level, render(level, keys)))
        .collect();
    Some(join_groups(&groups, wording))
}

pub fn understanding(
    items: &BTreeMap<UnderstandingDomain, UnderstandingLevel>,
    pronouns: &Pronouns,
) -> Option<String> {
    let body = graded(items, &UNDERSTANDING_WORDING, |level, domains| {
        let phrases: Vec<String> = domains.iter().map(|d| d.phrase(pronouns)).collect();
        format!("{} understanding of {}", level.phrase(), format_list(&phrases))
    })?;
    Some(format!("{} {} {body}.", capitalize(pronouns.subject), pronouns.has()))
}

pub fn compliance(
    items: &BTreeMap<TreatmentArea, ComplianceLevel>,
    pronouns: &Pronouns,
) -> Option<String> {
    let body = graded(items, &COMPLIANCE_WORDING, |level, areas| {
        let phrases: Vec<&str> = areas.iter().map(|a| a.phrase()).collect();
        format!("{} with {}", level.phrase(), format_list(&phrases))
    })?;
    Some(format!("{} {} {body}.", capitalize(pronouns.subject), pronouns.is()))
}

pub fn engagement(
    items: &BTreeMap<TreatmentArea, EngagementLevel>,
    pronouns: &Pronouns,
) -> Option<String> {
    let body = graded(items, &ENGAGEMENT_WORDING, |level, areas| {
        let phrases: Vec<&str> = areas.iter().map(|a| a.phrase()).collect();
        format!("{} with {}", level.phrase(), format_list(&phrases))
    })?;
    Some(format!("{} {body}.", pronouns.subject_with("engage")))
}

/// Current risk levels, most severe first.
pub fn current_risk(risks: &BTreeMap<RiskFactor, RiskRecord>, pronouns: &Pronouns) -> Option<String> {
    let current: BTreeMap<RiskFactor, _> = risks
        .iter()
        .filter_map(|(factor, record)| record.current.map(|level| (*factor, level)))
        .collect();
    let body = graded(&current, &RISK_WORDING, |level, factors| {
        let phrases: Vec<&str> = factors.iter().map(|f| f.phrase()).collect();
        format!("risk of {} is {}", format_list(&phrases), level.phrase())
    })?;
    Some(format!("{} {body}.", capitalize(pronouns.possessive)))
}

/// Risks recorded historically with no current level.
pub fn historical_risk(
    risks: &BTreeMap<RiskFactor, RiskRecord>,
    pronouns: &Pronouns,
) -> Option<String> {
    let historical: Vec<&str> = risks
        .iter()
        .filter(|(_, record)| record.historical && record.current.is_none())
        .map(|(factor, _)| factor.phrase())
        .collect();
    if historical.is_empty() {
        return None;
    }
    Some(format!(
        "{} {} a history of {}, with no current risk identified.",
        capitalize(pronouns.subject),
        pronouns.has(),
        format_list(&historical)
    ))
}

pub fn treatment(status: &TreatmentStatus, pronouns: &Pronouns) -> String {
    let mut sentences = Vec::new();
    if status.needs_inpatient_care {
        let own_health = format!("{} own health", pronouns.possessive);
        let own_safety = format!("{} own safety", pronouns.possessive);
        let grounds: Vec<&str> = [
            (status.for_own_health, own_health.as_str()),
            (status.for_own_safety, own_safety.as_str()),
            (status.for_protection_of_others, "the protection of others"),
        ]
        .into_iter()
        .filter_map(|(applies, phrase)| applies.then_some(phrase))
        .collect();
        let mut sentence = format!("{} continued treatment in hospital", pronouns.subject_with("require"));
        if !grounds.is_empty() {
            sentence.push_str(&format!(" in the interests of {}", format_list(&grounds)));
        }
        sentence.push('.');
        sentences.push(sentence);
    } else {
        sentences.push(format!(
            "{} {} not require continued treatment in hospital.",
            capitalize(pronouns.subject),
            pronouns.does()
        ));
    }
    if status.treatment_available {
        sentences.push(format!(
            "Appropriate medical treatment is available to {}.",
            pronouns.object
        ));
    }
    sentences.join(" ")
}

pub fn relapse_prevention(plan: &RelapsePrevention, pronouns: &Pronouns) -> String {
    let subject = capitalize(pronouns.subject);
    let mut sentences = Vec::new();
    if plan.has_plan {
        sentences.push(format!("{subject} {} a relapse prevention plan.", pronouns.has()));
    } else {
        sentences.push(format!(
            "{subject} {} not yet have a relapse prevention plan.",
            pronouns.does()
        ));
    }
    if plan.recognises_warning_signs {
        sentences.push(format!(
            "{} {} early warning signs.",
            pronouns.subject_with("recognise"),
            pronouns.possessive
        ));
    } else {
        sentences.push(format!(
            "{subject} {} not yet recognise {} early warning signs.",
            pronouns.does(),
            pronouns.possessive
        ));
    }
    if plan.knows_how_to_seek_help {
        sentences.push(format!(
            "{} how to seek help if {} mental health deteriorates.",
            pronouns.subject_with("know"),
            pronouns.possessive
        ));
    }
    sentences.join(" ")
}
