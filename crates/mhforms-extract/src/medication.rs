//! Dated medication mentions and the prioritised medication shortlist.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use jiff::civil::Date;
use mhforms_core::models::lookback::Lookback;
use mhforms_core::models::medication::DrugSubtype::{
    Anticholinergic, Antidepressant, Antimanic, Antipsychotic, Hypnotic, Other, Physical,
};
use mhforms_core::models::medication::{DrugSubtype, MedicationMention};
use mhforms_core::models::note::ClinicalNote;
use regex::Regex;
use tracing::{debug, info};

use crate::window::filter_to_window;

pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;
pub const MAX_SELECTED: usize = 8;
pub const MAX_PHYSICAL: usize = 2;

/// A recognised drug name (generic or brand) and what it resolves to.
struct DrugEntry {
    name: &'static str,
    canonical: &'static str,
    subtype: DrugSubtype,
}

const fn drug(name: &'static str, subtype: DrugSubtype) -> DrugEntry {
    DrugEntry {
        name,
        canonical: name,
        subtype,
    }
}

const fn brand(name: &'static str, canonical: &'static str, subtype: DrugSubtype) -> DrugEntry {
    DrugEntry {
        name,
        canonical,
        subtype,
    }
}

const CATALOGUE: &[DrugEntry] = &[
    drug("olanzapine", Antipsychotic),
    drug("risperidone", Antipsychotic),
    drug("quetiapine", Antipsychotic),
    drug("aripiprazole", Antipsychotic),
    drug("clozapine", Antipsychotic),
    drug("haloperidol", Antipsychotic),
    drug("zuclopenthixol", Antipsychotic),
    drug("flupentixol", Antipsychotic),
    drug("paliperidone", Antipsychotic),
    drug("amisulpride", Antipsychotic),
    drug("lurasidone", Antipsychotic),
    drug("chlorpromazine", Antipsychotic),
    drug("sulpiride", Antipsychotic),
    drug("trifluoperazine", Antipsychotic),
    drug("fluphenazine", Antipsychotic),
    drug("cariprazine", Antipsychotic),
    brand("zyprexa", "olanzapine", Antipsychotic),
    brand("abilify", "aripiprazole", Antipsychotic),
    brand("clozaril", "clozapine", Antipsychotic),
    brand("haldol", "haloperidol", Antipsychotic),
    brand("clopixol", "zuclopenthixol", Antipsychotic),
    brand("depixol", "flupentixol", Antipsychotic),
    brand("xeplion", "paliperidone", Antipsychotic),
    drug("sertraline", Antidepressant),
    drug("fluoxetine", Antidepressant),
    drug("citalopram", Antidepressant),
    drug("escitalopram", Antidepressant),
    drug("paroxetine", Antidepressant),
    drug("mirtazapine", Antidepressant),
    drug("venlafaxine", Antidepressant),
    drug("duloxetine", Antidepressant),
    drug("amitriptyline", Antidepressant),
    drug("trazodone", Antidepressant),
    drug("vortioxetine", Antidepressant),
    drug("clomipramine", Antidepressant),
    drug("lofepramine", Antidepressant),
    drug("lithium", Antimanic),
    drug("sodium valproate", Antimanic),
    drug("semisodium valproate", Antimanic),
    drug("valproate", Antimanic),
    drug("carbamazepine", Antimanic),
    drug("lamotrigine", Antimanic),
    brand("priadel", "lithium", Antimanic),
    brand("depakote", "semisodium valproate", Antimanic),
    brand("epilim", "sodium valproate", Antimanic),
    drug("zopiclone", Hypnotic),
    drug("zolpidem", Hypnotic),
    drug("lorazepam", Hypnotic),
    drug("diazepam", Hypnotic),
    drug("clonazepam", Hypnotic),
    drug("temazepam", Hypnotic),
    drug("promethazine", Hypnotic),
    drug("melatonin", Hypnotic),
    drug("procyclidine", Anticholinergic),
    drug("benzatropine", Anticholinergic),
    drug("trihexyphenidyl", Anticholinergic),
    drug("hyoscine", Anticholinergic),
    drug("methylphenidate", Other),
    drug("atomoxetine", Other),
    drug("naltrexone", Other),
    drug("disulfiram", Other),
    drug("acamprosate", Other),
    drug("buprenorphine", Other),
    drug("methadone", Other),
    drug("pregabalin", Other),
    drug("metformin", Physical),
    drug("atorvastatin", Physical),
    drug("simvastatin", Physical),
    drug("amlodipine", Physical),
    drug("ramipril", Physical),
    drug("levothyroxine", Physical),
    drug("omeprazole", Physical),
    drug("lansoprazole", Physical),
    drug("paracetamol", Physical),
    drug("ibuprofen", Physical),
    drug("salbutamol", Physical),
    drug("insulin", Physical),
    drug("bisoprolol", Physical),
    drug("propranolol", Physical),
    drug("senna", Physical),
    drug("lactulose", Physical),
    drug("thiamine", Physical),
    drug("folic acid", Physical),
];

/// Dotted abbreviations carry their own terminator; word forms need `\b`.
const FREQUENCY_PATTERN: &str = r"o\.d\.|b\.d\.|t\.d\.s\.|q\.d\.s\.|p\.r\.n\.|(?:once daily|once a day|twice daily|twice a day|three times daily|three times a day|four times daily|four times a day|every (?:2|two|4|four) weeks|every week|every month|(?:2|two|4|four)[ -]weekly|once weekly|fortnightly|monthly|weekly|as required|as needed|at night|at bedtime|nocte|mane|stat|daily|od|bd|tds|qds|prn|bid|tid|qid|om)\b";

static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = CATALOGUE.iter().map(|d| d.name).collect();
    // Longest first so "sodium valproate" wins over "valproate".
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)\b(?P<drug>{alternation})\b(?:\s*(?P<dose>\d+(?:\.\d+)?\s?(?:mg|mcg|micrograms?|milligrams?|g|ml|units?|iu)\b)(?:\s*(?P<freq>{FREQUENCY_PATTERN}))?)?"
    ))
    .expect("medication mention pattern")
});

fn lookup(name: &str) -> Option<&'static DrugEntry> {
    let lowered = name.to_lowercase();
    CATALOGUE.iter().find(|d| d.name == lowered)
}

/// Subtype of a drug name, generic or brand. Unknown drugs are `Other`.
pub fn classify_drug(name: &str) -> DrugSubtype {
    lookup(name).map_or(DrugSubtype::Other, |d| d.subtype)
}

/// Map a frequency phrase to its chart abbreviation. Unmapped phrases pass
/// through upper-cased.
pub fn normalize_frequency(raw: &str) -> String {
    let key = raw
        .to_lowercase()
        .replace('.', "")
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let normalized = match key.as_str() {
        "od" | "once daily" | "once a day" | "daily" | "om" => "OD",
        "bd" | "bid" | "twice daily" | "twice a day" => "BD",
        "tds" | "tid" | "three times daily" | "three times a day" => "TDS",
        "qds" | "qid" | "four times daily" | "four times a day" => "QDS",
        "nocte" | "on" | "at night" | "at bedtime" => "Nocte",
        "prn" | "as required" | "as needed" => "PRN",
        "weekly" | "once weekly" | "every week" => "Weekly",
        "fortnightly" | "every 2 weeks" | "every two weeks" | "2 weekly" | "two weekly" => {
            "Fortnightly"
        }
        "monthly" | "every month" | "every 4 weeks" | "every four weeks" | "4 weekly"
        | "four weekly" => "Monthly",
        _ => return raw.trim().to_uppercase(),
    };
    normalized.to_string()
}

fn normalize_dose(raw: &str) -> String {
    raw.split_whitespace().collect::<String>().to_lowercase()
}

/// Mentions found in one note body, all stamped with `date`.
pub fn mentions_in_text(text: &str, date: Date) -> Vec<MedicationMention> {
    MENTION
        .captures_iter(text)
        .filter_map(|caps| {
            let entry = lookup(caps.name("drug")?.as_str())?;
            Some(MedicationMention {
                drug_name: entry.canonical.to_string(),
                dose: caps.name("dose").map(|m| normalize_dose(m.as_str())),
                frequency: caps.name("freq").map(|m| normalize_frequency(m.as_str())),
                date,
                subtype: entry.subtype,
            })
        })
        .collect()
}

/// Every in-window mention, grouped by canonical drug name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationIndex {
    by_drug: BTreeMap<String, Vec<MedicationMention>>,
}

impl MedicationIndex {
    pub fn from_mentions(mentions: impl IntoIterator<Item = MedicationMention>) -> Self {
        let mut by_drug: BTreeMap<String, Vec<MedicationMention>> = BTreeMap::new();
        for mention in mentions {
            by_drug
                .entry(mention.drug_name.clone())
                .or_default()
                .push(mention);
        }
        Self { by_drug }
    }

    pub fn is_empty(&self) -> bool {
        self.by_drug.is_empty()
    }

    pub fn drugs(&self) -> impl Iterator<Item = &str> {
        self.by_drug.keys().map(String::as_str)
    }

    pub fn mentions(&self, drug_name: &str) -> &[MedicationMention] {
        self.by_drug
            .get(&drug_name.to_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    fn latest(mentions: &[MedicationMention]) -> Option<Date> {
        mentions.iter().map(|m| m.date).max()
    }

    /// Most recent mention carrying a dose, else the most recent mention.
    fn best_mention(mentions: &[MedicationMention]) -> Option<&MedicationMention> {
        mentions
            .iter()
            .filter(|m| m.dose.is_some())
            .max_by_key(|m| m.date)
            .or_else(|| mentions.iter().max_by_key(|m| m.date))
    }

    /// Drugs of `subtype`, most recently mentioned first; ties alphabetical.
    fn ranked(&self, subtype: DrugSubtype) -> Vec<&[MedicationMention]> {
        let mut ranked: Vec<(&String, &Vec<MedicationMention>)> = self
            .by_drug
            .iter()
            .filter(|(_, mentions)| mentions.first().is_some_and(|m| m.subtype == subtype))
            .collect();
        ranked.sort_by(|(a_name, a), (b_name, b)| {
            Self::latest(b)
                .cmp(&Self::latest(a))
                .then_with(|| a_name.cmp(b_name))
        });
        ranked.into_iter().map(|(_, m)| m.as_slice()).collect()
    }

    /// The shortlist: one drug per psychiatric subtype in priority order,
    /// then up to two physical drugs, capped at eight.
    pub fn select(&self) -> Vec<MedicationMention> {
        let mut selected = Vec::new();
        for subtype in DrugSubtype::PSYCHIATRIC_PRIORITY {
            if let Some(best) = self
                .ranked(subtype)
                .first()
                .and_then(|mentions| Self::best_mention(mentions))
            {
                selected.push(best.clone());
            }
        }
        selected.extend(
            self.ranked(DrugSubtype::Physical)
                .into_iter()
                .take(MAX_PHYSICAL)
                .filter_map(Self::best_mention)
                .cloned(),
        );
        selected.truncate(MAX_SELECTED);
        selected
    }
}

/// Index medication mentions from dated notes within `lookback_months` of
/// the most recent dated note.
pub fn extract_medications(notes: &[ClinicalNote], lookback_months: u32) -> MedicationIndex {
    let dated: Vec<&ClinicalNote> = notes.iter().filter(|n| n.date.is_some()).collect();
    let in_window = filter_to_window(dated, Lookback::Months(lookback_months));
    let mentions = in_window.iter().flat_map(|note| match note.date {
        Some(date) => mentions_in_text(&note.body, date),
        None => Vec::new(),
    });
    let index = MedicationIndex::from_mentions(mentions);
    debug!(
        notes = in_window.len(),
        drugs = index.by_drug.len(),
        "medication index built"
    );
    index
}

/// Fill `target` with the shortlist unless it already holds medications.
/// Returns whether anything was written.
pub fn fill_medications(
    target: &mut Vec<MedicationMention>,
    notes: &[ClinicalNote],
    lookback_months: u32,
) -> bool {
    if !target.is_empty() {
        return false;
    }
    *target = extract_medications(notes, lookback_months).select();
    info!(selected = target.len(), "medication list filled");
    !target.is_empty()
}
