//! Shared keyword tables. Forms compose their sections from these.
//!
//! Phrases are matched as lowercase substrings, so stems such as `strangl`
//! deliberately cover several word forms.

use std::sync::LazyLock;

use crate::keywords::{CategoryKeywordSet, CategoryRule};

fn set(rules: Vec<CategoryRule>) -> CategoryKeywordSet {
    CategoryKeywordSet::new(rules).expect("static keyword table is valid")
}

pub fn risk_to_others() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "violence",
                "Physical violence",
                &[
                    "assault",
                    "punched",
                    "kicked out at",
                    "kicked staff",
                    "hit staff",
                    "hit a peer",
                    "hit another",
                    "headbutt",
                    "slapped",
                    "violence",
                    "violent",
                    "physically aggressive",
                    "physical aggression",
                    "attacked",
                    "strangl",
                    "bit staff",
                ],
                &[
                    "no violence",
                    "not violent",
                    "no physical aggression",
                    "no incidents of violence",
                    "no evidence of violence",
                    "denied any violence",
                    "was assaulted by",
                    "victim of assault",
                ],
            ),
            CategoryRule::from_static(
                "aggression",
                "Aggression",
                &["aggression", "aggressive", "hostile", "agitated"],
                &[
                    "no aggression",
                    "not aggressive",
                    "no signs of aggression",
                    "not agitated",
                ],
            ),
            CategoryRule::from_static(
                "verbal_aggression",
                "Verbal aggression and threats",
                &[
                    "verbally aggressive",
                    "verbal aggression",
                    "shouting at",
                    "swearing at",
                    "threatened to",
                    "threatening",
                    "verbally abusive",
                    "racially abusive",
                    "intimidating",
                ],
                &[
                    "no verbal aggression",
                    "not verbally aggressive",
                    "no threats",
                    "not threatening",
                ],
            ),
            CategoryRule::from_static(
                "property_damage",
                "Damage to property",
                &[
                    "damaged property",
                    "property damage",
                    "damage to property",
                    "smashed",
                    "punched the wall",
                    "kicked the door",
                    "threw a chair",
                    "threw furniture",
                    "broke a window",
                ],
                &["no property damage", "no damage to property"],
            ),
            CategoryRule::from_static(
                "weapons",
                "Weapons",
                &["knife", "weapon", "blade", "armed with", "machete"],
                &["no weapons", "no access to weapons", "no knife"],
            ),
            CategoryRule::from_static(
                "sexual",
                "Sexually inappropriate behaviour",
                &[
                    "sexually inappropriate",
                    "sexual assault",
                    "sexually disinhibited",
                    "sexual disinhibition",
                    "exposed himself",
                    "exposed herself",
                    "inappropriate touching",
                    "touched inappropriately",
                ],
                &["no sexually inappropriate", "no sexual disinhibition"],
            ),
            CategoryRule::from_static(
                "fire_setting",
                "Fire setting",
                &["arson", "set fire", "fire setting", "fire-setting", "started a fire"],
                &["no fire setting", "no history of arson"],
            ),
        ])
    });
    &TABLE
}

pub fn risk_to_self() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "self_harm",
                "Self-harm",
                &[
                    "self harm",
                    "self-harm",
                    "self harmed",
                    "self-harmed",
                    "cut her arm",
                    "cut his arm",
                    "cutting",
                    "ligature",
                    "overdose",
                    "head banging",
                    "head-banging",
                    "banged his head",
                    "banged her head",
                    "swallowed a",
                ],
                &[
                    "no self harm",
                    "no self-harm",
                    "denies self harm",
                    "denies self-harm",
                    "denied self harm",
                    "denied self-harm",
                    "no thoughts of self harm",
                    "no ligature",
                    "no incidents of self harm",
                ],
            ),
            CategoryRule::from_static(
                "suicide",
                "Suicidal ideation",
                &[
                    "suicidal",
                    "suicide",
                    "end my life",
                    "end his life",
                    "end her life",
                    "kill myself",
                    "kill himself",
                    "kill herself",
                    "wants to die",
                    "take my own life",
                ],
                &[
                    "denies suicidal",
                    "denied suicidal",
                    "no suicidal",
                    "not suicidal",
                    "no thoughts of suicide",
                ],
            ),
            CategoryRule::from_static(
                "self_neglect",
                "Self-neglect",
                &[
                    "self neglect",
                    "self-neglect",
                    "poor personal hygiene",
                    "poor self care",
                    "poor self-care",
                    "refusing food",
                    "refused meals",
                    "not eating",
                    "unkempt",
                ],
                &["no self neglect", "no self-neglect", "no concerns about self care"],
            ),
            CategoryRule::from_static(
                "vulnerability",
                "Vulnerability and exploitation",
                &[
                    "exploited",
                    "exploitation",
                    "vulnerable to",
                    "financial abuse",
                    "cuckooing",
                    "taken advantage of",
                ],
                &["not vulnerable"],
            ),
        ])
    });
    &TABLE
}

pub fn substance_misuse() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "alcohol",
                "Alcohol",
                &[
                    "alcohol",
                    "drunk",
                    "intoxicated",
                    "smelled of alcohol",
                    "smelt of alcohol",
                    "lager",
                    "vodka",
                    "cider",
                    "beer",
                ],
                &[
                    "denies alcohol",
                    "denied alcohol",
                    "no alcohol",
                    "abstinent from alcohol",
                    "alcohol free",
                ],
            ),
            CategoryRule::from_static(
                "cannabis",
                "Cannabis",
                &["cannabis", "weed", "skunk", "thc", "smoking a joint"],
                &["denies cannabis", "denied cannabis", "no cannabis", "thc negative"],
            ),
            CategoryRule::from_static(
                "illicit_drugs",
                "Other illicit substances",
                &[
                    "cocaine",
                    "crack",
                    "heroin",
                    "amphetamine",
                    "mdma",
                    "ecstasy",
                    "ketamine",
                    "spice",
                    "illicit substance",
                    "illicit drug",
                    "positive drug screen",
                    "uds positive",
                ],
                &[
                    "negative drug screen",
                    "uds negative",
                    "denies illicit",
                    "denied illicit",
                    "no illicit",
                ],
            ),
        ])
    });
    &TABLE
}

pub fn absconding() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "awol",
                "AWOL and absconding",
                &[
                    "awol",
                    "absconded",
                    "absconding",
                    "absent without leave",
                    "failed to return",
                    "did not return from leave",
                    "went missing",
                ],
                &["no awol", "no absconding", "no attempts to abscond"],
            ),
            CategoryRule::from_static(
                "leave_breach",
                "Breach of leave conditions",
                &[
                    "late back from leave",
                    "returned late from leave",
                    "breached leave",
                    "breach of leave",
                    "leave suspended",
                ],
                &["no breach of leave", "returned on time"],
            ),
        ])
    });
    &TABLE
}

pub fn forensic_history() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "convictions",
                "Convictions and sentencing",
                &[
                    "convicted",
                    "conviction",
                    "sentenced",
                    "prison",
                    "custodial",
                    "probation",
                    "crown court",
                    "magistrates",
                    "charged with",
                ],
                &[
                    "no convictions",
                    "no previous convictions",
                    "no forensic history",
                ],
            ),
            CategoryRule::from_static(
                "police_contact",
                "Police contact",
                &["police", "arrested", "cautioned", "in custody"],
                &["no police involvement", "no police contact"],
            ),
            CategoryRule::from_static(
                "index_offence",
                "Index offence",
                &[
                    "index offence",
                    "hospital order",
                    "restriction order",
                    "37/41",
                ],
                &[],
            ),
        ])
    });
    &TABLE
}

pub fn psychiatric_history() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "admissions",
                "Admissions",
                &[
                    "admitted",
                    "admission",
                    "detained under",
                    "sectioned",
                    "inpatient",
                ],
                &["no previous admissions", "no admissions"],
            ),
            CategoryRule::from_static(
                "relapse",
                "Relapse",
                &[
                    "relapse",
                    "relapsed",
                    "deteriorat",
                    "became unwell",
                    "decompensat",
                ],
                &[
                    "no signs of relapse",
                    "no evidence of relapse",
                    "no deterioration",
                    "relapse prevention",
                ],
            ),
            CategoryRule::from_static(
                "diagnosis_history",
                "Diagnosis",
                &["diagnosed with", "diagnosis of", "diagnosis:", "diagnoses:"],
                &[],
            ),
        ])
    });
    &TABLE
}

pub fn treatment_compliance() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "compliance",
                "Compliance with medication",
                &[
                    "compliant with medication",
                    "compliant with his medication",
                    "compliant with her medication",
                    "taking medication as prescribed",
                    "accepted medication",
                    "accepted his depot",
                    "accepted her depot",
                    "adherent",
                ],
                &["non-compliant", "non compliant", "not compliant", "non-adherent"],
            ),
            CategoryRule::from_static(
                "non_compliance",
                "Non-compliance",
                &[
                    "non-compliant",
                    "non compliant",
                    "not compliant",
                    "non-adherent",
                    "refused medication",
                    "refused his medication",
                    "refused her medication",
                    "declined medication",
                    "refusing medication",
                    "missed depot",
                    "not taking medication",
                    "spat out",
                    "cheeking",
                ],
                &["no concerns about compliance"],
            ),
            CategoryRule::from_static(
                "depot",
                "Depot medication",
                &["depot", "long acting injectable", "long-acting injectable"],
                &[],
            ),
        ])
    });
    &TABLE
}

pub fn mental_state() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "psychosis",
                "Psychotic symptoms",
                &[
                    "hallucination",
                    "hearing voices",
                    "paranoi",
                    "delusion",
                    "thought disorder",
                    "responding to unseen stimuli",
                    "psychotic",
                ],
                &[
                    "no evidence of psychosis",
                    "no psychotic symptoms",
                    "not psychotic",
                    "denies hearing voices",
                    "denied hearing voices",
                    "no hallucinations",
                    "no delusions",
                ],
            ),
            CategoryRule::from_static(
                "mood",
                "Mood",
                &[
                    "low mood",
                    "depressed",
                    "elated",
                    "irritable",
                    "labile",
                    "hopeless",
                    "tearful",
                ],
                &["no low mood", "denied low mood", "denies low mood"],
            ),
            CategoryRule::from_static(
                "settled",
                "Settled presentation",
                &[
                    "settled",
                    "calm",
                    "pleasant",
                    "bright in mood",
                    "euthymic",
                ],
                &["unsettled", "not settled", "less settled"],
            ),
            CategoryRule::from_static(
                "restrictive_practice",
                "Seclusion and restraint",
                &[
                    "seclusion",
                    "secluded",
                    "restraint",
                    "restrained",
                    "rapid tranquil",
                    "prone restraint",
                ],
                &["no seclusion", "no restraint", "no restrictive interventions"],
            ),
        ])
    });
    &TABLE
}

pub fn physical_health() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "physical_monitoring",
                "Physical monitoring",
                &[
                    "blood pressure",
                    "ecg",
                    "bloods",
                    "bmi",
                    "weight",
                    "physical health check",
                ],
                &["declined bloods"],
            ),
            CategoryRule::from_static(
                "physical_conditions",
                "Physical conditions",
                &[
                    "diabetes",
                    "asthma",
                    "epilepsy",
                    "seizure",
                    "hypertension",
                    "cholesterol",
                    "copd",
                    "hepatitis",
                ],
                &["no physical health concerns"],
            ),
        ])
    });
    &TABLE
}

pub fn engagement() -> &'static CategoryKeywordSet {
    static TABLE: LazyLock<CategoryKeywordSet> = LazyLock::new(|| {
        set(vec![
            CategoryRule::from_static(
                "engagement",
                "Engagement with therapies",
                &[
                    "engaged well",
                    "engaging well",
                    "attended ot",
                    "attended group",
                    "occupational therapy",
                    "psychology session",
                    "1:1 with",
                    "gym session",
                ],
                &[
                    "did not attend",
                    "declined to attend",
                    "refused to engage",
                    "not engaging",
                ],
            ),
            CategoryRule::from_static(
                "disengagement",
                "Disengagement",
                &[
                    "did not attend",
                    "declined to attend",
                    "refused to engage",
                    "not engaging",
                    "disengaged",
                    "poor engagement",
                ],
                &[],
            ),
            CategoryRule::from_static(
                "leave",
                "Section 17 leave",
                &[
                    "section 17 leave",
                    "s17 leave",
                    "escorted leave",
                    "unescorted leave",
                    "ground leave",
                    "community leave",
                ],
                &[],
            ),
        ])
    });
    &TABLE
}
