//! Grouping of ordinal attributes by level and the connectors between groups.
//!
//! Levels order best-first (or most severe first for risk), so the first
//! group is always the lead clause. Each later group is classed against the
//! lead: same tier is `Equal`, the first group below the lead's tier is the
//! `Drop`, and anything after the drop is a `Continuation`.

use std::collections::BTreeMap;

/// An ordinal attribute level. `Ord` runs from the lead level downwards.
pub trait Level: Copy + Ord {
    /// Coarse band used to decide whether a group is a drop from the lead.
    fn tier(self) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Equal,
    Drop,
    Continuation,
}

/// Connector text for each transition on one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleWording {
    pub equal: &'static str,
    pub drop: &'static str,
    pub continuation: &'static str,
}

impl ScaleWording {
    pub fn connector(&self, transition: Transition) -> &'static str {
        match transition {
            Transition::Equal => self.equal,
            Transition::Drop => self.drop,
            Transition::Continuation => self.continuation,
        }
    }
}

pub const UNDERSTANDING_WORDING: ScaleWording = ScaleWording {
    equal: " and ",
    drop: ", but only ",
    continuation: " and ",
};

pub const COMPLIANCE_WORDING: ScaleWording = UNDERSTANDING_WORDING;

pub const ENGAGEMENT_WORDING: ScaleWording = UNDERSTANDING_WORDING;

pub const RISK_WORDING: ScaleWording = ScaleWording {
    equal: " and ",
    drop: " and ",
    continuation: " and ",
};

/// Group items by level, lead level first. Item order within a group
/// follows the input order.
pub fn group_by_level<I, L: Level>(items: impl IntoIterator<Item = (I, L)>) -> Vec<(L, Vec<I>)> {
    let mut groups: BTreeMap<L, Vec<I>> = BTreeMap::new();
    for (item, level) in items {
        groups.entry(level).or_default().push(item);
    }
    groups.into_iter().collect()
}

/// Transition of each group relative to the lead. The lead itself has none.
pub fn transitions<L: Level>(levels: &[L]) -> Vec<Option<Transition>> {
    let Some(lead) = levels.first() else {
        return Vec::new();
    };
    let mut dropped = false;
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            if i == 0 {
                None
            } else if level.tier() == lead.tier() {
                Some(Transition::Equal)
            } else if !dropped {
                dropped = true;
                Some(Transition::Drop)
            } else {
                Some(Transition::Continuation)
            }
        })
        .collect()
}

/// Join rendered group fragments with the scale's connectors.
pub fn join_groups<L: Level>(groups: &[(L, String)], wording: &ScaleWording) -> String {
    let levels: Vec<L> = groups.iter().map(|(level, _)| *level).collect();
    let mut output = String::new();
    for ((_, fragment), transition) in groups.iter().zip(transitions(&levels)) {
        if let Some(transition) = transition {
            output.push_str(wording.connector(transition));
        }
        output.push_str(fragment);
    }
    output
}
