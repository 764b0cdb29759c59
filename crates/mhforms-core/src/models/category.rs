//! Stable matching keys for keyword categories and form sections.
//!
//! Identifiers are slugs and never double as display text; labels live
//! beside them in the keyword tables and the form catalogue.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidSlug(slug.to_string()))
    }
}

/// Identifier of a keyword category (e.g. `violence`, `self_harm`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(slug: impl Into<String>) -> Result<Self, CoreError> {
        let slug = slug.into();
        validate_slug(&slug)?;
        Ok(Self(slug))
    }

    /// Build from a literal in a static table.
    ///
    /// Panics if `slug` is not a valid slug.
    pub fn from_static(slug: &'static str) -> Self {
        assert!(validate_slug(slug).is_ok(), "invalid static slug: {slug}");
        Self(slug.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a form section (e.g. `risk_to_others`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(slug: impl Into<String>) -> Result<Self, CoreError> {
        let slug = slug.into();
        validate_slug(&slug)?;
        Ok(Self(slug))
    }

    /// Build from a literal in a static table.
    ///
    /// Panics if `slug` is not a valid slug.
    pub fn from_static(slug: &'static str) -> Self {
        assert!(validate_slug(slug).is_ok(), "invalid static slug: {slug}");
        Self(slug.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Self::new(slug).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Self::new(slug).map_err(serde::de::Error::custom)
    }
}
