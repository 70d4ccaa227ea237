//! Campsites and their graded attributes.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::search_const::{PRIVACY_LABEL, QUALITY_LABEL};


/// Attribute grade with the fixed order `Poor < Average < Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum QualityLevel {
    #[default]
    Poor,
    Average,
    Good,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 3] = [QualityLevel::Poor, QualityLevel::Average, QualityLevel::Good];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Poor => "Poor",
            QualityLevel::Average => "Average",
            QualityLevel::Good => "Good",
        }
    }
}

impl Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized quality level: {0:?}")]
pub struct UnknownQualityLevel(pub String);

impl FromStr for QualityLevel {
    type Err = UnknownQualityLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Poor" => Ok(QualityLevel::Poor),
            "Average" => Ok(QualityLevel::Average),
            "Good" => Ok(QualityLevel::Good),
            other => Err(UnknownQualityLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampSite {
    pub park_name: String,
    pub site_number: String,
    #[serde(default)]
    pub campground_name: Option<String>,
    #[serde(default)]
    pub parent_park_name: Option<String>,
    /// Label to value, e.g. `"Privacy:" -> "Good"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl CampSite {
    pub fn new(park_name: impl Into<String>, site_number: impl Into<String>) -> Self {
        Self {
            park_name: park_name.into(),
            site_number: site_number.into(),
            campground_name: None,
            parent_park_name: None,
            details: BTreeMap::new(),
            images: Vec::new(),
        }
    }

    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(label.into(), value.into());
        self
    }

    /// Looks up a detail by label. The service writes labels with a trailing
    /// colon (`"Privacy:"`), so one trailing colon is ignored on both sides.
    pub fn detail(&self, label: &str) -> Option<&str> {
        let wanted = normalize_label(label);
        self.details
            .iter()
            .find(|(key, _)| normalize_label(key) == wanted)
            .map(|(_, value)| value.as_str())
    }

    /// `None` when the attribute is missing or not a known grade.
    pub fn graded(&self, label: &str) -> Option<QualityLevel> {
        self.detail(label)?.parse().ok()
    }

    pub fn privacy(&self) -> Option<QualityLevel> {
        self.graded(PRIVACY_LABEL)
    }

    pub fn quality(&self) -> Option<QualityLevel> {
        self.graded(QUALITY_LABEL)
    }
}

fn normalize_label(label: &str) -> &str {
    let label = label.trim();
    label.strip_suffix(':').unwrap_or(label).trim_end()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
