use common::camp_site::QualityLevel;
use serde::{Deserialize, Serialize};

/// Minimum privacy and quality grades a campsite needs to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterSelection {
    pub privacy_threshold: QualityLevel,
    pub quality_threshold: QualityLevel,
}

impl FilterSelection {
    pub fn new(privacy_threshold: QualityLevel, quality_threshold: QualityLevel) -> Self {
        Self { privacy_threshold, quality_threshold }
    }
}
