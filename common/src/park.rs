//! Parks with free campsites in the searched travel window.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Park {
    /// Unique within one result set.
    pub park_name: String,
    #[serde(rename = "freeSites")]
    pub free_site_count: u32,
    #[serde(default)]
    pub parent_park_name: Option<String>,
    #[serde(default)]
    pub drive_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub park_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub park_url: Option<String>,
}

impl Park {
    pub fn new(park_name: impl Into<String>, free_site_count: u32) -> Self {
        Self {
            park_name: park_name.into(),
            free_site_count,
            parent_park_name: None,
            drive_hours: None,
            park_id: None,
            park_url: None,
        }
    }

    pub fn with_drive_hours(mut self, drive_hours: f64) -> Self {
        self.drive_hours = Some(drive_hours);
        self
    }

    pub fn with_parent(mut self, parent_park_name: impl Into<String>) -> Self {
        self.parent_park_name = Some(parent_park_name.into());
        self
    }
}
