//! Park ordering state.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Park fields the list can be ordered by, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParkSortField {
    ParkName,
    FreeSites,
    ParentParkName,
    DriveHours,
}

impl ParkSortField {
    pub const ALL: [ParkSortField; 4] = [
        ParkSortField::ParkName,
        ParkSortField::FreeSites,
        ParkSortField::ParentParkName,
        ParkSortField::DriveHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParkSortField::ParkName => "parkName",
            ParkSortField::FreeSites => "freeSites",
            ParkSortField::ParentParkName => "parentParkName",
            ParkSortField::DriveHours => "driveHours",
        }
    }
}

impl Display for ParkSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown park field to order by: {0:?}")]
pub struct UnknownSortField(pub String);

impl FromStr for ParkSortField {
    type Err = UnknownSortField;

    /// Accepts the wire name (`parkName`) or its snake case form (`park_name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "").to_ascii_lowercase();
        ParkSortField::ALL
            .into_iter()
            .find(|field| field.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: ParkSortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: ParkSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(ParkSortField::ParkName, SortDirection::Descending)
    }
}
