//! Endpoint paths and query parameter names of the free-site search service.

/// Format used for dates on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const FREE_PARKS_PATH: &str = "/parks/free";

/// Campsite search lives under `/parks/{park_name}/campsites/free`.
pub const PARKS_SEGMENT: &str = "parks";
pub const CAMPSITES_SEGMENT: &str = "campsites";
pub const FREE_SEGMENT: &str = "free";

pub const PARAM_START_DATE: &str = "start_date";
pub const PARAM_END_DATE: &str = "end_date";
pub const PARAM_DRIVE_HOURS: &str = "drive_hours";
pub const PARAM_FROM_PLACE: &str = "from_place";

/// Campsite detail labels used for filtering.
pub const PRIVACY_LABEL: &str = "Privacy";
pub const QUALITY_LABEL: &str = "Quality";
