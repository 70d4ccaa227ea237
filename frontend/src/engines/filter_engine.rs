use common::camp_site::{CampSite, QualityLevel};

use crate::data_definitions::filter_selection::FilterSelection;

/// Campsites whose privacy and quality both reach the selected thresholds,
/// in their original order. Sites with a missing or unrecognized grade never pass.
pub fn filter_camp_sites(all_sites: &[CampSite], selection: &FilterSelection) -> Vec<CampSite> {
    all_sites.iter().filter(|site| site_passes(site, selection)).cloned().collect()
}

pub fn site_passes(site: &CampSite, selection: &FilterSelection) -> bool {
    meets(site.privacy(), selection.privacy_threshold) && meets(site.quality(), selection.quality_threshold)
}

fn meets(level: Option<QualityLevel>, threshold: QualityLevel) -> bool {
    matches!(level, Some(level) if level >= threshold)
}
