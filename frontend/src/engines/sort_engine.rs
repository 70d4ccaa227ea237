use std::cmp::Ordering;

use common::park::Park;

use crate::data_definitions::sort_spec::{ParkSortField, SortDirection, SortSpec};

/// A new list ordered by `spec`. Parks with equal field values keep their input order.
pub fn sort_parks(parks: &[Park], spec: &SortSpec) -> Vec<Park> {
    let mut sorted = parks.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, spec.field);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Asking for the current field again flips the direction; a different field starts descending.
pub fn next_sort_spec(previous: &SortSpec, field: ParkSortField) -> SortSpec {
    if previous.field == field {
        SortSpec::new(field, previous.direction.flipped())
    } else {
        SortSpec::new(field, SortDirection::Descending)
    }
}

/// Natural order of the field; missing optional values come first.
pub fn compare_by_field(a: &Park, b: &Park, field: ParkSortField) -> Ordering {
    match field {
        ParkSortField::ParkName => a.park_name.cmp(&b.park_name),
        ParkSortField::FreeSites => a.free_site_count.cmp(&b.free_site_count),
        ParkSortField::ParentParkName => a.parent_park_name.cmp(&b.parent_park_name),
        ParkSortField::DriveHours => match (a.drive_hours, b.drive_hours) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (a, b) => a.is_some().cmp(&b.is_some()),
        },
    }
}
