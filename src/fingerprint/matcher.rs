//! Exact-then-nearest version lookup over a [`VersionRangeTable`].

use super::range::VersionRangeTable;
use crate::identity::ToleranceMode;

/// Successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMatch<'a> {
    pub fragment: &'a str,
    /// Distance to the matched range; 0 for an exact hit.
    pub distance: u32,
}

impl RangeMatch<'_> {
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Find the fragment for `version`.
///
/// A range containing `version` wins outright. Otherwise the range with the
/// nearest boundary is taken, first declared winning ties, as long as the
/// distance is within `tolerance` and `mode` is not strict.
pub fn lookup(
    version: u32,
    table: &VersionRangeTable,
    tolerance: u32,
    mode: ToleranceMode,
) -> Option<RangeMatch<'_>> {
    let mut closest: Option<RangeMatch<'_>> = None;

    for range in table {
        if range.contains(version) {
            return Some(RangeMatch {
                fragment: &range.fragment,
                distance: 0,
            });
        }

        let distance = range.distance(version);
        if closest.map_or(true, |c| distance < c.distance) {
            closest = Some(RangeMatch {
                fragment: &range.fragment,
                distance,
            });
        }
    }

    if mode.is_strict() {
        return None;
    }

    let closest = closest.filter(|c| c.distance <= tolerance)?;
    tracing::debug!(
        version,
        distance = closest.distance,
        tolerance,
        "no exact version range, using nearest"
    );
    Some(closest)
}
