//! Version-range tables.
//!
//! A table maps closed version intervals to fingerprint fragments. Bundled
//! tables are `static` and borrow their data; tables parsed from `"N"` /
//! `"N-M"` keys own it.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Closed interval `[lower, upper]` with its fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub lower: u32,
    pub upper: u32,
    pub fragment: Cow<'static, str>,
}

impl VersionRange {
    pub const fn new(lower: u32, upper: u32, fragment: &'static str) -> Self {
        Self {
            lower,
            upper,
            fragment: Cow::Borrowed(fragment),
        }
    }

    /// Single-version range.
    pub const fn single(version: u32, fragment: &'static str) -> Self {
        Self::new(version, version, fragment)
    }

    /// Parse a range key: `"99"` or `"104-109"`.
    pub fn parse_key(key: &str) -> Result<(u32, u32)> {
        let invalid = || Error::InvalidRangeKey(key.to_string());
        let (lower, upper) = match key.split_once('-') {
            Some((lo, hi)) => (
                lo.trim().parse::<u32>().map_err(|_| invalid())?,
                hi.trim().parse::<u32>().map_err(|_| invalid())?,
            ),
            None => {
                let v = key.trim().parse::<u32>().map_err(|_| invalid())?;
                (v, v)
            }
        };
        if lower > upper {
            return Err(invalid());
        }
        Ok((lower, upper))
    }

    pub fn contains(&self, version: u32) -> bool {
        self.lower <= version && version <= self.upper
    }

    /// Distance to the nearer boundary.
    pub fn distance(&self, version: u32) -> u32 {
        self.lower.abs_diff(version).min(self.upper.abs_diff(version))
    }

    /// Render the range back to key form.
    pub fn key(&self) -> String {
        if self.lower == self.upper {
            self.lower.to_string()
        } else {
            format!("{}-{}", self.lower, self.upper)
        }
    }
}

/// Ordered table of version ranges.
///
/// Declaration order is significant: ties in nearest matching go to the
/// earlier range, and bundled tables are declared newest first.
#[derive(Debug, Clone)]
pub struct VersionRangeTable {
    ranges: Cow<'static, [VersionRange]>,
}

impl VersionRangeTable {
    pub const fn from_static(ranges: &'static [VersionRange]) -> Self {
        Self {
            ranges: Cow::Borrowed(ranges),
        }
    }

    /// Build an owned table from `(key, fragment)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let ranges = pairs
            .into_iter()
            .map(|(key, fragment)| {
                let (lower, upper) = VersionRange::parse_key(key.as_ref())?;
                Ok(VersionRange {
                    lower,
                    upper,
                    fragment: Cow::Owned(fragment.into()),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            ranges: Cow::Owned(ranges),
        })
    }

    pub fn ranges(&self) -> &[VersionRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a VersionRangeTable {
    type Item = &'a VersionRange;
    type IntoIter = std::slice::Iter<'a, VersionRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_single_and_pair() {
        assert_eq!(VersionRange::parse_key("99").unwrap(), (99, 99));
        assert_eq!(VersionRange::parse_key("104-109").unwrap(), (104, 109));
    }

    #[test]
    fn test_parse_key_rejects_garbage() {
        for key in ["", "abc", "10-", "-10", "12-10", "1-2-3"] {
            assert!(
                matches!(VersionRange::parse_key(key), Err(Error::InvalidRangeKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_distance_uses_nearer_boundary() {
        let range = VersionRange::new(73, 79, "x");
        assert_eq!(range.distance(72), 1);
        assert_eq!(range.distance(85), 6);
        assert!(range.contains(74));
        assert_eq!(range.key(), "73-79");
        assert_eq!(VersionRange::single(17, "x").key(), "17");
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let table = VersionRangeTable::from_pairs([("20-30", "b"), ("10", "a")]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.ranges()[0].lower, 20);
        assert_eq!(table.ranges()[1].fragment, "a");
    }
}
