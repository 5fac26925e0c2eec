//! Postcode grouping for the public listing.
//!
//! Groups are ordered by the numeric value of the postcode. Postcodes that are
//! not plain unsigned integers sort after every numeric one, in string order.

use crate::domain::RestPoint;
use std::collections::BTreeMap;

/// The rest points sharing one postcode, in filtered order.
#[derive(Debug, Clone, PartialEq)]
pub struct PostcodeGroup<'a> {
    pub postcode: &'a str,
    pub points: Vec<&'a RestPoint>,
}

impl PostcodeGroup<'_> {
    /// Number of rest points in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sort key for a postcode.
///
/// Variant order puts numeric postcodes first. Equal numbers (`"2000"` and
/// `"02000"`) stay separate groups and tie-break on the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PostcodeKey<'a> {
    Numeric(u64, &'a str),
    Other(&'a str),
}

impl<'a> PostcodeKey<'a> {
    fn parse(raw: &'a str) -> Self {
        raw.trim()
            .parse::<u64>()
            .map_or(Self::Other(raw), |n| Self::Numeric(n, raw))
    }

    const fn raw(self) -> &'a str {
        match self {
            Self::Numeric(_, raw) | Self::Other(raw) => raw,
        }
    }
}

/// Groups rest points by postcode.
///
/// Every input point lands in exactly one group, and within a group the input
/// order is kept, so flattening the result is a permutation of the input.
///
/// # Examples
///
/// ```
/// use restloop::store::{group_by_postcode, RestPointStore};
///
/// let store = RestPointStore::seeded()?;
/// let filtered = store.filtered();
/// let groups = group_by_postcode(&filtered);
/// assert_eq!(groups[0].postcode, "2000");
/// assert_eq!(groups[0].len(), 2);
/// # Ok::<(), restloop::RestloopError>(())
/// ```
#[must_use]
pub fn group_by_postcode<'a>(points: &[&'a RestPoint]) -> Vec<PostcodeGroup<'a>> {
    let mut groups: BTreeMap<PostcodeKey<'a>, Vec<&'a RestPoint>> = BTreeMap::new();

    for &point in points {
        groups
            .entry(PostcodeKey::parse(&point.postcode))
            .or_default()
            .push(point);
    }

    groups
        .into_iter()
        .map(|(key, points)| PostcodeGroup {
            postcode: key.raw(),
            points,
        })
        .collect()
}
