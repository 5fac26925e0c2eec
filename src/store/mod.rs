//! In-memory rest point store.
//!
//! Holds every rest point along with the query parameters the public page
//! reads (search text, category) and the initial loading flag. Derived views
//! ([`RestPointStore::filtered`], [`RestPointStore::grouped`]) are computed on
//! demand from the current state.
//!
//! # Examples
//!
//! ```
//! use restloop::domain::NewRestPoint;
//! use restloop::store::RestPointStore;
//!
//! let mut store = RestPointStore::seeded()?;
//! store.set_search_query("2000");
//! assert_eq!(store.filtered().len(), 2);
//!
//! let added = store.add(NewRestPoint {
//!     name: "Harbour Stop".to_string(),
//!     ..NewRestPoint::default()
//! });
//! assert_eq!(added.id, 9);
//! # Ok::<(), restloop::RestloopError>(())
//! ```

pub mod grouping;
pub mod seed;

pub use grouping::{group_by_postcode, PostcodeGroup};

use crate::domain::{
    normalize_phone, Category, NewRestPoint, RestPoint, RestPointPatch, RestloopError, Result,
};

/// Rest points plus the public page's query parameters.
///
/// Ids are assigned from a high-water mark, so an id is never handed out twice
/// even after the record holding it is deleted.
#[derive(Debug, Clone)]
pub struct RestPointStore {
    points: Vec<RestPoint>,
    search_query: String,
    category: Category,
    loading: bool,
    last_issued_id: u64,
}

impl RestPointStore {
    /// Creates a store over existing records. Ids in `points` must be unique.
    ///
    /// Empty phone numbers are normalized to `None`.
    #[must_use]
    pub fn new(mut points: Vec<RestPoint>) -> Self {
        for point in &mut points {
            point.phone = normalize_phone(point.phone.take());
        }
        let last_issued_id = points.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            points,
            search_query: String::new(),
            category: Category::default(),
            loading: true,
            last_issued_id,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a store holding the embedded sample rest points.
    ///
    /// # Errors
    ///
    /// Returns [`RestloopError::Seed`] if the embedded data fails to parse.
    pub fn seeded() -> Result<Self> {
        seed::sample_rest_points().map(Self::new)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[RestPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&RestPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Selects the public page category. Does not affect [`Self::filtered`].
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Clears the loading flag. Returns `true` only on the call that cleared it.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    /// Records matching the current search query, in insertion order.
    ///
    /// A blank query matches everything. Otherwise name and address are
    /// matched case-insensitively and postcode is matched on the raw query.
    #[must_use]
    pub fn filtered(&self) -> Vec<&RestPoint> {
        let _span = tracing::debug_span!("filter", query = %self.search_query).entered();

        if self.search_query.trim().is_empty() {
            return self.points.iter().collect();
        }

        let needle = self.search_query.to_lowercase();
        let matched: Vec<&RestPoint> = self
            .points
            .iter()
            .filter(|p| matches_query(p, &self.search_query, &needle))
            .collect();

        tracing::debug!(matched = matched.len(), total = self.points.len(), "filtered");
        matched
    }

    /// [`Self::filtered`] grouped by postcode.
    #[must_use]
    pub fn grouped(&self) -> Vec<PostcodeGroup<'_>> {
        group_by_postcode(&self.filtered())
    }

    /// Appends a new record under the next unused id and returns it.
    pub fn add(&mut self, new: NewRestPoint) -> RestPoint {
        let id = self.next_id();
        self.last_issued_id = id;

        let point = RestPoint::from_new(id, new);
        self.points.push(point.clone());

        tracing::info!(id, name = %point.name, "rest point added");
        point
    }

    /// Merges `patch` into the record with `id` and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`RestloopError::NotFound`] if no record has `id`.
    pub fn update(&mut self, id: u64, patch: RestPointPatch) -> Result<RestPoint> {
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RestloopError::NotFound { id })?;

        point.apply(patch);

        tracing::info!(id, "rest point updated");
        Ok(point.clone())
    }

    /// Removes the record with `id`. Returns whether a record was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        let removed = self.points.len() != before;

        if removed {
            tracing::info!(id, "rest point deleted");
        } else {
            tracing::debug!(id, "delete of absent rest point ignored");
        }
        removed
    }

    fn next_id(&self) -> u64 {
        let highest_present = self.points.iter().map(|p| p.id).max().unwrap_or(0);
        self.last_issued_id.max(highest_present) + 1
    }
}

impl Default for RestPointStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn matches_query(point: &RestPoint, raw: &str, lowered: &str) -> bool {
    point.name.to_lowercase().contains(lowered)
        || point.address.to_lowercase().contains(lowered)
        || point.postcode.contains(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use std::collections::HashSet;

    fn seeded() -> RestPointStore {
        RestPointStore::seeded().unwrap()
    }

    fn new_point(name: &str) -> NewRestPoint {
        NewRestPoint {
            name: name.to_string(),
            address: "1 Test Road".to_string(),
            postcode: "3000".to_string(),
            hours: "24/7".to_string(),
            phone: None,
            amenities: vec!["Restrooms".to_string()],
            coordinates: Coordinates::default(),
        }
    }

    fn ids(points: &[&RestPoint]) -> Vec<u64> {
        points.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_store_issues_id_one() {
        let mut store = RestPointStore::empty();
        assert_eq!(store.add(new_point("First")).id, 1);
    }

    #[test]
    fn ids_stay_unique_across_deletes() {
        let mut store = seeded();
        let mut issued = HashSet::new();

        for round in 0..5 {
            let added = store.add(new_point(&format!("Stop {round}")));
            assert!(issued.insert(added.id), "id {} issued twice", added.id);
            assert!(store.delete(added.id));
        }

        // Deleting the highest seeded record must not free its id either.
        assert!(store.delete(8));
        let added = store.add(new_point("After"));
        assert!(!issued.contains(&added.id));
        assert!(added.id > 8);

        let present: HashSet<u64> = store.list_all().iter().map(|p| p.id).collect();
        assert_eq!(present.len(), store.len());
    }

    #[test]
    fn search_by_postcode_returns_matching_records() {
        let mut store = seeded();
        store.set_search_query("2000");

        let filtered = store.filtered();

        assert_eq!(ids(&filtered), vec![1, 2]);
        assert!(filtered.iter().all(|p| p.postcode == "2000"));
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_address() {
        let mut store = RestPointStore::empty();
        store.add(NewRestPoint {
            address: "9 Coastal Highway".to_string(),
            ..new_point("Harbour View")
        });
        store.add(new_point("Inland Stop"));

        store.set_search_query("HARBOUR");
        assert_eq!(ids(&store.filtered()), vec![1]);

        store.set_search_query("coastal");
        assert_eq!(ids(&store.filtered()), vec![1]);
    }

    #[test]
    fn blank_query_matches_everything() {
        let mut store = seeded();
        store.set_search_query("   ");
        assert_eq!(store.filtered().len(), store.len());
    }

    #[test]
    fn record_matching_several_fields_appears_once() {
        let mut store = RestPointStore::empty();
        store.add(NewRestPoint {
            address: "2000 Main Street".to_string(),
            postcode: "2000".to_string(),
            ..new_point("Stop 2000")
        });
        store.set_search_query("2000");
        assert_eq!(store.filtered().len(), 1);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let mut store = seeded();
        store.set_search_query("zzz-no-such-place");
        assert!(store.filtered().is_empty());
        assert!(store.grouped().is_empty());
    }

    #[test]
    fn grouped_is_permutation_of_filtered() {
        let mut store = seeded();
        store.set_search_query("a");

        let mut filtered = ids(&store.filtered());
        let mut flattened: Vec<u64> = store
            .grouped()
            .iter()
            .flat_map(|g| g.points.iter().map(|p| p.id))
            .collect();

        filtered.sort_unstable();
        flattened.sort_unstable();
        assert_eq!(flattened, filtered);
    }

    #[test]
    fn seeded_groups_in_numeric_order() {
        let store = seeded();
        let postcodes: Vec<&str> = store.grouped().iter().map(|g| g.postcode).collect();
        assert_eq!(postcodes, vec!["2000", "2010", "2020", "2030", "2040", "2050"]);
    }

    #[test]
    fn update_changes_only_patched_fields() {
        let mut store = seeded();
        let before = store.get(2).unwrap().clone();

        let updated = store
            .update(2, RestPointPatch::default().with_name("Renamed"))
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(
            RestPoint {
                name: before.name.clone(),
                ..updated.clone()
            },
            before
        );
        assert_eq!(store.get(2), Some(&updated));
    }

    #[test]
    fn empty_phone_in_initial_records_becomes_absent() {
        let mut points = seed::sample_rest_points().unwrap();
        points[0].phone = Some(String::new());

        let store = RestPointStore::new(points);

        assert_eq!(store.get(1).unwrap().phone, None);
        assert!(store.get(2).unwrap().phone.is_some());
    }

    #[test]
    fn update_with_empty_phone_clears_it() {
        let mut store = seeded();
        assert!(store.get(1).unwrap().phone.is_some());

        let updated = store
            .update(1, RestPointPatch::default().with_phone(""))
            .unwrap();

        assert_eq!(updated.phone, None);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = seeded();
        let err = store
            .update(42, RestPointPatch::default().with_name("x"))
            .unwrap_err();
        assert!(matches!(err, RestloopError::NotFound { id: 42 }));
    }

    #[test]
    fn delete_is_final_and_idempotent() {
        let mut store = seeded();

        assert!(store.delete(3));
        assert!(store.get(3).is_none());
        assert_eq!(store.len(), 7);

        assert!(!store.delete(3));
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn category_does_not_filter_rest_points() {
        let mut store = seeded();
        store.set_category(Category::Movies);
        assert_eq!(store.category(), Category::Movies);
        assert_eq!(store.filtered().len(), 8);
    }

    #[test]
    fn loading_turns_off_exactly_once() {
        let mut store = seeded();
        assert!(store.loading());

        assert!(store.finish_loading());
        assert!(!store.loading());

        assert!(!store.finish_loading());
        assert!(!store.loading());
    }
}
