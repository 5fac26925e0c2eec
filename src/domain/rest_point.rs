//! Rest point domain model.
//!
//! A rest point is a physical stop offering driver amenities. This module
//! defines the stored record, the id-less input used when creating one, and the
//! partial patch used when editing one.

use serde::{Deserialize, Serialize};

/// Geographic position of a rest point.
///
/// Carried with every record but not displayed anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A rest point held by the store.
///
/// # Fields
///
/// - `id`: Store-assigned identifier, unique for the lifetime of the store
/// - `name`: Display name
/// - `address`: Street address
/// - `postcode`: Display value and grouping key, sorted numerically
/// - `hours`: Free-text opening hours
/// - `phone`: Contact number, `None` when absent (never `Some("")`)
/// - `amenities`: Facility labels in input order
/// - `coordinates`: Latitude/longitude pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestPoint {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub hours: String,
    pub phone: Option<String>,
    pub amenities: Vec<String>,
    pub coordinates: Coordinates,
}

impl RestPoint {
    /// Builds a stored record from creation input and an assigned id.
    #[must_use]
    pub fn from_new(id: u64, new: NewRestPoint) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            postcode: new.postcode,
            hours: new.hours,
            phone: normalize_phone(new.phone),
            amenities: new.amenities,
            coordinates: new.coordinates,
        }
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    ///
    /// The id is never part of a patch.
    pub fn apply(&mut self, patch: RestPointPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(postcode) = patch.postcode {
            self.postcode = postcode;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(phone) = patch.phone {
            self.phone = normalize_phone(phone);
        }
        if let Some(amenities) = patch.amenities {
            self.amenities = amenities;
        }
        if let Some(coordinates) = patch.coordinates {
            self.coordinates = coordinates;
        }
    }
}

/// Input for creating a rest point; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewRestPoint {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub hours: String,
    pub phone: Option<String>,
    pub amenities: Vec<String>,
    pub coordinates: Coordinates,
}

/// Partial update for an existing rest point.
///
/// `None` leaves a field unchanged. `phone` has two levels so that clearing
/// the phone (`Some(None)`) differs from not touching it (`None`).
///
/// # Examples
///
/// ```
/// use restloop::domain::RestPointPatch;
///
/// let patch = RestPointPatch::default().with_hours("24/7").with_phone("");
/// assert_eq!(patch.hours.as_deref(), Some("24/7"));
/// assert_eq!(patch.phone, Some(None));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestPointPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub hours: Option<String>,
    pub phone: Option<Option<String>>,
    pub amenities: Option<Vec<String>>,
    pub coordinates: Option<Coordinates>,
}

impl RestPointPatch {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    #[must_use]
    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    /// Sets the phone; an empty string clears it.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(normalize_phone(Some(phone.into())));
        self
    }

    #[must_use]
    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = Some(amenities);
        self
    }

    /// Returns `true` if the patch would not change any field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.postcode.is_none()
            && self.hours.is_none()
            && self.phone.is_none()
            && self.amenities.is_none()
            && self.coordinates.is_none()
    }
}

/// Maps an empty phone string to an absent phone.
#[must_use]
pub fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone.filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RestPoint {
        RestPoint {
            id: 1,
            name: "Sunset Rest Area".to_string(),
            address: "123 Highway Drive, Westfield".to_string(),
            postcode: "2000".to_string(),
            hours: "24/7".to_string(),
            phone: Some("555-123-4567".to_string()),
            amenities: vec!["Restrooms".to_string(), "Parking".to_string()],
            coordinates: Coordinates { lat: -33.865_143, lng: 151.2099 },
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut point = sample();
        let before = point.clone();

        point.apply(RestPointPatch::default().with_hours("6am - 10pm"));

        assert_eq!(point.hours, "6am - 10pm");
        assert_eq!(point.name, before.name);
        assert_eq!(point.address, before.address);
        assert_eq!(point.postcode, before.postcode);
        assert_eq!(point.phone, before.phone);
        assert_eq!(point.amenities, before.amenities);
        assert_eq!(point.coordinates, before.coordinates);
    }

    #[test]
    fn empty_phone_in_patch_clears_phone() {
        let mut point = sample();
        point.apply(RestPointPatch::default().with_phone(""));
        assert_eq!(point.phone, None);
    }

    #[test]
    fn raw_empty_phone_is_normalized_on_apply() {
        let mut point = sample();
        point.apply(RestPointPatch {
            phone: Some(Some(String::new())),
            ..RestPointPatch::default()
        });
        assert_eq!(point.phone, None);
    }

    #[test]
    fn from_new_normalizes_phone() {
        let point = RestPoint::from_new(
            9,
            NewRestPoint {
                name: "Test".to_string(),
                phone: Some(String::new()),
                ..NewRestPoint::default()
            },
        );
        assert_eq!(point.id, 9);
        assert_eq!(point.phone, None);
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(RestPointPatch::default().is_empty());
        assert!(!RestPointPatch::default().with_name("x").is_empty());
    }
}
