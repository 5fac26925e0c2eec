//! Add/edit form state and its reconciliation into store inputs.
//!
//! The form holds raw text for each field. Turning it into a
//! [`NewRestPoint`] or [`RestPointPatch`] splits the amenities text, maps an
//! empty phone to absent and rejects blank required fields.

use crate::domain::{
    normalize_phone, Coordinates, NewRestPoint, RestPoint, RestPointPatch, RestloopError, Result,
};

/// A form field, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Address,
    Postcode,
    Hours,
    Phone,
    Amenities,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Address,
        Self::Postcode,
        Self::Hours,
        Self::Phone,
        Self::Amenities,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Postcode => "Postcode",
            Self::Hours => "Hours",
            Self::Phone => "Phone",
            Self::Amenities => "Amenities (comma-separated)",
        }
    }

    /// Phone is the only optional field.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Next field, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Address,
            Self::Address => Self::Postcode,
            Self::Postcode => Self::Hours,
            Self::Hours => Self::Phone,
            Self::Phone => Self::Amenities,
            Self::Amenities => Self::Name,
        }
    }

    /// Previous field, wrapping from the first to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Amenities,
            Self::Address => Self::Name,
            Self::Postcode => Self::Address,
            Self::Hours => Self::Postcode,
            Self::Phone => Self::Hours,
            Self::Amenities => Self::Phone,
        }
    }
}

/// Text buffers for the add and edit dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestPointForm {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub hours: String,
    pub phone: String,
    pub amenities: String,
    pub focus: FormField,
}

impl RestPointForm {
    /// Pre-fills a form from an existing record.
    #[must_use]
    pub fn from_rest_point(point: &RestPoint) -> Self {
        Self {
            name: point.name.clone(),
            address: point.address.clone(),
            postcode: point.postcode.clone(),
            hours: point.hours.clone(),
            phone: point.phone.clone().unwrap_or_default(),
            amenities: point.amenities.join(", "),
            focus: FormField::default(),
        }
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Address => &self.address,
            FormField::Postcode => &self.postcode,
            FormField::Hours => &self.hours,
            FormField::Phone => &self.phone,
            FormField::Amenities => &self.amenities,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Address => &mut self.address,
            FormField::Postcode => &mut self.postcode,
            FormField::Hours => &mut self.hours,
            FormField::Phone => &mut self.phone,
            FormField::Amenities => &mut self.amenities,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Checks that every required field has non-blank text.
    ///
    /// # Errors
    ///
    /// Returns [`RestloopError::Validation`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .find(|&field| self.value(field).trim().is_empty())
            .map_or(Ok(()), |field| {
                Err(RestloopError::Validation(format!(
                    "{} is required",
                    field_name(field)
                )))
            })
    }

    /// Converts the form into creation input. Coordinates default to `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`RestloopError::Validation`] if a required field is blank.
    pub fn to_new_rest_point(&self) -> Result<NewRestPoint> {
        self.validate()?;
        Ok(NewRestPoint {
            name: self.name.clone(),
            address: self.address.clone(),
            postcode: self.postcode.clone(),
            hours: self.hours.clone(),
            phone: normalize_phone(Some(self.phone.clone())),
            amenities: parse_amenities(&self.amenities),
            coordinates: Coordinates::default(),
        })
    }

    /// Converts the form into a patch covering every editable field.
    ///
    /// Coordinates are not editable and are left out of the patch.
    ///
    /// # Errors
    ///
    /// Returns [`RestloopError::Validation`] if a required field is blank.
    pub fn to_patch(&self) -> Result<RestPointPatch> {
        self.validate()?;
        Ok(RestPointPatch::default()
            .with_name(self.name.clone())
            .with_address(self.address.clone())
            .with_postcode(self.postcode.clone())
            .with_hours(self.hours.clone())
            .with_phone(self.phone.clone())
            .with_amenities(parse_amenities(&self.amenities)))
    }
}

/// Splits comma-separated amenities, trimming segments and dropping empty ones.
///
/// Order and duplicates are kept.
///
/// # Examples
///
/// ```
/// use restloop::form::parse_amenities;
///
/// assert_eq!(parse_amenities("Restrooms, Food"), vec!["Restrooms", "Food"]);
/// assert_eq!(parse_amenities(" ,Wifi,, Wifi "), vec!["Wifi", "Wifi"]);
/// ```
#[must_use]
pub fn parse_amenities(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn field_name(field: FormField) -> &'static str {
    match field {
        FormField::Amenities => "Amenities",
        other => other.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RestPointForm {
        RestPointForm {
            name: "Harbour Stop".to_string(),
            address: "1 Wharf Road".to_string(),
            postcode: "2060".to_string(),
            hours: "24/7".to_string(),
            phone: String::new(),
            amenities: "Restrooms, Food".to_string(),
            focus: FormField::Name,
        }
    }

    #[test]
    fn amenities_text_is_split_and_trimmed() {
        let input = filled().to_new_rest_point().unwrap();
        assert_eq!(input.amenities, vec!["Restrooms", "Food"]);
    }

    #[test]
    fn empty_phone_becomes_absent() {
        let input = filled().to_new_rest_point().unwrap();
        assert_eq!(input.phone, None);

        let patch = filled().to_patch().unwrap();
        assert_eq!(patch.phone, Some(None));
    }

    #[test]
    fn other_fields_pass_through_unchanged() {
        let form = RestPointForm {
            postcode: " 2060 ".to_string(),
            ..filled()
        };
        let input = form.to_new_rest_point().unwrap();
        assert_eq!(input.postcode, " 2060 ");
        assert_eq!(input.coordinates, Coordinates::default());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let form = RestPointForm {
            hours: "   ".to_string(),
            ..filled()
        };
        let err = form.to_new_rest_point().unwrap_err();
        assert!(matches!(err, RestloopError::Validation(msg) if msg == "Hours is required"));
    }

    #[test]
    fn only_commas_passes_but_empty_amenities_fail() {
        let form = RestPointForm {
            amenities: " , ".to_string(),
            ..filled()
        };
        assert_eq!(form.to_new_rest_point().unwrap().amenities, Vec::<String>::new());

        let form = RestPointForm {
            amenities: String::new(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, RestloopError::Validation(msg) if msg == "Amenities is required"));
    }

    #[test]
    fn prefill_joins_amenities_and_blanks_absent_phone() {
        let point = RestPoint {
            id: 3,
            name: "Riverside".to_string(),
            address: "789 River Road".to_string(),
            postcode: "2010".to_string(),
            hours: "6am - 10pm".to_string(),
            phone: None,
            amenities: vec!["Restrooms".to_string(), "Picnic Area".to_string()],
            coordinates: Coordinates::default(),
        };

        let form = RestPointForm::from_rest_point(&point);

        assert_eq!(form.phone, "");
        assert_eq!(form.amenities, "Restrooms, Picnic Area");
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut form = RestPointForm::default();
        form.push_char('A');
        form.focus_next();
        form.push_char('B');
        form.push_char('C');
        form.backspace();

        assert_eq!(form.name, "A");
        assert_eq!(form.address, "B");
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(FormField::Amenities.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Amenities);
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }
}
