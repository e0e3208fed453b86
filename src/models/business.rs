use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;
use uuid::Uuid;

/// Form value that selects a free-text category instead of a predefined one.
pub const OTHER_CATEGORY_VALUE: &str = "other";

/// Categories offered by the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PredefinedCategory {
    Restaurants,
    Hotels,
    Clinics,
    Gyms,
    Stores,
}

impl PredefinedCategory {
    /// Human-readable label for form rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Restaurants => "Restaurant",
            Self::Hotels => "Hotel",
            Self::Clinics => "Clinic",
            Self::Gyms => "Gym",
            Self::Stores => "Store",
        }
    }
}

/// Resolved business category: a predefined slug or a user-supplied label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Predefined(PredefinedCategory),
    Custom(String),
}

impl Category {
    /// Resolve the form's category selection. A predefined slug passes
    /// through; `other` requires a non-empty custom label, which becomes
    /// the stored category.
    pub fn resolve(selected: &str, custom: Option<&str>) -> Result<Self, ValidationError> {
        if selected == OTHER_CATEGORY_VALUE {
            let label = custom.map(str::trim).unwrap_or("");
            if label.is_empty() {
                return Err(ValidationError::MissingCustomCategory);
            }
            return Ok(Self::Custom(label.to_string()));
        }
        match selected.parse::<PredefinedCategory>() {
            Ok(kind) => Ok(Self::Predefined(kind)),
            Err(_) => Err(ValidationError::UnknownCategory(selected.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predefined(kind) => write!(f, "{}", kind),
            Self::Custom(label) => write!(f, "{}", label),
        }
    }
}

/// Geographic point captured from the address-autocomplete widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A directory listing as returned by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub tour_3d_url: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
}

/// Listing form input, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct NewBusiness {
    pub name: String,
    /// Selected category slug, possibly [`OTHER_CATEGORY_VALUE`].
    pub category: String,
    /// Free-text label, only consulted when `category` is `other`.
    pub custom_category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<String>,
    pub tour_3d_url: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl NewBusiness {
    /// Validate the form and build the insert payload for `user_id`.
    ///
    /// The custom-category field never reaches the store; it is folded into
    /// the category column here.
    pub fn into_row(self, user_id: Uuid) -> Result<BusinessRow, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let coordinates = self.coordinates.ok_or(ValidationError::MissingCoordinates)?;
        let category = Category::resolve(&self.category, self.custom_category.as_deref())?;

        Ok(BusinessRow {
            user_id,
            name: self.name.trim().to_string(),
            category: category.to_string(),
            location: self.location,
            description: self.description,
            phone: self.phone,
            website: self.website,
            hours: self.hours,
            tour_3d_url: self.tour_3d_url,
            coordinates: Some(coordinates),
        })
    }
}

/// Insert payload for the `businesses` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessRow {
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_3d_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("business name must not be empty")]
    EmptyName,

    #[error("an address selected from autocomplete is required for coordinates")]
    MissingCoordinates,

    #[error("a custom category label is required when category is 'other'")]
    MissingCustomCategory,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("event title must not be empty")]
    EmptyTitle,
}
