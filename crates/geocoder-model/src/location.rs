//! Geocoded location records and result sets

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Bounding box of a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// An administrative division (state, county, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLevel {
    /// 1 is the top-level division below country
    pub level: u8,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One geocoded or reverse-geocoded record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admin_levels: Vec<AdminLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Name of the provider that produced this record
    pub provided_by: String,
}

impl Location {
    /// Create a record with only coordinates and provenance set.
    pub fn new(provided_by: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            bounds: None,
            street_number: None,
            street_name: None,
            sub_locality: None,
            locality: None,
            postal_code: None,
            admin_levels: Vec::new(),
            country: None,
            timezone: None,
            display_name: None,
            provided_by: provided_by.into(),
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_street(mut self, number: impl Into<String>, name: impl Into<String>) -> Self {
        self.street_number = Some(number.into());
        self.street_name = Some(name.into());
        self
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_admin_level(mut self, level: u8, name: impl Into<String>) -> Self {
        self.admin_levels.push(AdminLevel {
            level,
            name: name.into(),
            code: None,
        });
        self
    }

    pub fn with_country(mut self, name: impl Into<String>, code: Option<&str>) -> Self {
        self.country = Some(Country {
            name: name.into(),
            code: code.map(str::to_string),
        });
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// Ordered records returned by one lookup.
///
/// Opaque to the cache layer; it is only stored and handed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    locations: Vec<Location>,
}

impl ResultSet {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn first(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn into_inner(self) -> Vec<Location> {
        self.locations
    }

    /// Keep at most `limit` records, preserving order.
    pub fn truncate(&mut self, limit: usize) {
        self.locations.truncate(limit);
    }
}

impl FromIterator<Location> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ResultSet {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
