//! Dump dispatch
//!
//! Maps a format tag to one of five dumpers and applies it to every record
//! of a result set. The encoders themselves are supplied by the caller.

use std::fmt;
use std::str::FromStr;

use geocoder_model::{Location, ResultSet};
use serde::{Deserialize, Serialize};

use crate::error::GeocodeError;

/// The recognized output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpFormat {
    GeoJson,
    Gpx,
    Kml,
    Wkb,
    Wkt,
}

impl DumpFormat {
    /// Every format, in the order error messages list them.
    pub const ALL: [DumpFormat; 5] = [Self::GeoJson, Self::Gpx, Self::Kml, Self::Wkb, Self::Wkt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeoJson => "geojson",
            Self::Gpx => "gpx",
            Self::Kml => "kml",
            Self::Wkb => "wkb",
            Self::Wkt => "wkt",
        }
    }
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags are matched exactly (lowercase).
impl FromStr for DumpFormat {
    type Err = GeocodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| GeocodeError::invalid_format(s))
    }
}

/// Serializes one location record into a format.
///
/// Binary formats (WKB) are returned hex-encoded.
pub trait ResultDumper: Send + Sync {
    fn dump(&self, location: &Location) -> String;
}

impl<F> ResultDumper for F
where
    F: Fn(&Location) -> String + Send + Sync,
{
    fn dump(&self, location: &Location) -> String {
        self(location)
    }
}

/// One dumper per format.
pub struct Dumpers {
    geojson: Box<dyn ResultDumper>,
    gpx: Box<dyn ResultDumper>,
    kml: Box<dyn ResultDumper>,
    wkb: Box<dyn ResultDumper>,
    wkt: Box<dyn ResultDumper>,
}

impl Dumpers {
    pub fn new(
        geojson: impl ResultDumper + 'static,
        gpx: impl ResultDumper + 'static,
        kml: impl ResultDumper + 'static,
        wkb: impl ResultDumper + 'static,
        wkt: impl ResultDumper + 'static,
    ) -> Self {
        Self {
            geojson: Box::new(geojson),
            gpx: Box::new(gpx),
            kml: Box::new(kml),
            wkb: Box::new(wkb),
            wkt: Box::new(wkt),
        }
    }

    pub fn for_format(&self, format: DumpFormat) -> &dyn ResultDumper {
        match format {
            DumpFormat::GeoJson => self.geojson.as_ref(),
            DumpFormat::Gpx => self.gpx.as_ref(),
            DumpFormat::Kml => self.kml.as_ref(),
            DumpFormat::Wkb => self.wkb.as_ref(),
            DumpFormat::Wkt => self.wkt.as_ref(),
        }
    }

    /// Dump every record, preserving order.
    pub fn dump(&self, results: &ResultSet, format: DumpFormat) -> Vec<String> {
        let dumper = self.for_format(format);
        results.iter().map(|location| dumper.dump(location)).collect()
    }
}

impl fmt::Debug for Dumpers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dumpers").finish_non_exhaustive()
    }
}
