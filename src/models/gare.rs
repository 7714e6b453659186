use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::utils::coordinates::split_geo_point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl GeoPoint {
    /// Parse a `"lat, lon"` string and check both halves are in range
    pub fn parse(geo_point: &str) -> Result<Self> {
        let (lat, lon) = split_geo_point(geo_point)?;
        let point = Self { lat, lon };
        point.validate()?;
        Ok(point)
    }
}

/// One row of the station location dataset, as it appears in the file
#[derive(Debug, Clone, Deserialize)]
pub struct GareRow {
    #[serde(rename = "exploitant")]
    pub operator: String,

    #[serde(rename = "ligne")]
    pub line: String,

    #[serde(rename = "mode")]
    pub mode: String,

    #[serde(rename = "nom_long")]
    pub long_name: String,

    #[serde(rename = "Geo Point")]
    pub geo_point: String,
}

/// A station of the Île-de-France network with its parsed position.
///
/// `position` is derived once from `geo_point`; it is `None` when the raw
/// string is not a valid coordinate pair. Such records still take part in
/// the count views, they are only left off the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GareRecord {
    pub operator: String,
    pub line: String,
    pub mode: String,
    pub long_name: String,
    pub geo_point: String,
    pub position: Option<GeoPoint>,
}

impl GareRecord {
    pub fn new(
        operator: String,
        line: String,
        mode: String,
        long_name: String,
        geo_point: String,
    ) -> Self {
        let position = GeoPoint::parse(&geo_point).ok();
        Self {
            operator,
            line,
            mode,
            long_name,
            geo_point,
            position,
        }
    }

    pub fn field(&self, column: GareColumn) -> &str {
        match column {
            GareColumn::Operator => &self.operator,
            GareColumn::Line => &self.line,
            GareColumn::Mode => &self.mode,
        }
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }
}

impl From<GareRow> for GareRecord {
    fn from(row: GareRow) -> Self {
        Self::new(row.operator, row.line, row.mode, row.long_name, row.geo_point)
    }
}

/// Categorical columns of the station location dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GareColumn {
    Operator,
    Line,
    Mode,
}

impl GareColumn {
    pub fn label(&self) -> &'static str {
        match self {
            GareColumn::Operator => "Exploitant",
            GareColumn::Line => "Ligne",
            GareColumn::Mode => "Mode",
        }
    }
}
