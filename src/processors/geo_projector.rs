use crate::models::GareRecord;
use crate::utils::constants::{MAP_CENTER_LAT, MAP_CENTER_LON, MAP_ZOOM};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Builds the station map from the location dataset
pub struct GeoProjector {
    center: (f64, f64),
    zoom: u8,
}

impl GeoProjector {
    pub fn new() -> Self {
        Self {
            center: (MAP_CENTER_LAT, MAP_CENTER_LON),
            zoom: MAP_ZOOM,
        }
    }

    /// One marker per record with a valid geo point; the others are skipped
    pub fn to_points(&self, gares: &[GareRecord]) -> Vec<MapMarker> {
        gares
            .iter()
            .filter_map(|gare| {
                gare.position.map(|p| MapMarker {
                    lat: p.lat,
                    lon: p.lon,
                    tooltip: gare.long_name.clone(),
                })
            })
            .collect()
    }

    pub fn project(&self, gares: &[GareRecord]) -> MapDocument {
        MapDocument {
            center: self.center,
            zoom: self.zoom,
            markers: self.to_points(gares),
        }
    }
}

impl Default for GeoProjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gare(name: &str, geo_point: &str) -> GareRecord {
        GareRecord::new(
            "RATP".to_string(),
            "A".to_string(),
            "RER".to_string(),
            name.to_string(),
            geo_point.to_string(),
        )
    }

    #[test]
    fn test_to_points_skips_malformed_rows() {
        let gares = vec![
            gare("Nation", "48.85,2.35"),
            gare("Nulle Part", "bad,data"),
            gare("Vincennes", "48.8473, 2.4338"),
            gare("Demi", "48.85"),
        ];

        let points = GeoProjector::new().to_points(&gares);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].tooltip, "Nation");
        assert!((points[0].lat - 48.85).abs() < 1e-9);
        assert!((points[0].lon - 2.35).abs() < 1e-9);
        assert_eq!(points[1].tooltip, "Vincennes");
    }

    #[test]
    fn test_project_uses_fixed_view() {
        let document = GeoProjector::default().project(&[gare("Nation", "48.85,2.35")]);
        assert_eq!(document.center, (48.8566, 2.3522));
        assert_eq!(document.zoom, 11);
        assert_eq!(document.markers.len(), 1);

        let empty = GeoProjector::new().project(&[]);
        assert!(empty.markers.is_empty());
        assert_eq!(empty.center, document.center);
    }
}
