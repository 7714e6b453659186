use crate::error::{DashboardError, Result};

/// Parse a single decimal coordinate, surrounding whitespace allowed
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();
    trimmed.parse::<f64>().map_err(|_| {
        DashboardError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })
}

/// Split a combined `"lat, lon"` string into its two decimal halves
///
/// # Examples
/// ```
/// use idf_rail_dashboard::utils::split_geo_point;
///
/// let (lat, lon) = split_geo_point("48.85, 2.35").unwrap();
/// assert!((lat - 48.85).abs() < 1e-9);
/// assert!((lon - 2.35).abs() < 1e-9);
/// ```
pub fn split_geo_point(geo_point: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = geo_point.split(',').collect();

    if parts.len() != 2 {
        return Err(DashboardError::InvalidCoordinate(format!(
            "Invalid geo point: '{}'. Expected format: 'LAT, LON'",
            geo_point
        )));
    }

    let latitude = parse_coordinate(parts[0])?;
    let longitude = parse_coordinate(parts[1])?;

    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(DashboardError::InvalidCoordinate(format!(
            "Non-finite geo point: '{}'",
            geo_point
        )));
    }

    Ok((latitude, longitude))
}
