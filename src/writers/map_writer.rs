use super::filters;
use crate::error::Result;
use crate::processors::{MapDocument, MapMarker};
use askama::Template;
use std::path::Path;
use tracing::info;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate<'a> {
    leaflet_css: &'a str,
    leaflet_js: &'a str,
    tile_url: &'a str,
    attribution: &'a str,
    lat: f64,
    lon: f64,
    zoom: u8,
    markers: &'a [MapMarker],
}

/// Renders a map document as a standalone Leaflet page
pub struct MapWriter;

impl MapWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, document: &MapDocument) -> Result<String> {
        let (lat, lon) = document.center;
        let template = MapTemplate {
            leaflet_css: LEAFLET_CSS,
            leaflet_js: LEAFLET_JS,
            tile_url: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            lat,
            lon,
            zoom: document.zoom,
            markers: &document.markers,
        };
        Ok(template.render()?)
    }

    /// Render and write the map, creating the parent directory if needed
    pub fn write(&self, document: &MapDocument, path: &Path) -> Result<String> {
        let html = self.render(document)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &html)?;

        info!(
            path = %path.display(),
            markers = document.markers.len(),
            "wrote station map"
        );
        Ok(html)
    }
}

impl Default for MapWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn document() -> MapDocument {
        MapDocument {
            center: (48.8566, 2.3522),
            zoom: 11,
            markers: vec![
                MapMarker {
                    lat: 48.8620,
                    lon: 2.3465,
                    tooltip: "Châtelet - Les Halles".to_string(),
                },
                MapMarker {
                    lat: 48.8809,
                    lon: 2.3553,
                    tooltip: "Gare du Nord</script>".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_render_contains_view_and_markers() -> Result<()> {
        let html = MapWriter::new().render(&document())?;

        assert!(html.contains("setView([48.8566, 2.3522], 11)"));
        assert!(html.contains("\"tooltip\":\"Châtelet - Les Halles\""));
        assert!(html.contains("{s}.tile.openstreetmap.org"));
        // The only closing script tags are the page's own
        assert_eq!(html.matches("</script>").count(), 2);

        Ok(())
    }

    #[test]
    fn test_write_creates_parent_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("output").join("map.html");

        let html = MapWriter::new().write(&document(), &path)?;

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path)?, html);

        Ok(())
    }
}
