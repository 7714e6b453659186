pub mod geo_projector;

pub use geo_projector::{GeoProjector, MapDocument, MapMarker};
