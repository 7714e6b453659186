//! Dropdown handlers. Each one maps a selection to a freshly computed
//! figure and keeps no state between calls.

use crate::analyzers::{lines_by_mode, top_stations_for_network};
use crate::charts::{render, ChartKind, ChartOptions, Figure};
use crate::models::{GareRecord, StationRecord};

/// Stations per line for the selected transport mode
pub fn lines_by_mode_figure(gares: &[GareRecord], mode: &str) -> Figure {
    let view = lines_by_mode(gares, mode);
    let options = ChartOptions::new(format!("Nombre de gares par ligne ({})", mode))
        .with_axis_titles("Ligne", "Nombre de gares");
    render(&view, ChartKind::Bar, &options)
}

/// Busiest stations of the selected network
pub fn top_stations_figure(stations: &[StationRecord], network: &str, n: usize) -> Figure {
    let view = top_stations_for_network(stations, network, n);
    let options = ChartOptions::new(format!(
        "Top {} des stations avec le plus grand trafic ({})",
        n, network
    ))
    .with_axis_titles("Stations", "Trafic en dizaine de millions")
    .with_tick_angle(90);
    render(&view, ChartKind::Bar, &options)
}
