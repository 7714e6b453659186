pub mod controller;

use crate::analyzers::{
    count_by_category, distinct_values, top_cities_by_traffic, top_stations_by_traffic,
};
use crate::charts::{render, ChartKind, ChartOptions, Figure};
use crate::error::Result;
use crate::models::{GareColumn, GareRecord, StationRecord};
use crate::processors::GeoProjector;
use crate::readers::{GareReader, TrafficReader};
use crate::settings::Settings;
use crate::writers::{DashboardPage, Dropdown, MapWriter, PageWriter};
use tracing::debug;

/// Dropdown defaults and view sizes
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub default_mode: String,
    pub default_network: String,
    pub top_stations: usize,
    pub top_cities: usize,
}

impl From<&Settings> for DashboardOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            default_mode: settings.default_mode.clone(),
            default_network: settings.default_network.clone(),
            top_stations: settings.top_stations,
            top_cities: settings.top_cities,
        }
    }
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// Both datasets and the generated map, read-only once built
pub struct Dashboard {
    stations: Vec<StationRecord>,
    gares: Vec<GareRecord>,
    map_html: String,
    options: DashboardOptions,
}

impl Dashboard {
    pub fn new(
        stations: Vec<StationRecord>,
        gares: Vec<GareRecord>,
        map_html: String,
        options: DashboardOptions,
    ) -> Self {
        Self {
            stations,
            gares,
            map_html,
            options,
        }
    }

    /// Load both datasets and write the station map, as done once at startup
    pub fn load(settings: &Settings) -> Result<Self> {
        let reader = settings.delimited_reader()?;
        let stations = TrafficReader::with_reader(reader).read_stations(&settings.traffic_csv)?;
        let gares = GareReader::with_reader(reader).read_gares(&settings.gares_csv)?;

        let document = GeoProjector::new().project(&gares);
        let map_html = MapWriter::new().write(&document, &settings.map_output)?;

        Ok(Self::new(stations, gares, map_html, settings.into()))
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn gares(&self) -> &[GareRecord] {
        &self.gares
    }

    pub fn map_html(&self) -> &str {
        &self.map_html
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn network_options(&self) -> Vec<String> {
        distinct_values(&self.stations, |s| s.network.as_str())
    }

    pub fn mode_options(&self) -> Vec<String> {
        distinct_values(&self.gares, |g| g.mode.as_str())
    }

    /// Flow A: lines of the selected mode
    pub fn lines_by_mode_figure(&self, mode: &str) -> Figure {
        debug!(mode, "rendering lines by mode");
        controller::lines_by_mode_figure(&self.gares, mode)
    }

    /// Flow B: busiest stations of the selected network
    pub fn top_stations_figure(&self, network: &str) -> Figure {
        debug!(network, "rendering top stations by network");
        controller::top_stations_figure(&self.stations, network, self.options.top_stations)
    }

    pub fn top_stations_overview(&self) -> Figure {
        let view = top_stations_by_traffic(&self.stations, self.options.top_stations);
        let options = ChartOptions::new(format!(
            "Top {} stations avec le plus grand trafic",
            self.options.top_stations
        ))
        .with_tick_angle(-90);
        render(&view, ChartKind::Bar, &options)
    }

    pub fn city_share(&self) -> Figure {
        let view = top_cities_by_traffic(&self.stations, self.options.top_cities);
        render(
            &view,
            ChartKind::Pie,
            &ChartOptions::new("Répartition du trafic par ville"),
        )
    }

    pub fn operator_counts(&self) -> Figure {
        let view = count_by_category(&self.gares, GareColumn::Operator).sorted_desc();
        let options = ChartOptions::new("Nombre de stations par exploitant")
            .with_axis_titles("Exploitant", "Nombre de stations")
            .with_category_colors();
        render(&view, ChartKind::Bar, &options)
    }

    pub fn line_counts(&self) -> Figure {
        let view = count_by_category(&self.gares, GareColumn::Line).sorted_desc();
        let options = ChartOptions::new("Nombre de stations par ligne")
            .with_axis_titles("Ligne", "Nombre de stations")
            .with_category_colors();
        render(&view, ChartKind::Bar, &options)
    }

    /// All page figures, with both dropdowns pre-rendered at their defaults
    pub fn page(&self) -> DashboardPage {
        DashboardPage {
            top_n: self.options.top_stations,
            top_stations: self.top_stations_overview(),
            city_share: self.city_share(),
            operator_counts: self.operator_counts(),
            line_counts: self.line_counts(),
            network_dropdown: Dropdown::new(self.network_options(), &self.options.default_network),
            network_figure: self.top_stations_figure(&self.options.default_network),
            mode_dropdown: Dropdown::new(self.mode_options(), &self.options.default_mode),
            mode_figure: self.lines_by_mode_figure(&self.options.default_mode),
            map_html: self.map_html.clone(),
        }
    }

    pub fn render_page(&self) -> Result<String> {
        PageWriter::new().render(&self.page())
    }
}
