use super::filters;
use crate::charts::Figure;
use crate::error::Result;
use crate::utils::constants::{ROUTE_LINES_BY_MODE, ROUTE_TOP_STATIONS};
use askama::Template;
use serde::Serialize;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub options: Vec<String>,
    pub selected: String,
}

impl Dropdown {
    pub fn new(options: Vec<String>, selected: &str) -> Self {
        Self {
            options,
            selected: selected.to_string(),
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected == option
    }
}

/// Everything the dashboard page shows, already rendered to figures
#[derive(Debug, Clone)]
pub struct DashboardPage {
    /// Number of stations in the top-stations charts
    pub top_n: usize,
    pub top_stations: Figure,
    pub city_share: Figure,
    pub operator_counts: Figure,
    pub line_counts: Figure,
    pub network_dropdown: Dropdown,
    pub network_figure: Figure,
    pub mode_dropdown: Dropdown,
    pub mode_figure: Figure,
    pub map_html: String,
}

/// Initial figures keyed by the id of the element they are drawn in
#[derive(Serialize)]
struct InitialFigures<'a> {
    #[serde(rename = "top-stations-graph")]
    top_stations: &'a Figure,
    #[serde(rename = "city-share-graph")]
    city_share: &'a Figure,
    #[serde(rename = "graph1")]
    operator_counts: &'a Figure,
    #[serde(rename = "graph2")]
    line_counts: &'a Figure,
    #[serde(rename = "traffic-graph")]
    network_figure: &'a Figure,
    #[serde(rename = "line-graph")]
    mode_figure: &'a Figure,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct PageTemplate<'a> {
    page: &'a DashboardPage,
    figures: InitialFigures<'a>,
    plotly_js: &'a str,
    top_stations_route: &'a str,
    lines_by_mode_route: &'a str,
}

pub struct PageWriter;

impl PageWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, page: &DashboardPage) -> Result<String> {
        let template = PageTemplate {
            page,
            figures: InitialFigures {
                top_stations: &page.top_stations,
                city_share: &page.city_share,
                operator_counts: &page.operator_counts,
                line_counts: &page.line_counts,
                network_figure: &page.network_figure,
                mode_figure: &page.mode_figure,
            },
            plotly_js: PLOTLY_JS,
            top_stations_route: ROUTE_TOP_STATIONS,
            lines_by_mode_route: ROUTE_LINES_BY_MODE,
        };
        Ok(template.render()?)
    }
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new()
    }
}
