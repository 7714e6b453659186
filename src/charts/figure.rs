//! Chart specifications in the JSON shape Plotly.js expects for
//! `Plotly.newPlot(div, figure.data, figure.layout)`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Pie(PieTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
}

impl Figure {
    /// Number of categories plotted across all traces
    pub fn category_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Bar(bar) => bar.x.len(),
                Trace::Pie(pie) => pie.labels.len(),
            })
            .sum()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.data
            .iter()
            .flat_map(|trace| match trace {
                Trace::Bar(bar) => bar.x.iter(),
                Trace::Pie(pie) => pie.labels.iter(),
            })
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.category_count() == 0
    }
}
