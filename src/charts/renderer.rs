use crate::charts::figure::{Axis, BarTrace, Figure, Layout, Marker, PieTrace, Title, Trace};
use crate::models::AggregatedView;
use crate::utils::constants::CATEGORY_PALETTE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub tick_angle: Option<i32>,
    pub color_by_category: bool,
}

impl ChartOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_axis_titles(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_string());
        self.y_title = Some(y_title.to_string());
        self
    }

    pub fn with_tick_angle(mut self, angle: i32) -> Self {
        self.tick_angle = Some(angle);
        self
    }

    pub fn with_category_colors(mut self) -> Self {
        self.color_by_category = true;
        self
    }
}

/// Map a view onto a chart: keys on the category axis, measures on the
/// value axis. Axis titles default to the view's labels.
pub fn render(view: &AggregatedView, kind: ChartKind, options: &ChartOptions) -> Figure {
    let keys: Vec<String> = view.keys().map(str::to_string).collect();
    let values: Vec<u64> = view.values().collect();

    match kind {
        ChartKind::Bar => {
            let marker = options.color_by_category.then(|| Marker {
                color: category_colors(keys.len()),
            });

            Figure {
                data: vec![Trace::Bar(BarTrace {
                    x: keys,
                    y: values,
                    marker,
                })],
                layout: Layout {
                    title: options.title.as_str().into(),
                    xaxis: Some(Axis {
                        title: options.x_title.as_deref().unwrap_or(&view.key_label).into(),
                        tickangle: options.tick_angle,
                    }),
                    yaxis: Some(Axis {
                        title: options
                            .y_title
                            .as_deref()
                            .unwrap_or(&view.measure_label)
                            .into(),
                        tickangle: None,
                    }),
                    showlegend: false,
                },
            }
        }
        ChartKind::Pie => Figure {
            data: vec![Trace::Pie(PieTrace {
                labels: keys,
                values,
            })],
            layout: Layout {
                title: Title::from(options.title.as_str()),
                xaxis: None,
                yaxis: None,
                showlegend: true,
            },
        },
    }
}

fn category_colors(count: usize) -> Vec<String> {
    CATEGORY_PALETTE
        .iter()
        .cycle()
        .take(count)
        .map(|c| c.to_string())
        .collect()
}
