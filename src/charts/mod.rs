pub mod figure;
pub mod renderer;

pub use figure::{Axis, BarTrace, Figure, Layout, Marker, PieTrace, Title, Trace};
pub use renderer::{render, ChartKind, ChartOptions};
