pub mod analyzers;
pub mod charts;
pub mod cli;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod server;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{DashboardError, Result};
