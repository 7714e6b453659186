use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idf-rail-dashboard")]
#[command(about = "Charts and station map of Île-de-France rail traffic")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Configuration file [default: dashboard.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Annual traffic per station CSV")]
    pub traffic_csv: Option<PathBuf>,

    #[arg(long, global = true, help = "Station locations CSV")]
    pub gares_csv: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the datasets, write the station map and serve the dashboard
    Serve {
        #[arg(short, long, help = "Address to listen on [default: 127.0.0.1:8050]")]
        bind: Option<String>,

        #[arg(long, help = "Station map output path [default: map.html]")]
        map_output: Option<PathBuf>,
    },

    /// Write the station map document and exit
    ExportMap {
        #[arg(short, long, help = "Station map output path [default: map.html]")]
        output: Option<PathBuf>,
    },

    /// Print statistics about both datasets
    Summary {
        #[arg(short, long, help = "Number of stations and cities to list")]
        top: Option<usize>,
    },
}
