use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::processors::GeoProjector;
use crate::readers::{GareReader, TrafficReader};
use crate::server::{self, AppState};
use crate::settings::{Settings, SettingsOverrides};
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::MapWriter;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    execute(cli).await
}

/// Run one command with logging already installed
pub async fn execute(cli: Cli) -> Result<()> {
    let mut overrides = SettingsOverrides {
        traffic_csv: cli.traffic_csv.clone(),
        gares_csv: cli.gares_csv.clone(),
        ..SettingsOverrides::default()
    };
    match &cli.command {
        Commands::Serve { bind, map_output } => {
            overrides.bind_address = bind.clone();
            overrides.map_output = map_output.clone();
        }
        Commands::ExportMap { output } => {
            overrides.map_output = output.clone();
        }
        Commands::Summary { .. } => {}
    }
    let settings = Settings::load(cli.config.as_deref(), &overrides)?;

    match cli.command {
        Commands::Serve { .. } => {
            let progress = ProgressReporter::new_spinner("Loading datasets...", cli.quiet);
            let dashboard = Dashboard::load(&settings)?;
            progress.finish_with_message(&format!(
                "Loaded {} stations and {} station locations, map written to {}",
                dashboard.stations().len(),
                dashboard.gares().len(),
                settings.map_output.display()
            ));

            println!("Dashboard running on http://{}/", settings.bind_address);
            server::serve(AppState::new(dashboard), &settings.bind_address).await?;
        }

        Commands::ExportMap { .. } => {
            let progress = ProgressReporter::new_spinner("Reading station locations...", cli.quiet);
            let reader = settings.delimited_reader()?;
            let gares = GareReader::with_reader(reader).read_gares(&settings.gares_csv)?;

            progress.set_message("Writing station map...");
            let document = GeoProjector::new().project(&gares);
            MapWriter::new().write(&document, &settings.map_output)?;

            progress.finish_with_message(&format!(
                "Wrote {} markers ({} rows without a valid geo point) to {}",
                document.markers.len(),
                gares.len() - document.markers.len(),
                settings.map_output.display()
            ));
        }

        Commands::Summary { top } => {
            let progress = ProgressReporter::new_spinner("Loading datasets...", cli.quiet);
            let reader = settings.delimited_reader()?;
            let stations = TrafficReader::with_reader(reader).read_stations(&settings.traffic_csv)?;
            let gares = GareReader::with_reader(reader).read_gares(&settings.gares_csv)?;
            progress.finish_with_message("Datasets loaded");

            let analyzer = DatasetAnalyzer::new(
                top.unwrap_or(settings.top_stations),
                top.unwrap_or(settings.top_cities),
            );
            let summary = analyzer.analyze(&stations, &gares);
            println!("\n{}", summary.detailed_summary());
        }
    }

    Ok(())
}
