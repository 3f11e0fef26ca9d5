use std::path::PathBuf;

use clap::Subcommand;
use choreboard_core::{CoreError, DashboardAnalyzer, DashboardConfig, DisplayMonth, TasksByDay};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Dashboard for one month's task calendar
    Month {
        /// Day-keyed tasks JSON file, as exported by the calendar
        file: PathBuf,
        /// Month number (1-12) for the report header; defaults to the
        /// current month
        #[arg(long)]
        month: Option<u32>,
        /// Year for the report header; defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// Print the raw report as JSON instead of rendering it
        #[arg(long)]
        json: bool,
        /// Config file path (default: ~/.config/choreboard/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Month {
            file,
            month,
            year,
            json,
            config,
        } => {
            let config = match config {
                Some(path) => DashboardConfig::load_from(&path)?,
                None => DashboardConfig::load()?,
            };
            let analyzer = DashboardAnalyzer::from_config(&config);

            let content = std::fs::read_to_string(&file).map_err(CoreError::Io)?;
            let tasks: TasksByDay = serde_json::from_str(&content).map_err(CoreError::Json)?;
            tracing::debug!(
                days = tasks.len(),
                tasks = tasks.values().map(Vec::len).sum::<usize>(),
                "loaded task calendar"
            );

            let report = analyzer.compute_statistics(&tasks)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let current = DisplayMonth::current();
                let display = DisplayMonth::new(
                    year.unwrap_or(current.year),
                    month.unwrap_or(current.month),
                );
                println!("{}", analyzer.render_report(&display, &report));
            }
        }
    }
    Ok(())
}
