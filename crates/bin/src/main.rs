//! SF housing CLI binary.
//!
//! Loads the census data once and prints the table or chart description
//! behind each dashboard analysis.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sfhousing::analysis::AnalysisError;
use sfhousing::{
    Analysis, ChartSpec, Dashboard, DashboardConfig, ExportFormat, Exporter, available_analyses,
};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sfhousing")]
#[command(about = "San Francisco housing cost analysis dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Housing census CSV [default: Data/sfo_neighborhoods_census_data.csv]
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Neighborhood coordinates CSV; required to exist when given
    #[arg(long, global = true)]
    locations: Option<PathBuf>,

    /// JSON dashboard config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the available analyses
    Analyses {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the neighborhoods in the dataset
    Neighborhoods,

    /// Show the table or chart behind one analysis
    Show {
        /// Analysis slug or sidebar label
        analysis: String,

        /// Neighborhood for the neighborhood analyses [default: North Beach]
        #[arg(short, long)]
        neighborhood: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned text table
    Text,
    /// CSV table
    Csv,
    /// JSON records
    Json,
    /// JSON chart description
    Chart,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    fn dashboard_config(&self) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_json_file(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(data) = &self.data {
            config.housing_path = data.clone();
        }
        if let Some(locations) = &self.locations {
            config.locations_path = Some(locations.clone());
            config.require_locations = true;
        }

        Ok(config)
    }

    const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
///
/// Only the first call installs a subscriber. A later call (or one made
/// after another global subscriber is set) leaves the existing one in place.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();
    debug!(installed, "logging initialized");
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    debug!(?cli, "parsed arguments");

    match &cli.command {
        Commands::Analyses { json } => list_analyses(*json)?,
        Commands::Neighborhoods => {
            let dashboard = Dashboard::open(cli.dashboard_config()?)?;
            list_neighborhoods(&dashboard);
        }
        Commands::Show {
            analysis,
            neighborhood,
            format,
            output,
        } => {
            let analysis = Analysis::parse(analysis)
                .ok_or_else(|| AnalysisError::UnknownAnalysis(analysis.clone()))?;
            let dashboard = Dashboard::open(cli.dashboard_config()?)?;
            let content = render(&dashboard, analysis, neighborhood.as_deref(), *format)?;

            match output {
                Some(path) => {
                    std::fs::write(path, &content)?;
                    info!(path = %path.display(), analysis = analysis.slug(), "wrote output");
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn list_analyses(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let analyses = available_analyses();

    if json {
        println!("{}", serde_json::to_string_pretty(&analyses)?);
        return Ok(());
    }

    println!("Analyses:");
    println!("=========\n");

    for info in analyses {
        let mut needs = Vec::new();
        if info.requires_neighborhood {
            needs.push("neighborhood");
        }
        if info.requires_locations {
            needs.push("locations");
        }
        println!(
            "{:<30} {:<22} {:<45} {}",
            info.name,
            info.chart.name(),
            info.label,
            needs.join(", ")
        );
    }

    Ok(())
}

fn list_neighborhoods(dashboard: &Dashboard) {
    let default = dashboard.default_neighborhood();
    for name in dashboard.neighborhoods() {
        if Some(name.as_str()) == default {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
}

/// Render one analysis in the requested format.
fn render(
    dashboard: &Dashboard,
    analysis: Analysis,
    neighborhood: Option<&str>,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let neighborhood = dashboard.resolve_neighborhood(analysis, neighborhood);
    let table = dashboard.table(analysis, neighborhood)?;
    let chart = ChartSpec::build(analysis, &table, neighborhood)?;

    let content = match format {
        OutputFormat::Text => {
            let mut output = format!("\n{}\n", chart.title);
            output.push_str(&"=".repeat(chart.title.len()));
            output.push('\n');
            output.push_str(&table.export_to_string(ExportFormat::Text)?);
            output
        }
        OutputFormat::Csv => table.export_to_string(ExportFormat::Csv)?,
        OutputFormat::Json => {
            let mut output = table.export_to_string(ExportFormat::PrettyJson)?;
            output.push('\n');
            output
        }
        OutputFormat::Chart => {
            let mut output = chart.export_to_string(ExportFormat::PrettyJson)?;
            output.push('\n');
            output
        }
    };

    Ok(content)
}
