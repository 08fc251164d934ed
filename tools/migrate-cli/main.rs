use clap::{Parser, ValueEnum};
use dashboard_migrate::prelude::*;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Widget variants an alias may point at.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantCli {
    LineChart,
    ScatterChart,
    BarChart,
}

impl From<VariantCli> for MonitorWidgetType {
    fn from(variant: VariantCli) -> Self {
        match variant {
            VariantCli::LineChart => MonitorWidgetType::LineChart,
            VariantCli::ScatterChart => MonitorWidgetType::ScatterChart,
            VariantCli::BarChart => MonitorWidgetType::BarChart,
        }
    }
}

/// Converts a Monitor dashboard export into an application dashboard definition
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Monitor dashboard JSON file
    input_path: String,

    /// Where to write the converted definition (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Use sequential style reference ids instead of random ones
    #[arg(long)]
    deterministic_ids: bool,

    /// Treat an extra widget tag as a known variant, e.g. `sc-line-chart=line-chart`
    #[arg(long = "alias", value_name = "TAG=VARIANT", value_parser = parse_alias)]
    aliases: Vec<(String, VariantCli)>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn parse_alias(raw: &str) -> Result<(String, VariantCli), String> {
    let (tag, variant) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected TAG=VARIANT, got '{}'", raw))?;
    if tag.is_empty() {
        return Err("alias tag must not be empty".to_string());
    }
    let variant = VariantCli::from_str(variant, true)?;
    Ok((tag.to_string(), variant))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout stays clean for the converted JSON.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Loading ---
    let monitor = MonitorDefinition::from_file(&cli.input_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load Monitor dashboard '{}': {}",
            cli.input_path, e
        ))
    });
    info!(
        path = %cli.input_path,
        widgets = monitor.widgets.len(),
        "loaded Monitor dashboard"
    );

    // --- 2. Conversion ---
    let mut builder = Converter::builder();
    if cli.deterministic_ids {
        builder = builder.with_ref_id_generator(Box::new(SequentialRefIds::new()));
    }
    for (tag, variant) in &cli.aliases {
        builder = builder.with_type_alias(tag, (*variant).into());
    }
    let converter = builder.build();

    let convert_start = Instant::now();
    let application = converter
        .convert(&monitor)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    let convert_duration = convert_start.elapsed();

    // --- 3. Output ---
    match &cli.output {
        Some(path) => {
            application
                .save(path, cli.pretty)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            info!(path = %path, "wrote application dashboard");
        }
        None => {
            let json = application
                .to_json(cli.pretty)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", json) {
                exit_with_error(&format!("Failed to write to stdout: {}", e));
            }
        }
    }

    info!(
        summary = %application.summary(),
        conversion = ?convert_duration,
        total = ?total_start.elapsed(),
        "migration finished"
    );
}

fn exit_with_error(message: &str) -> ! {
    error!("{}", message);
    std::process::exit(1);
}
