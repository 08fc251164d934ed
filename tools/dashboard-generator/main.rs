use clap::Parser;
use dashboard_migrate::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate random Monitor dashboards for exercising the converter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_dashboard.json")]
    output: String,

    /// Number of widgets to generate
    #[arg(long, default_value_t = 12)]
    widgets: usize,

    /// The maximum number of metrics per widget
    #[arg(long, default_value_t = 6)]
    max_metrics: usize,

    /// Size of the asset pool metrics are drawn from
    #[arg(long, default_value_t = 4)]
    assets: usize,
}

const WIDGET_TYPES: [MonitorWidgetType; 3] = [
    MonitorWidgetType::LineChart,
    MonitorWidgetType::ScatterChart,
    MonitorWidgetType::BarChart,
];

const COLORS: [&str; 4] = ["#5e87b5", "#d13212", "#1d8102", "#ff9900"];

/// Monitor dashboards are laid out on a grid this many units wide.
const GRID_COLUMNS: u32 = 12;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.assets == 0 {
        eprintln!("Error: --assets must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} widgets (up to {} metrics each, {} assets)...",
        cli.widgets, cli.max_metrics, cli.assets
    );

    let asset_ids: Vec<String> = (0..cli.assets).map(|_| random_id(&mut rng)).collect();
    let mut widgets = Vec::with_capacity(cli.widgets);
    let (mut x, mut y, mut row_height) = (0, 0, 0);

    for index in 0..cli.widgets {
        let width = rng.random_range(2..=6);
        let height = rng.random_range(2..=4);
        if x + width > GRID_COLUMNS {
            x = 0;
            y += row_height;
            row_height = 0;
        }

        widgets.push(generate_widget(
            &mut rng,
            index,
            (x, y, width, height),
            &asset_ids,
            cli.max_metrics,
        ));

        x += width;
        row_height = row_height.max(height);
    }

    let definition = MonitorDefinition { widgets };
    let json_output = serde_json::to_string_pretty(&definition)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved dashboard to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_widget(
    rng: &mut ThreadRng,
    index: usize,
    (x, y, width, height): (u32, u32, u32, u32),
    asset_ids: &[String],
    max_metrics: usize,
) -> MonitorWidget {
    let widget_type = WIDGET_TYPES
        .choose(rng)
        .cloned()
        .unwrap_or(MonitorWidgetType::LineChart);

    let metric_count = rng.random_range(1..=max_metrics.max(1));
    let metrics = (0..metric_count)
        .map(|n| {
            let asset_id = asset_ids.choose(rng).cloned().unwrap_or_default();
            MonitorMetric {
                metric_type: "iotsitewise".to_string(),
                label: format!("Metric {} of widget {}", n, index),
                asset_id: Some(asset_id),
                property_id: Some(random_id(rng)),
                data_type: Some("DOUBLE".to_string()),
            }
        })
        .collect();

    let annotations = rng.random_bool(0.3).then(|| MonitorAnnotations {
        y: vec![YAnnotation {
            color: COLORS.choose(rng).unwrap_or(&COLORS[0]).to_string(),
            comparison_operator: if rng.random_bool(0.5) {
                ComparisonOperator::GreaterThan
            } else {
                ComparisonOperator::LessThan
            },
            show_value: rng.random_bool(0.5),
            value: rng.random_range(0..1000_i64).into(),
        }],
    });

    MonitorWidget {
        widget_type,
        title: format!("Widget {}", index),
        x,
        y,
        width,
        height,
        metrics,
        alarms: Vec::new(),
        properties: MonitorWidgetProperties {
            color_data_across_thresholds: Some(true),
            ..Default::default()
        },
        annotations,
    }
}

/// A UUID-shaped random identifier, like the ones Monitor exports carry.
fn random_id(rng: &mut ThreadRng) -> String {
    let bits: u128 = rng.random();
    let hex = format!("{:032x}", bits);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
