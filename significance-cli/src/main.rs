use clap::Parser;
use splitsig::{FormattedReport, SampleGroup, SignificanceConfig, SignificanceEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compare a control and a variant conversion rate for statistical significance.
///
/// Counts are read leniently: non-numeric or negative values count as zero.
#[derive(Parser)]
#[command(name = "significance")]
struct Cli {
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    control_visitors: String,
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    control_conversions: String,
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    variant_visitors: String,
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    variant_conversions: String,

    /// Confidence percent at or above which a result is significant.
    /// Defaults to SIGNIFICANCE_CONFIDENCE_THRESHOLD, then 95.
    #[arg(long)]
    threshold: Option<f64>,

    /// Print the formatted report as JSON
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.threshold {
        Some(t) => SignificanceConfig::new(t)?,
        None => SignificanceConfig::from_env(),
    };
    let engine = SignificanceEngine::new(config);

    let control = SampleGroup::from_raw(&cli.control_visitors, &cli.control_conversions);
    let variant = SampleGroup::from_raw(&cli.variant_visitors, &cli.variant_conversions);
    tracing::info!(?control, ?variant, threshold = config.confidence_threshold_pct, "evaluating");

    let report = engine.evaluate(control, variant)?;
    let formatted = FormattedReport::new(&report, engine.config());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&formatted)?);
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
