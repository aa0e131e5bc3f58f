use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use pixgraph::models::{AppConfig, CanvasSpec, Compression};
use pixgraph::services::{resolve_hash, ConversionPipeline, GraphPublisher};

#[derive(Parser)]
#[command(name = "pixgraph")]
#[command(about = "Turn raster images into graphing-calculator region expressions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to calculator state JSON
    Convert {
        /// Source PNG file
        input: PathBuf,

        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },
    /// Render the compressed rectangles back to a PNG
    Preview {
        /// Source PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },
    /// Save the converted image to the calculator service
    Publish {
        /// Source PNG file
        input: PathBuf,

        /// Graph hash to save under (exactly 10 characters, random if omitted)
        #[arg(long)]
        id: Option<String>,

        /// Build the request but do not send it
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line overrides for config values
#[derive(Args)]
struct Overrides {
    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Color quantization step (0 disables)
    #[arg(short, long)]
    precision: Option<u8>,

    /// Compression mode: "legacy" or "exact"
    #[arg(short, long)]
    mode: Option<Compression>,
}

impl Overrides {
    fn apply(self, mut config: AppConfig) -> anyhow::Result<AppConfig> {
        let width = self.width.unwrap_or(config.size.width);
        let height = self.height.unwrap_or(config.size.height);
        config.size = CanvasSpec::from_dimensions(width, height)?;
        if let Some(precision) = self.precision {
            config.precision = Some(precision);
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            overrides,
        }) => {
            init_logging();
            run_convert_command(&input, &output, overrides)
        }
        Some(Commands::Preview {
            input,
            output,
            overrides,
        }) => {
            init_logging();
            run_preview_command(&input, &output, overrides)
        }
        Some(Commands::Publish {
            input,
            id,
            dry_run,
            overrides,
        }) => {
            init_logging();
            run_publish_command(&input, id.as_deref(), dry_run, overrides)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixgraph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_pipeline(overrides: Overrides) -> anyhow::Result<ConversionPipeline> {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let config = AppConfig::load(config_file.as_deref());
    Ok(ConversionPipeline::new(overrides.apply(config)?))
}

/// Write the calculator state document for an image
fn run_convert_command(input: &Path, output: &Path, overrides: Overrides) -> anyhow::Result<()> {
    let pipeline = load_pipeline(overrides)?;
    let conversion = pipeline.convert_file(input)?;

    let json = serde_json::to_string_pretty(&conversion.document)?;
    std::fs::write(output, &json)?;

    println!(
        "Wrote {} ({} expressions, {} bytes)",
        output.display(),
        conversion.document.len(),
        json.len()
    );
    Ok(())
}

/// Write a PNG showing what the rectangles reproduce
fn run_preview_command(input: &Path, output: &Path, overrides: Overrides) -> anyhow::Result<()> {
    let pipeline = load_pipeline(overrides)?;
    let conversion = pipeline.convert_file(input)?;

    let png = conversion.preview_png()?;
    std::fs::write(output, &png)?;

    println!(
        "Rendered {} ({} rectangles, {} bytes)",
        output.display(),
        conversion.rectangles.len(),
        png.len()
    );
    Ok(())
}

/// Save the converted image to the calculator service
fn run_publish_command(
    input: &Path,
    id: Option<&str>,
    dry_run: bool,
    overrides: Overrides,
) -> anyhow::Result<()> {
    let pipeline = load_pipeline(overrides)?;
    let graph_hash = resolve_hash(id)?;
    let conversion = pipeline.convert_file(input)?;

    let publish = &pipeline.config().publish;
    let request = conversion.save_request(graph_hash, &publish.lang)?;

    if dry_run {
        println!(
            "Dry run: {} expressions, {} bytes payload for {}",
            conversion.document.len(),
            request.payload_bytes(),
            request.graph_hash
        );
        return Ok(());
    }

    let publisher = GraphPublisher::new(publish)?;
    let outcome = publisher.publish(&request)?;

    println!("Saved {} ({} bytes payload)", outcome.url, outcome.payload_bytes);
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Pixgraph v{VERSION}");
    println!("Raster images as graphing-calculator region expressions\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("pixgraph=info (default)")
    );

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_file.as_deref().map(Path::new));

    println!("\nConfiguration:");
    println!("  Source:    {config_source}");
    println!(
        "  Canvas:    {}x{}",
        config.size.width, config.size.height
    );
    println!(
        "  Precision: {}",
        config
            .precision()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "off".to_string())
    );
    println!("  Mode:      {:?}", config.mode);
    println!("  Endpoint:  {}", config.publish.endpoint);

    println!("\nCommands:");
    println!("  pixgraph convert <input.png> -o <out.json>   Write calculator state JSON");
    println!("  pixgraph preview <input.png> -o <out.png>    Render the rectangles to PNG");
    println!("  pixgraph publish <input.png> [--id <hash>]   Save to the calculator service");
    println!("\nRun 'pixgraph --help' for more options.");
}
