// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use furniture_catalog::assets::generate_all;
use furniture_catalog::{CatalogConfig, FurnitureRecord, Kind, Showroom};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "furniture-catalog", version, about = "Furniture catalog browser")]
struct Cli {
    /// Asset root holding <style>/<kind>.png (overrides config and env)
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal browser (default)
    Browse,
    /// List styles, kinds and prototype keys
    List,
    /// Build a record through the style's factory
    Show {
        style: String,
        kind: Kind,
        #[arg(long)]
        json: bool,
    },
    /// Clone a stored prototype, e.g. "victorian_sofa"
    Clone {
        key: String,
        #[arg(long)]
        json: bool,
    },
    /// Draw the placeholder PNGs for every style and kind
    GenerateAssets {
        /// Output root (defaults to the configured asset root)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);

    // Logs would corrupt the alternate screen, so browse only logs to a file
    let quiet = matches!(command, Commands::Browse);
    init_tracing(cli.log_file.as_deref(), quiet)?;

    let mut config = CatalogConfig::load(cli.config.as_deref())?;
    if let Some(assets) = cli.assets {
        config = config.with_asset_root(assets);
    }

    match command {
        Commands::Browse => run_ui_mode(config)?,
        Commands::List => run_list(config)?,
        Commands::Show { style, kind, json } => {
            let showroom = Showroom::new(config)?;
            let record = showroom.build(&style, kind)?;
            print_record(&record, json)?;
        }
        Commands::Clone { key, json } => {
            let showroom = Showroom::new(config)?;
            let record = showroom.clone_by_key(&key)?;
            print_record(&record, json)?;
        }
        Commands::GenerateAssets { out } => run_generate(config, out)?,
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if quiet => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn run_list(config: CatalogConfig) -> Result<()> {
    let showroom = Showroom::new(config)?;

    println!("🛋️  Furniture Catalog v{}", furniture_catalog::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\nStyles:");
    for entry in showroom.directory().entries() {
        println!("  {} (assets: {})", entry.name(), entry.slug());
    }

    println!("\nKinds:");
    for kind in Kind::ALL {
        println!("  {}", kind.as_str());
    }

    println!("\nPrototypes:");
    for key in showroom.prototypes().keys() {
        println!("  {}", key);
    }

    Ok(())
}

fn print_record(record: &FurnitureRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    for line in record.detail_lines() {
        println!("{}", line);
    }
    if record.image.is_placeholder() {
        println!("Image: (placeholder)");
    } else {
        println!("Image: {}x{}", record.image.width, record.image.height);
    }

    Ok(())
}

fn run_generate(config: CatalogConfig, out: Option<PathBuf>) -> Result<()> {
    let root = out.unwrap_or_else(|| config.asset_root.clone());
    let showroom = Showroom::new(config)?;

    println!("🎨 Generating furniture images into {}", root.display());
    let written = generate_all(showroom.directory(), &root)?;
    for path in &written {
        println!("✓ {}", path.display());
    }
    println!("\n✅ {} images generated", written.len());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: CatalogConfig) -> Result<()> {
    let showroom = Showroom::new(config)?;
    showroom.prototypes().initialize();

    let mut app = ui::App::new(showroom);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: CatalogConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: furniture-catalog show <style> <kind>");
    std::process::exit(1);
}
