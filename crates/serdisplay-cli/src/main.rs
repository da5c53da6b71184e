//! Serial Display Control Tool
//!
//! CLI for writing to a DSP-4xx customer display over a serial port.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serdisplay_hw::{Dsp4xx, SerialSettings, TextDisplay};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "dspctl")]
#[command(about = "Control tool for serial customer displays")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Serial port, overrides the configuration file
    #[arg(long)]
    port: Option<String>,

    /// Baud rate, overrides the configuration file
    #[arg(long)]
    baud: Option<u32>,

    /// I/O timeout in milliseconds, overrides the configuration file
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show device information
    Info,
    /// Clear the whole display
    Clear,
    /// Clear a single line
    ClearLine {
        /// Line index, starting at 0
        line: usize,
    },
    /// Write text to a line
    Write {
        /// Text to show (cut off at the end of the line)
        text: String,

        /// Line index, starting at 0
        #[arg(long, default_value = "0")]
        line: usize,

        /// Column to start at, starting at 0
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Clear the line before writing
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration, then apply overrides
    let mut config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::default(),
    };
    if let Some(port) = cli.port {
        config.serial.port = port;
    }
    if let Some(baud) = cli.baud {
        config.serial.baud = baud;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.serial.timeout_ms = timeout_ms;
    }

    let serial = config.serial_config()?;
    debug!(
        "Opening {} at {} baud (timeout {:?})",
        serial.port(),
        serial.baud(),
        serial.timeout()
    );

    let display = Dsp4xx::open(&serial)
        .with_context(|| format!("Failed to open display on {}", serial.port()))?;

    run(cli.command, &display)
}

fn run(command: Commands, display: &dyn TextDisplay) -> Result<()> {
    match command {
        Commands::Info => {
            println!("Display:");
            println!("  Model: {}", display.model());
            println!("  Vendor: {}", display.vendor());
            println!("  Interface: {}", display.interface_type());
            println!("  Lines: {}", display.line_count());
            for line in 0..display.line_count() {
                println!("  Line {}: {} chars", line, display.line_size(line));
            }
        }
        Commands::Clear => {
            display.clear()?;
            println!("Display cleared");
        }
        Commands::ClearLine { line } => {
            display.clear_line(line)?;
            println!("Line {} cleared", line);
        }
        Commands::Write {
            text,
            line,
            offset,
            clear,
        } => {
            display.write(&text, line, offset, clear)?;
            println!("Wrote to line {} at offset {}", line, offset);
        }
    }

    Ok(())
}
