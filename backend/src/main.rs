//! csvjson CLI - Convert CSV files to JSON
//!
//! # Main Commands
//!
//! ```bash
//! csvjson convert input.csv              # Print converted JSON
//! csvjson convert input.csv -o out.json  # Save converted JSON
//! csvjson convert input.csv --save       # Save as download.json in CSVJSON_SAVE_DIR
//! csvjson validate data.json             # Check JSON syntax
//! csvjson serve                          # Start HTTP server (port 3000)
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! csvjson parse input.csv                # Show the parsed table
//! ```

use clap::{Parser, Subcommand};
use csvjson::{
    decode_text, parse_csv, validate_json, Config, ConverterState, FsHost, LoadOutcome,
    SaveOutcome, DOWNLOAD_FILE_NAME, LOG_BROADCASTER,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csvjson")]
#[command(about = "Convert CSV files to pretty-printed JSON", long_about = None)]
struct Cli {
    /// Echo conversion logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV file to JSON
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save as download.json in the configured save directory
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Replace the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Parse a CSV file and print the raw table
    Parse {
        /// Input CSV file
        input: PathBuf,
    },

    /// Check that a file holds valid JSON
    Validate {
        /// Input JSON file
        input: PathBuf,
    },

    /// Start HTTP server
    Serve {
        /// Port to listen on (default: CSVJSON_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    if cli.verbose {
        LOG_BROADCASTER.set_echo(true);
    }

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            save,
            force,
        } => cmd_convert(&config, &input, output.as_deref(), save, force).await,

        Commands::Parse { input } => cmd_parse(&input),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Serve { port } => cmd_serve(config, port).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_convert(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    save: bool,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Converting: {}", input.display());

    let mut host = FsHost::new(&config.save_dir)
        .with_input(input)
        .overwrite(force);
    if let Some(path) = output {
        host = host.with_output(path);
    }

    let mut state = ConverterState::new();
    match state.open_csv(&host).await? {
        LoadOutcome::Loaded => {}
        LoadOutcome::Ignored | LoadOutcome::Cancelled => {
            return Err(format!("No usable contents in {}", input.display()).into());
        }
    }

    let info = state.convert()?;
    eprintln!("   Columns: {}", info.headers.join(", "));
    eprintln!("   Rows: {}", info.row_count);
    if info.short_rows > 0 {
        eprintln!("   ⚠️  {} short rows (missing cells are null)", info.short_rows);
    }

    if output.is_none() && !save {
        println!("{}", state.json_text);
        return Ok(());
    }

    match state.save_json(&host).await? {
        SaveOutcome::Saved => {
            eprintln!("💾 Output written to: {}", host.target(DOWNLOAD_FILE_NAME).display());
        }
        SaveOutcome::Cancelled => {
            eprintln!("⏭️  Not saved: target exists (use --force to replace it)");
        }
    }

    Ok(())
}

fn cmd_parse(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let decoded = decode_text(&fs::read(input)?);
    let table = parse_csv(&decoded.text);

    eprintln!("   Encoding: {}", decoded.encoding);
    eprintln!("✅ Parsed {} lines", table.len());

    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Validating: {}", input.display());

    let decoded = decode_text(&fs::read(input)?);

    validate_json(&decoded.text).into_result()?;

    eprintln!("✅ Valid JSON");
    Ok(())
}

async fn cmd_serve(config: Config, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    LOG_BROADCASTER.set_echo(true);

    let config = Config {
        port: port.unwrap_or(config.port),
        ..config
    };

    csvjson::server::start_server(&config).await?;
    Ok(())
}
