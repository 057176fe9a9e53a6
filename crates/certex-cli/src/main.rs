mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "certex",
    version,
    about = "Structured-record extraction for calibration certificates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured records from certificate text files
    Extract {
        /// Plain-text certificate file(s)
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Treat inputs as OCR output (repairs digit/letter confusion)
        #[arg(long)]
        ocr: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the batch result to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom JSON tables file (default: built-in tables)
        #[arg(short, long = "tables", value_name = "FILE")]
        tables: Option<PathBuf>,
    },
    /// Manage and inspect the extraction tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// Show the built-in extraction tables
    Show,
    /// Validate a custom tables file
    Validate {
        /// Path to JSON tables file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_files,
            ocr,
            output,
            out,
            tables,
        } => commands::extract::run(input_files, ocr, &output, out, tables),
        Commands::Tables { action } => match action {
            TablesAction::Show => commands::tables::show(),
            TablesAction::Validate { file } => commands::tables::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
