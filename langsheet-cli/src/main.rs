mod download;
mod export;
mod import;
mod locales;
mod status;
mod sync;
mod types;
mod validation;

use clap::{Parser, Subcommand};

const DEFAULT_LOCALES_DIR: &str = "./locales";
const DEFAULT_WORKBOOK: &str = "./translations.xlsx";
const DEFAULT_TYPES_FILE: &str = "./i18n-types.ts";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export locale JSON files into a translation workbook.
    Export {
        /// Directory containing `<locale>.json` files
        #[arg(short, long, default_value = DEFAULT_LOCALES_DIR)]
        locales: String,

        /// Workbook to write (.xlsx or .csv)
        #[arg(short, long, default_value = DEFAULT_WORKBOOK)]
        output: String,
    },

    /// Import a translation workbook back into locale JSON files.
    Import {
        /// Workbook path or http(s) URL; defaults to ./translations.xlsx
        source: Option<String>,

        /// Directory to write `<locale>.json` files into
        #[arg(short, long, default_value = DEFAULT_LOCALES_DIR)]
        locales: String,
    },

    /// Report per-locale translation coverage.
    Status {
        /// Directory containing `<locale>.json` files
        #[arg(short, long, default_value = DEFAULT_LOCALES_DIR)]
        locales: String,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export the workbook, then report coverage.
    Sync {
        /// Directory containing `<locale>.json` files
        #[arg(short, long, default_value = DEFAULT_LOCALES_DIR)]
        locales: String,

        /// Workbook to write (.xlsx or .csv)
        #[arg(short, long, default_value = DEFAULT_WORKBOOK)]
        output: String,
    },

    /// Generate the TypeScript translation key/parameter contract.
    Types {
        /// Directory containing `<locale>.json` files
        #[arg(short, long, default_value = DEFAULT_LOCALES_DIR)]
        locales: String,

        /// Contract file to write
        #[arg(short, long, default_value = DEFAULT_TYPES_FILE)]
        output: String,

        /// Reference locale; defaults to the lexicographically first one
        #[arg(short, long)]
        reference: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Export { locales, output } => export::run(&locales, &output),
        Commands::Import { source, locales } => import::run(source.as_deref(), &locales),
        Commands::Status { locales, json } => status::run(&locales, json),
        Commands::Sync { locales, output } => sync::run(&locales, &output),
        Commands::Types {
            locales,
            output,
            reference,
        } => types::run(&locales, &output, reference.as_deref()),
    };

    if let Err(message) = result {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}
