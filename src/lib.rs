//! page-to-alto: convert PAGE-XML to ALTO-XML.
//!
//! PAGE-XML describes a page as nested regions, text lines and words with
//! polygonal geometry and multiple transcription alternatives; ALTO-XML
//! describes it as a print space with margins, typed blocks, lines and
//! strings. This crate converts the former into the latter across seven ALTO
//! schema revisions (2.0 through 4.2), feature-gating whatever an older
//! revision cannot express.
//!
//! # Modules
//!
//! - [`page`]: the PAGE-XML data model and reader
//! - [`alto`]: ALTO schema versions and XML building
//! - [`convert`]: the conversion engine and its configuration
//! - [`error`]: error types for page-to-alto operations
//!
//! # Example
//!
//! ```no_run
//! use page_to_alto::convert::{convert_page_file, ConvertOptions};
//!
//! let alto = convert_page_file("page.xml".as_ref(), ConvertOptions::default())?;
//! println!("{alto}");
//! # Ok::<(), page_to_alto::ConvertError>(())
//! ```

pub mod alto;
pub mod convert;
pub mod error;
pub mod page;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use convert::{ConvertOptions, Converter};
pub use error::ConvertError;

/// The page-to-alto CLI application.
#[derive(Parser)]
#[command(name = "page-to-alto")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a PAGE-XML file to ALTO-XML.
    Convert(ConvertArgs),
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// PAGE-XML input file.
    input: PathBuf,

    /// Output file (stdout if omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// ALTO schema version to produce ('2.0' ... '4.2'); older versions may
    /// not preserve all features.
    #[arg(long, default_value = "4.2")]
    alto_version: String,

    /// Do not fail when a line has text but no words.
    #[arg(long)]
    no_check_words: bool,

    /// Do not fail when the page has neither Border nor PrintSpace.
    #[arg(long)]
    no_check_border: bool,

    /// Omit empty lines completely instead of emitting a placeholder String.
    #[arg(long)]
    skip_empty_lines: bool,

    /// Emit a HYP element when the last word of a line ends in a dash.
    #[arg(long)]
    trailing_dash_to_hyp: bool,

    /// Do not create a TextLine for regions that have text but no lines.
    #[arg(long)]
    no_dummy_textline: bool,

    /// Do not create a Word for lines that have text but no words.
    #[arg(long)]
    no_dummy_word: bool,

    /// @index of the TextEquiv alternative to choose.
    #[arg(long, default_value_t = 0)]
    textequiv_index: u32,

    /// Fallback when no TextEquiv matches ('raise', 'first' or 'last').
    #[arg(long, default_value = "last")]
    textequiv_fallback: String,

    /// Region iteration order ('document', 'reading-order' or
    /// 'reading-order-only').
    #[arg(long, default_value = "document")]
    region_order: String,

    /// Text line iteration order ('document' or 'index').
    #[arg(long, default_value = "document")]
    textline_order: String,

    /// Metadata element used for processingDateTime ('Created', 'LastChange'
    /// or 'none').
    #[arg(long, default_value = "LastChange")]
    timestamp_src: String,
}

/// Run the page-to-alto CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            println!("page-to-alto {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Convert PAGE-XML to ALTO-XML.");
            println!();
            println!("Run 'page-to-alto --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), ConvertError> {
    let opts = ConvertOptions {
        alto_version: args.alto_version.parse()?,
        check_words: !args.no_check_words,
        check_border: !args.no_check_border,
        skip_empty_lines: args.skip_empty_lines,
        trailing_dash_to_hyp: args.trailing_dash_to_hyp,
        dummy_textline: !args.no_dummy_textline,
        dummy_word: !args.no_dummy_word,
        textequiv_index: args.textequiv_index,
        textequiv_fallback_strategy: FromStr::from_str(&args.textequiv_fallback)?,
        region_order: FromStr::from_str(&args.region_order)?,
        textline_order: FromStr::from_str(&args.textline_order)?,
        timestamp_src: FromStr::from_str(&args.timestamp_src)?,
    };

    let doc = page::read_page_file(&args.input)?;
    let alto = Converter::new(&doc, opts)?.convert()?;

    match args.output {
        Some(path) => fs::write(path, alto).map_err(ConvertError::Io)?,
        None => print!("{alto}"),
    }
    Ok(())
}
