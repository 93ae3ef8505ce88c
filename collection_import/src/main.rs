//! Collection Import - Yu-Gi-Oh! collection to Trello
//!
//! Reads a collection export and replaces the board's collection list with
//! one card per owned printing.

use std::path::PathBuf;

use clap::Parser;
use collection_import::{import_file, sync_collection, ExportLayout, ImportOptions, SyncTarget};
use ygo_common::{RarityVocabulary, TrelloArgs};

/// Sync an exported collection to the Trello tracking board
#[derive(Parser, Debug)]
#[command(name = "collection_import")]
#[command(version, about, long_about = None)]
struct Args {
    /// Collection export to import
    #[arg(default_value = "all.csv")]
    file: PathBuf,

    /// Export layout (detected from the file extension when omitted)
    #[arg(long, value_enum)]
    layout: Option<ExportLayout>,

    /// List that holds the collection
    #[arg(long, default_value = "Current")]
    list: String,

    /// Add one card per owned copy instead of one per card name
    #[arg(long, default_value_t = false)]
    allow_repeats: bool,

    /// Lines at the top of the export that are not card rows
    #[arg(long, default_value_t = 2)]
    header_lines: usize,

    #[command(flatten)]
    trello: TrelloArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let layout = args
        .layout
        .unwrap_or_else(|| ExportLayout::from_path(&args.file));
    let options = ImportOptions {
        allow_repeats: args.allow_repeats,
        header_lines: args.header_lines,
    };

    log::info!("Starting collection_import...");

    // Read everything before touching the board
    let vocabulary = RarityVocabulary::default();
    let summary = match import_file(&args.file, layout, &options, &vocabulary) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Failed to read {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };
    let cards = summary.sorted_listings();

    if args.trello.dry_run {
        for card in &cards {
            log::info!("Would add card: {card}");
        }
        log::info!("Dry run: {} cards not synced", cards.len());
        return;
    }

    let client = args.trello.client();
    let target = SyncTarget {
        board: &args.trello.board,
        list: &args.list,
    };
    match sync_collection(&client, &target, &cards).await {
        Ok(created) => log::info!("collection_import finished: {created} cards on {}", args.list),
        Err(e) => {
            log::error!("Failed to sync collection: {}", e);
            std::process::exit(1);
        }
    }
}
