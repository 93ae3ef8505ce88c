//! Release Scout - newly printed high-rarity cards to Trello
//!
//! Searches YGOPRODeck for printings of the collector's subject, reconciles
//! them against the collection and proposes the result on the wants list.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use release_scout::{
    audit_rarities, discover, plan_wants, publish_wants, read_marker, write_marker, BoardState,
    ScoutLists, SubjectFilter,
};
use ygo_common::{RarityVocabulary, ReconcilePolicy, TrelloArgs, YgoProDeckClient};

/// Propose newly released cards as wants on the Trello tracking board
#[derive(Parser, Debug)]
#[command(name = "release_scout")]
#[command(version, about, long_about = None)]
struct Args {
    /// Monster race to scout for
    #[arg(long, default_value = "Dragon")]
    race: String,

    /// Name fragment that also counts as a match (defaults to the race)
    #[arg(long)]
    name_fragment: Option<String>,

    /// List the proposals are written to
    #[arg(long, default_value = "Wants Generated")]
    wants_list: String,

    /// List that holds the collection
    #[arg(long, default_value = "Current")]
    current_list: String,

    /// List of cards never to propose
    #[arg(long, default_value = "Exclusions")]
    exclusions_list: String,

    /// Rarity an upgrade must exceed whatever the owned rarity
    #[arg(long, default_value = "Secret Rare")]
    upgrade_floor: String,

    /// Owned rarity compared against its own rank only (repeatable)
    #[arg(long)]
    floor_exempt: Vec<String>,

    /// Tag wants never proposed before blue instead of purple
    #[arg(long, default_value_t = false)]
    highlight_fresh: bool,

    /// Keep earlier proposals and never propose them again
    #[arg(long, default_value_t = false)]
    skip_previously_proposed: bool,

    /// Only consider sets released since the last successful run
    #[arg(long, default_value_t = false)]
    since_last_run: bool,

    /// Last-run marker file
    #[arg(long, default_value = "LastQuery.txt")]
    last_run_file: PathBuf,

    /// List the rarities in a saved cardinfo.php dump and exit
    #[arg(long, value_name = "FILE")]
    audit_rarities: Option<PathBuf>,

    #[command(flatten)]
    trello: TrelloArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let vocabulary = RarityVocabulary::default();

    if let Some(dump) = &args.audit_rarities {
        match audit_rarities(dump, &vocabulary) {
            Ok(audit) => {
                for (rarity, code) in &audit.pairs {
                    println!("{rarity} {code}");
                }
            }
            Err(e) => {
                log::error!("Failed to audit {}: {}", dump.display(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Starting release_scout...");

    let since = if args.since_last_run {
        match read_marker(&args.last_run_file) {
            Ok(since) => since,
            Err(e) => {
                log::error!("Failed to read {}: {}", args.last_run_file.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let trello = args.trello.client();
    let lists = ScoutLists {
        board: &args.trello.board,
        wants: &args.wants_list,
        current: &args.current_list,
        exclusions: &args.exclusions_list,
    };
    let state = match BoardState::load(&trello, &lists, &vocabulary).await {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to read the board: {}", e);
            std::process::exit(1);
        }
    };

    let ygo = YgoProDeckClient::new();
    let known_sets = match ygo.list_known_sets().await {
        Ok(sets) => sets,
        Err(e) => {
            log::error!("Failed to load card sets: {}", e);
            std::process::exit(1);
        }
    };

    let filter = SubjectFilter::new(
        args.race.clone(),
        args.name_fragment.clone().unwrap_or_else(|| args.race.clone()),
    );
    let candidates = match discover(&ygo, &vocabulary, &filter).await {
        Ok(candidates) => candidates,
        Err(e) => {
            log::error!("Failed to search for new cards: {}", e);
            std::process::exit(1);
        }
    };

    let policy = ReconcilePolicy {
        upgrade_floor: args.upgrade_floor.clone(),
        floor_exempt: args.floor_exempt.iter().cloned().collect::<HashSet<_>>(),
        highlight_fresh: args.highlight_fresh,
        skip_previously_proposed: args.skip_previously_proposed,
    };
    let batch = match plan_wants(&state, candidates, &vocabulary, &known_sets, policy, since) {
        Ok(batch) => batch,
        Err(e) => {
            log::error!("Failed to reconcile new cards: {}", e);
            std::process::exit(1);
        }
    };

    if args.trello.dry_run {
        let colours = batch.colours();
        for listing in batch.prioritized() {
            match colours.get(&listing) {
                Some(colour) => log::info!("Would add card: {listing} ({colour})"),
                None => log::info!("Would add card: {listing}"),
            }
        }
        log::info!("Dry run: {} wants not published", batch.len());
        return;
    }

    let labels_needed = !batch.colours().is_empty();
    let labels = match args
        .trello
        .resolve_labels(&trello, &state.board_id, labels_needed)
        .await
    {
        Ok(labels) => labels,
        Err(e) => {
            log::error!("Failed to resolve label colours: {}", e);
            std::process::exit(1);
        }
    };

    match publish_wants(&trello, &state, &batch, &labels, args.skip_previously_proposed).await {
        Ok(created) => log::info!("release_scout finished: {created} wants on {}", args.wants_list),
        Err(e) => {
            log::error!("Failed to publish wants: {}", e);
            std::process::exit(1);
        }
    }

    if args.since_last_run {
        if let Err(e) = write_marker(&args.last_run_file, chrono::Local::now().date_naive()) {
            log::error!("Failed to write {}: {}", args.last_run_file.display(), e);
            std::process::exit(1);
        }
    }
}
