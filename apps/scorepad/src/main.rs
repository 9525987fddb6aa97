//! Wizard scorepad CLI.
//!
//! Every invocation loads the saved game from the data directory, applies one
//! command and writes the result back.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scorepad::domain::state::RuleFlags;
use scorepad::errors::ErrorCode;
use scorepad::render;
use scorepad::services::round_entry::{
    find_seat, submit_predictions, submit_results, RoundOrder, TrickEntry,
};
use scorepad::services::setup::validate_total_rounds;
use scorepad::telemetry::init_tracing;
use scorepad::{AppError, Config, FileStore, GameEngine, GameSetup, SetupPreferences};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "scorepad")]
#[command(about = "Score sheet for the card game Wizard")]
struct Cli {
    /// Directory holding the saved game (overrides SCOREPAD_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new game; without names the last used table is seated again
    New {
        /// Player names in seat order (3 to 6)
        names: Vec<String>,
        /// Play with the anniversary edition cloud card
        #[arg(long)]
        cloud: bool,
        /// Reserved rule variant, stored only
        #[arg(long)]
        not_equal: bool,
        /// Override the number of rounds
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Change the number of rounds of the running game
    Rounds { rounds: u32 },
    /// Enter bids for the current round, starting with the opening player
    Predict {
        #[arg(required = true)]
        values: Vec<u32>,
    },
    /// Enter tricks taken for the current round, starting with the opening player
    Result {
        #[arg(required = true)]
        values: Vec<u32>,
        /// Player who played the cloud card
        #[arg(long)]
        cloud: Option<String>,
    },
    /// Print the score sheet
    Show,
    /// Discard the saved game
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config
            .with_data_dir(cli.data_dir.clone())
            .with_verbose(cli.verbose),
        Err(e) => return report(&e),
    };
    init_tracing(&config.log);
    debug!(data_dir = %config.data_dir.display(), "Configuration loaded");

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &AppError) -> ExitCode {
    eprintln!("error [{}]: {}", e.code(), e.detail());
    ExitCode::from(e.exit_code())
}

fn run(command: Command, config: &Config) -> Result<(), AppError> {
    let store = FileStore::open(&config.data_dir)?;

    match command {
        Command::New {
            names,
            cloud,
            not_equal,
            rounds,
        } => {
            let mut prefs = SetupPreferences::load(&store);
            let names = if names.is_empty() {
                info!("No names given, reusing the last table");
                prefs.filled_names()
            } else {
                names
            };
            let mut engine = GameEngine::new(&store);
            let setup = GameSetup {
                names,
                rules: RuleFlags {
                    use_anniversary_rules: cloud,
                    use_not_equal: not_equal,
                },
                rounds,
            };
            let seated = setup.apply(&mut engine)?;
            prefs.remember(&seated, cloud);
            prefs.save(&store);

            println!(
                "New game: {} ({} rounds)",
                seated.join(", "),
                engine.state().total_rounds
            );
            println!(
                "Bids for round 1, in order: {}",
                render::order_names(engine.state()).join(", ")
            );
        }
        Command::Rounds { rounds } => {
            let mut engine = GameEngine::load(&store);
            let state = engine.state();
            if !state.game_started {
                return Err(AppError::invalid(
                    ErrorCode::GameNotStarted,
                    "No game has been configured",
                ));
            }
            let rounds = validate_total_rounds(state.player_count(), rounds)?;
            if rounds < state.current_round.saturating_sub(1) {
                return Err(AppError::invalid(
                    ErrorCode::RoundsOutOfRange,
                    format!(
                        "{} rounds have already been played",
                        state.current_round - 1
                    ),
                ));
            }
            engine.set_total_rounds(rounds);
            println!("Game now has {rounds} rounds");
        }
        Command::Predict { values } => {
            let mut engine = GameEngine::load(&store);
            submit_predictions(&mut engine, &values)?;
            println!(
                "Bids recorded for round {}. Tricks in order: {}",
                engine.state().current_round,
                render::order_names(engine.state()).join(", ")
            );
        }
        Command::Result { values, cloud } => {
            let mut engine = GameEngine::load(&store);
            let mut entries: Vec<TrickEntry> =
                values.iter().copied().map(TrickEntry::plain).collect();
            if let Some(name) = cloud {
                let seat = find_seat(engine.state(), &name)?;
                let order = RoundOrder::for_state(engine.state());
                if let Some(pos) = order.seats().position(|s| s == seat) {
                    if let Some(entry) = entries.get_mut(pos) {
                        entry.cloud = true;
                    }
                }
            }
            let outcome = submit_results(&mut engine, &entries)?;
            println!("{}", render::round_summary(engine.state(), &outcome));
            if outcome.game_over {
                print!("{}", render::scoreboard(engine.state()));
            }
        }
        Command::Show => {
            let engine = GameEngine::load(&store);
            print!("{}", render::scoreboard(engine.state()));
        }
        Command::Reset => {
            let mut engine = GameEngine::load(&store);
            engine.reset_game();
            println!("Game discarded");
        }
    }
    Ok(())
}
