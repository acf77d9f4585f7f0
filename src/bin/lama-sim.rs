//! Lama simulator CLI - plays headless rounds with a random legal-move policy.
//!
//! Stands in for an interactive table: it deals, asks the engine for legal
//! actions, applies one, and reacts to the events that come back.

use clap::Parser;
use lama::{GameError, GameResult, GameRng, GameState, LamaGame, LamaGameBuilder, PlayerId, RulesEngine};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "lama-sim")]
#[command(about = "Play random Lama rounds and summarise the results")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value_t = 100)]
    games: u32,

    /// Seats at the table
    #[arg(short, long, default_value_t = 3)]
    players: usize,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 3)]
    hand_size: usize,

    /// Copies of every rank in the deck
    #[arg(long, default_value_t = 6)]
    copies: usize,

    /// Base seed; round N uses seed + N
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Give up on a round after this many turns
    #[arg(long, default_value_t = 1000)]
    max_turns: u32,

    /// Start every round from the fixed three-player reference table
    #[arg(long)]
    reference: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// How a single round ended.
enum Outcome {
    Won { winner: PlayerId, turns: u32 },
    Stalled { turns: u32 },
    TurnLimit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let builder = LamaGameBuilder::new()
        .player_count(args.players)
        .hand_size(args.hand_size)
        .copies_per_rank(args.copies);

    let player_count = if args.reference { 3 } else { args.players };
    let mut wins = vec![0u32; player_count];
    let mut stalls = 0u32;
    let mut timeouts = 0u32;
    let mut total_turns = 0u64;

    let mut policy_rng = GameRng::new(args.seed).for_context("policy");
    let start = Instant::now();

    for round in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(round));
        let (game, state) = if args.reference {
            builder.clone().reference_table(seed)
        } else {
            builder.clone().build(seed)?
        };

        match play_round(&game, state, &mut policy_rng.fork(), args.max_turns)? {
            Outcome::Won { winner, turns } => {
                info!(round, %winner, turns, "round won");
                wins[winner.index()] += 1;
                total_turns += u64::from(turns);
            }
            Outcome::Stalled { turns } => {
                info!(round, turns, "round stalled");
                stalls += 1;
                total_turns += u64::from(turns);
            }
            Outcome::TurnLimit => {
                warn!(round, max_turns = args.max_turns, "round hit the turn limit");
                timeouts += 1;
            }
        }
    }

    print_summary(&wins, stalls, timeouts, total_turns, start.elapsed());
    Ok(())
}

fn play_round(
    game: &LamaGame,
    mut state: GameState,
    rng: &mut GameRng,
    max_turns: u32,
) -> Result<Outcome, GameError> {
    for turn in 1..=max_turns {
        let player = state.current_player();
        let actions = game.legal_actions(&state, player);

        let Some(&action) = rng.choose(&actions) else {
            return Ok(Outcome::Stalled { turns: turn - 1 });
        };

        let transition = game.apply_action(&state, player, &action)?;
        for event in &transition.events {
            debug!(turn, %event);
        }

        if let Some(winner) = transition.winner() {
            return Ok(Outcome::Won { winner, turns: turn });
        }
        state = transition.state;

        if let Some(GameResult::Stalled) = game.is_terminal(&state) {
            return Ok(Outcome::Stalled { turns: turn });
        }
    }

    Ok(Outcome::TurnLimit)
}

fn print_summary(
    wins: &[u32],
    stalls: u32,
    timeouts: u32,
    total_turns: u64,
    elapsed: std::time::Duration,
) {
    let finished: u32 = wins.iter().sum::<u32>() + stalls;
    let played = finished + timeouts;

    println!("=== Lama simulation ===");
    println!("Rounds:      {}", played);
    println!("Elapsed:     {:.2?}", elapsed);
    if finished > 0 {
        println!("Avg turns:   {:.1}", total_turns as f64 / f64::from(finished));
    }
    println!("Stalled:     {}", stalls);
    println!("Turn limit:  {}", timeouts);

    println!("\n=== Wins by seat ===");
    for (seat, count) in wins.iter().enumerate() {
        let share = if played > 0 { 100.0 * f64::from(*count) / f64::from(played) } else { 0.0 };
        println!("Player {}: {:>5} ({:.1}%)", seat, count, share);
    }
}
