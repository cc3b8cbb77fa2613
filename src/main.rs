#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use std::sync::Arc;
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
use gunnery::{
    init_logging, AttackOutcome, Board, CannedCommentary, Coord, CommentaryFeed, CommentaryHandle,
    EventContext, EventKind, Game, GameStatus, TargetSelector, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Automated battleship opponent", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the targeting opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible game")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1500, help = "Commentary fetch timeout in ms")]
        commentary_timeout_ms: u64,
    },
    /// Run batch games of the opponent against random fleets and print
    /// shot-count statistics as JSON.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible runs")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            commentary_timeout_ms,
        } => play(seed, Duration::from_millis(commentary_timeout_ms)).await,
        Commands::Sim { games, seed } => sim(games, seed),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
async fn play(seed: Option<u64>, commentary_timeout: Duration) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::new();
    game.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let feed = CommentaryFeed::new(Arc::new(CannedCommentary), commentary_timeout);
    let mut pending = vec![feed.dispatch(EventKind::GameStart, EventContext::default())];

    println!("Fleets placed. Sink all five enemy ships before yours go down.");

    loop {
        println!("\nEnemy waters:");
        print_tracking(game.enemy_board());
        println!("\nYour fleet:");
        print_fleet(game.player_board());
        drain_commentary(&mut pending);

        // player's shot
        let at = prompt_coord()?;
        let outcome = match game.player_attack(at) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        report_player_shot(at, &outcome);
        pending.push(feed.dispatch(
            EventKind::from_player_outcome(&outcome),
            shot_context(at, &outcome),
        ));
        if game.status() == GameStatus::Won {
            break;
        }

        // opponent's shot
        match game.opponent_turn(&mut rng).map_err(|e| anyhow::anyhow!(e))? {
            Some(shot) => {
                report_opponent_shot(&shot.coord, &shot.outcome);
                pending.push(feed.dispatch(
                    EventKind::from_outcome(&shot.outcome),
                    shot_context(shot.coord, &shot.outcome),
                ));
            }
            None => {
                println!("The opponent has no cells left to attack.");
                break;
            }
        }
        if game.status() == GameStatus::Lost {
            break;
        }
    }

    drain_commentary(&mut pending);
    drop(pending);

    let final_event = match game.status() {
        GameStatus::Won => EventKind::Lose,
        _ => EventKind::Win,
    };
    let line = feed.dispatch(final_event, EventContext::default()).wait().await;
    println!("\nCommander: {}", line);
    match game.status() {
        GameStatus::Won => println!("You win! The enemy fleet is destroyed."),
        GameStatus::Lost => println!("You lose. Your fleet is at the bottom."),
        GameStatus::InProgress => println!("Game abandoned."),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn sim(games: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut shot_counts = Vec::with_capacity(games);

    for i in 0..games {
        let mut rng = make_rng(seed.map(|s| s.wrapping_add(i as u64)));
        let mut board = Board::new();
        board.auto_place(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        let mut selector = TargetSelector::new();

        let mut shots = 0usize;
        while !board.all_sunk() {
            match selector.fire(&mut board, &mut rng).map_err(|e| anyhow::anyhow!(e))? {
                Some(_) => shots += 1,
                None => break,
            }
        }
        shot_counts.push(shots);
    }

    let total: usize = shot_counts.iter().sum();
    let summary = json!({
        "games": games,
        "seed": seed,
        "shots": {
            "avg": total as f64 / games.max(1) as f64,
            "min": shot_counts.iter().min(),
            "max": shot_counts.iter().max(),
        },
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[cfg(feature = "std")]
fn shot_context(at: Coord, outcome: &AttackOutcome) -> EventContext {
    let ctx = EventContext::at(at);
    match outcome.sunk_ship() {
        Some(name) => ctx.ship(name),
        None => ctx,
    }
}

#[cfg(feature = "std")]
fn drain_commentary(pending: &mut Vec<CommentaryHandle>) {
    pending.retain_mut(|handle| match handle.try_take() {
        Some(line) => {
            println!("Commander: {}", line);
            false
        }
        None => true,
    });
}

#[cfg(feature = "std")]
fn report_player_shot(at: Coord, outcome: &AttackOutcome) {
    match outcome {
        AttackOutcome::Hit => println!("Your shot at {} is a hit!", at),
        AttackOutcome::Miss => println!("Your shot at {} splashes into empty sea.", at),
        AttackOutcome::Sunk(name) => println!("Your shot at {} sinks the enemy {}!", at, name),
    }
}

#[cfg(feature = "std")]
fn report_opponent_shot(at: &Coord, outcome: &AttackOutcome) {
    match outcome {
        AttackOutcome::Hit => println!("Enemy fire at {} hits your fleet.", at),
        AttackOutcome::Miss => println!("Enemy fire at {} misses.", at),
        AttackOutcome::Sunk(name) => println!("Enemy fire at {} sinks your {}!", at, name),
    }
}

#[cfg(feature = "std")]
fn prompt_coord() -> anyhow::Result<Coord> {
    loop {
        print!("Your shot (e.g. C7): ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        match parse_coord(line.trim()) {
            Some(at) => return Ok(at),
            None => println!("Invalid coordinate, use a column letter and a row number."),
        }
    }
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    let at = Coord::new(row - 1, col);
    at.in_bounds().then_some(at)
}

#[cfg(feature = "std")]
fn print_fleet(board: &Board) {
    print_grid(board, true);
}

#[cfg(feature = "std")]
fn print_tracking(board: &Board) {
    print_grid(board, false);
}

#[cfg(feature = "std")]
fn print_grid(board: &Board, reveal: bool) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let at = Coord::new(r, c);
            let ch = if board.hits().contains(at) {
                'X'
            } else if board.misses().contains(at) {
                'o'
            } else if reveal && board.ship_map().contains(at) {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}
