//! Terminal front end: play against the oracle, browse tactical puzzles.
//!
//! All rules logic lives in `chess_core`; this binary is presentation
//! glue around `GameSession` and `PuzzleSession`.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::{resolve_san, Color, PieceKind, Position};
use game_session::{DrawReason, GameSession, MoveReply, SessionConfig, SessionOutcome};
use move_oracle::{Difficulty, GeminiOracle, MoveOracle, OfflineOracle};
use puzzles::{PuzzleSession, SolveStatus};

const PUZZLE_COOLDOWN: Duration = Duration::from_millis(1_200);

enum View {
    Play,
    Puzzles,
}

struct Cli {
    game: GameSession,
    puzzles: PuzzleSession,
    view: View,
    oracle: Box<dyn MoveOracle>,
    analyst: Option<GeminiOracle>,
    rng: StdRng,
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::default();

    let (oracle, analyst): (Box<dyn MoveOracle>, Option<GeminiOracle>) =
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => (
                Box::new(GeminiOracle::new(key.clone())?),
                Some(GeminiOracle::new(key)?),
            ),
            _ => {
                println!("No GEMINI_API_KEY set; the opponent plays random legal moves.");
                (Box::new(OfflineOracle), None)
            }
        };

    let mut cli = Cli {
        game: GameSession::new(&config),
        puzzles: PuzzleSession::builtin()?,
        view: View::Play,
        oracle,
        analyst,
        rng: StdRng::from_entropy(),
    };

    println!("oracle-chess. Type 'help' for commands.");
    print_board(cli.game.record().current());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "board" => match cli.view {
                View::Play => print_board(cli.game.record().current()),
                View::Puzzles => print_board(cli.puzzles.position()),
            },
            "fen" => match cli.view {
                View::Play => println!("{}", cli.game.fen()),
                View::Puzzles => println!("{}", cli.puzzles.fen()),
            },
            "moves" => print_ledger(&cli.game),
            "new" => {
                cli.game.reset();
                print_board(cli.game.record().current());
                oracle_moves_if_due(&mut cli);
            }
            "side" => match parts.next() {
                Some("white") => {
                    cli.game.reset_with_color(Color::White);
                    print_board(cli.game.record().current());
                }
                Some("black") => {
                    cli.game.reset_with_color(Color::Black);
                    print_board(cli.game.record().current());
                    oracle_moves_if_due(&mut cli);
                }
                _ => println!("usage: side white|black"),
            },
            "level" => match parts.next().map(str::parse::<Difficulty>) {
                Some(Ok(level)) => {
                    cli.game.set_difficulty(level);
                    println!("Difficulty set to {level}.");
                }
                _ => println!("usage: level novice|casual|intermediate|advanced|expert"),
            },
            "play" => {
                cli.view = View::Play;
                print_board(cli.game.record().current());
            }
            "puzzles" => {
                cli.view = View::Puzzles;
                print_puzzle(&cli.puzzles);
            }
            "next" | "prev" if matches!(cli.view, View::Puzzles) => {
                if command == "next" {
                    cli.puzzles.next();
                } else {
                    cli.puzzles.prev();
                }
                print_puzzle(&cli.puzzles);
            }
            "analyze" => match &cli.analyst {
                Some(analyst) => match analyst.analyze_position(&cli.game.fen()) {
                    Ok(text) => println!("Analysis: {text}"),
                    Err(e) => println!("Analysis unavailable: {e}"),
                },
                None => println!("Analysis needs a configured GEMINI_API_KEY."),
            },
            token => match cli.view {
                View::Play => handle_game_move(&mut cli, token),
                View::Puzzles => handle_puzzle_move(&mut cli, token),
            },
        }
        io::stdout().flush().ok();
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  <move>            play a move (SAN like Nf3, or coordinates like e2e4)");
    println!("  board / fen       show the current position");
    println!("  moves             show the move ledger");
    println!("  new               start a fresh game");
    println!("  side white|black  choose your side (restarts the game)");
    println!("  level <name>      novice, casual, intermediate, advanced, expert");
    println!("  play / puzzles    switch between the game and the puzzle catalog");
    println!("  next / prev       navigate puzzles");
    println!("  analyze           one-line oracle commentary on the position");
    println!("  quit              leave");
}

/// Accept a move as SAN (`Nf3`) or a coordinate pair (`e2e4`, `e7e8q`).
fn read_move(pos: &Position, token: &str) -> Option<(u8, u8, Option<PieceKind>)> {
    let mv = resolve_san(pos, token)?;
    Some((mv.from, mv.to, mv.promo))
}

fn handle_game_move(cli: &mut Cli, token: &str) {
    if cli.game.outcome().is_over() {
        println!("The game is over; type 'new' for a rematch.");
        return;
    }

    let parsed = read_move(cli.game.record().current(), token);
    let Some((from, to, promo)) = parsed else {
        println!("'{token}' is not a legal move here (try 'help').");
        return;
    };

    let reply = match cli.game.try_move(from, to) {
        Ok(MoveReply::PromotionPending) => {
            let kind = promo.unwrap_or_else(|| prompt_promotion_piece());
            cli.game.promote(kind)
        }
        other => other,
    };

    match reply {
        Ok(MoveReply::Played(san)) => {
            println!("You played {san}.");
            print_board(cli.game.record().current());
            report_outcome(&cli.game);
            oracle_moves_if_due(cli);
        }
        Ok(MoveReply::Ignored) => println!("Not your move right now."),
        Ok(_) => {}
        Err(e) => println!("Rejected: {e}"),
    }
}

fn oracle_moves_if_due(cli: &mut Cli) {
    if cli.game.is_player_turn() || cli.game.outcome().is_over() {
        return;
    }

    println!("The oracle is thinking...");
    let policy = cli.game.think_policy();
    let start = Instant::now();
    let san = cli.game.oracle_turn(cli.oracle.as_mut(), &mut cli.rng);

    // Hold the reply until the minimum visible delay has passed.
    thread::sleep(policy.residual_wait(start.elapsed()));

    match san {
        Some(san) => {
            println!("Oracle plays {san}.");
            print_board(cli.game.record().current());
            report_outcome(&cli.game);
        }
        None => println!("The oracle has no move."),
    }
}

fn handle_puzzle_move(cli: &mut Cli, token: &str) {
    let parsed = read_move(cli.puzzles.position(), token);
    let Some((from, to, _)) = parsed else {
        println!("'{token}' is not a legal move here.");
        return;
    };

    match cli.puzzles.submit(from, to) {
        Ok(SolveStatus::Correct) => {
            print_board(cli.puzzles.position());
            println!("Correct! Well seen. Type 'next' for another puzzle.");
        }
        Ok(SolveStatus::Incorrect) => {
            println!("Not the best move. Try again.");
            thread::sleep(PUZZLE_COOLDOWN);
            cli.puzzles.clear_verdict();
        }
        Ok(SolveStatus::Solving) => {}
        Err(e) => println!("Rejected: {e}"),
    }
}

fn prompt_promotion_piece() -> PieceKind {
    println!("Promote to [q]ueen, [r]ook, [b]ishop or k[n]ight:");
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return PieceKind::Queen;
    }
    line.trim()
        .chars()
        .next()
        .and_then(PieceKind::from_promo_char)
        .unwrap_or(PieceKind::Queen)
}

fn print_board(pos: &Position) {
    for rank in (0..8i8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8i8 {
            let sq = (rank * 8 + file) as u8;
            match pos.piece_at(sq) {
                Some(piece) => print!(" {}", piece.fen_char()),
                None => print!(" ."),
            }
        }
        println!();
    }
    println!("   a b c d e f g h");
    println!(
        "{} to move.",
        match pos.side_to_move {
            Color::White => "White",
            Color::Black => "Black",
        }
    );
}

fn print_ledger(game: &GameSession) {
    let rows = game.ledger();
    if rows.is_empty() {
        println!("No moves yet.");
        return;
    }
    for row in rows {
        match row.black {
            Some(black) => println!("{:>3}. {:8} {}", row.num, row.white, black),
            None => println!("{:>3}. {}", row.num, row.white),
        }
    }
}

fn report_outcome(game: &GameSession) {
    match game.outcome() {
        SessionOutcome::InProgress => {}
        SessionOutcome::WhiteWins => println!("Checkmate. White wins."),
        SessionOutcome::BlackWins => println!("Checkmate. Black wins."),
        SessionOutcome::Draw(reason) => {
            let text = match reason {
                DrawReason::Stalemate => "stalemate",
                DrawReason::InsufficientMaterial => "insufficient material",
                DrawReason::FiftyMoves => "fifty-move rule",
                DrawReason::Repetition => "threefold repetition",
            };
            println!("Draw by {text}.");
        }
    }
}

fn print_puzzle(puzzles: &PuzzleSession) {
    let puzzle = puzzles.puzzle();
    println!(
        "Puzzle {}/{} [{}]: {}",
        puzzles.index() + 1,
        puzzles.len(),
        puzzle.difficulty,
        puzzle.description
    );
    print_board(puzzles.position());
}
