//! Replays a recorded move stream and prints the final board and outcome.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use quince_chess::game_state::chess_types::TurnState;
use quince_chess::game_state::game_history::Game;
use quince_chess::utils::event_log::{EventLog, Verbosity};
use quince_chess::utils::pgn::load_pgn;
use quince_chess::utils::render_position::render_position;

fn main() {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: replay <move-stream file>");
        process::exit(2);
    };

    let mut log = match EventLog::open(Path::new("replay.log"), Verbosity::Verbose) {
        Ok(log) => log,
        Err(err) => {
            eprintln!("cannot open replay.log: {err}");
            process::exit(1);
        }
    };
    let _ = log.log(Verbosity::Log, "starting session");

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            let _ = log.log(Verbosity::Error, &format!("cannot read {path}: {err}"));
            eprintln!("cannot read {path}: {err}");
            process::exit(1);
        }
    };

    let mut game = Game::new();
    if let Err(err) = load_pgn(&mut game, &text) {
        let _ = log.log(Verbosity::Error, &format!("stream rejected: {err}"));
        eprintln!("stream rejected after {} half-moves: {err}", game.halfmove());
        process::exit(1);
    }

    let _ = log.log(
        Verbosity::Verbose,
        &format!("replayed {} half-moves", game.halfmove()),
    );

    println!("{}", render_position(game.current()));
    println!("{}", outcome_line(game.current().turn));
}

fn outcome_line(turn: TurnState) -> &'static str {
    match turn {
        TurnState::LightWon => "White has won the game!",
        TurnState::DarkWon => "Black has won the game!",
        TurnState::Drawn => "It's a draw!",
        _ => "Game in progress.",
    }
}
