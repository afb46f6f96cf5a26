//! Quantum Tic-Tac-Toe in the terminal
//!
//! Thin front end over the game engine: forwards `row col` move requests
//! from stdin, prints the superposed grid each turn, then runs the
//! wavefunction collapse and reports the verdict. All rule logic lives in
//! the engine.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use qgame::{Board, GameRules, MoveOutcome, Player};

#[derive(Parser)]
#[command(name = "qgame")]
#[command(version, about = "Quantum Tic-Tac-Toe in the terminal", long_about = None)]
struct Cli {
    /// Rule preset
    #[arg(long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Number of turns before the collapse (overrides the preset)
    #[arg(long)]
    turns: Option<usize>,

    /// Turns a cell stays frozen after being played (overrides the preset)
    #[arg(long)]
    freeze: Option<usize>,

    /// Starting player
    #[arg(long, value_enum, default_value = "x")]
    start: Start,

    /// Seed for the collapse draws (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// 14 turns, cells freeze for 1 turn
    Standard,
    /// Like standard, tuned with --turns and --freeze
    Custom,
    /// Game ends once every cell has been played
    Hardcore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Start {
    X,
    O,
}

impl Start {
    fn player(self) -> Player {
        match self {
            Start::X => Player::X,
            Start::O => Player::O,
        }
    }
}

fn resolve_rules(cli: &Cli) -> GameRules {
    let mut rules = match cli.mode {
        Mode::Standard | Mode::Custom => GameRules::standard(),
        Mode::Hardcore => GameRules::hardcore(),
    };
    rules = rules.with_starting_player(cli.start.player());
    if let Some(turns) = cli.turns {
        rules = rules.with_max_turns(turns);
    }
    if let Some(freeze) = cli.freeze {
        rules = rules.with_freeze_window(freeze);
    }
    rules
}

fn render(board: &Board) {
    for row in 0..3 {
        let line: Vec<String> = (0..3)
            .map(|col| format!("{:<22}", board.cells()[row * 3 + col].to_string()))
            .collect();
        println!("{}", line.join(" | "));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rules = resolve_rules(&cli);
    let mut board = Board::new(rules)?;

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    while !board.is_over() {
        println!();
        render(&board);
        if !board.rules().hardcore {
            println!(
                "Progress: {}/{}",
                board.moves_played(),
                board.rules().max_turns
            );
        }
        print!("Turn: {} > ", board.active_player());
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            println!();
            println!("game abandoned");
            return Ok(());
        };
        let line = line?;

        let mut fields = line.split_whitespace();
        let coords = (
            fields.next().map(str::parse::<usize>),
            fields.next().map(str::parse::<usize>),
        );
        let (Some(Ok(row)), Some(Ok(col))) = coords else {
            println!("enter a move as: row col (each 0-2)");
            continue;
        };

        match board.submit_move(row, col) {
            Ok(MoveOutcome::Accepted { .. }) => {}
            Ok(MoveOutcome::Rejected { reason }) => println!("move rejected: {reason}"),
            Err(err @ qgame::Error::InvalidCoordinate { .. }) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }

    println!();
    println!("Wave Function Collapse");
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let verdict = board.collapse_all(&mut rng)?;

    render(&board);
    println!("{verdict}");
    Ok(())
}
