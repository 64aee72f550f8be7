use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use broadside::{
    init_logging, CellStatus, Coordinate, GameEngine, GameSession, GameStatus, Orientation,
    SaveStore, ShotResult, BOARD_SIZE, FLEET,
};

#[derive(Parser)]
#[command(author, version, about = "Naval combat against a hunt/target computer opponent")]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding the saved game
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,
    /// Place your fleet at random instead of prompting per ship
    #[arg(long)]
    auto_place: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let store = SaveStore::new(&cli.save_dir);
    let session = GameSession::new(GameEngine::with_seed(store, cli.seed));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let resumed = session.has_saved_game()
        && prompt_yes_no(&mut input, "Found a saved game. Resume it?")?
        && session.load_saved_game();

    if resumed {
        let nickname = session.with_engine(|e| e.human().nickname().to_string());
        println!("Resumed game for {}.", nickname);
    } else {
        // a declined or unusable save must not be resumable later
        session.delete_saved_game();
        let nickname = prompt(&mut input, "Enter your nickname: ")?;
        session
            .start_new_game(nickname.trim())
            .context("could not start a new game")?;
        if cli.auto_place {
            session
                .with_engine(|e| e.place_random_human_fleet())
                .context("could not place fleet")?;
        } else {
            place_fleet(&session, &mut input)?;
        }
        session.start_battle();
    }

    run_game(&session, &mut input)?;

    match session.status() {
        GameStatus::PlayerWon => println!("All enemy ships sunk. You win!"),
        GameStatus::ComputerWon => println!("Your fleet is gone. The computer wins."),
        _ => {}
    }
    Ok(())
}

/// Prompt for each ship of the fleet in turn until it is legally placed.
fn place_fleet(session: &GameSession, input: &mut impl BufRead) -> anyhow::Result<()> {
    println!("Place your fleet. Enter: <x> <y> <h|v> (0-based, top-left origin).");
    for kind in FLEET {
        loop {
            let line = prompt(
                input,
                &format!("{} (size {}): ", kind.name(), kind.size()),
            )?;
            let Some((coord, orientation)) = parse_placement(&line) else {
                println!("Could not parse that. Example: 3 7 h");
                continue;
            };
            match session.place_human_ship(kind, coord, orientation) {
                Ok(()) => break,
                Err(e) => println!("Cannot place there: {}", e),
            }
        }
    }
    Ok(())
}

fn run_game(session: &GameSession, input: &mut impl BufRead) -> anyhow::Result<()> {
    while session.status() == GameStatus::Playing {
        if session.is_player_turn() {
            render(session, false);
            let line = prompt(input, "Your shot (<x> <y>): ")?;
            let Some(coord) = parse_coordinate(&line) else {
                println!("Could not parse that. Example: 4 2");
                continue;
            };
            match session.process_player_shot(coord) {
                ShotResult::Water => println!("Splash."),
                ShotResult::Hit => println!("Hit! Shoot again."),
                ShotResult::Sunk => println!("Ship sunk! Shoot again."),
                ShotResult::Invalid => println!("That shot is not allowed."),
            }
        } else {
            let result = session.process_computer_shot();
            if let Some(shot) = session.last_computer_shot() {
                match result {
                    ShotResult::Water => println!("Computer fires at {} and misses.", shot),
                    ShotResult::Hit => println!("Computer fires at {} and hits!", shot),
                    ShotResult::Sunk => println!("Computer fires at {} and sinks a ship!", shot),
                    ShotResult::Invalid => {}
                }
            }
        }
    }
    render(session, true);
    Ok(())
}

/// Print the human board and the tracking view of the computer board.
/// Unshot enemy ships stay hidden unless the game is over.
fn render(session: &GameSession, reveal: bool) {
    session.with_engine(|engine| {
        println!("\n      Your fleet            Enemy waters");
        println!("   0123456789           0123456789");
        for y in 0..BOARD_SIZE {
            let mut own = String::new();
            let mut enemy = String::new();
            for x in 0..BOARD_SIZE {
                let c = Coordinate::new(x, y);
                own.push(symbol(engine.human().board().status_at(c), true));
                enemy.push(symbol(engine.computer().board().status_at(c), reveal));
            }
            println!("{:>2} {}        {:>2} {}", y, own, y, enemy);
        }
        println!();
    });
}

fn symbol(status: Option<CellStatus>, show_ships: bool) -> char {
    match status {
        Some(CellStatus::Ship) if show_ships => 'S',
        Some(CellStatus::Hit) => 'x',
        Some(CellStatus::Miss) => 'o',
        Some(CellStatus::Sunk) => '#',
        _ => '.',
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line)
}

fn prompt_yes_no(input: &mut impl BufRead, message: &str) -> anyhow::Result<bool> {
    let line = prompt(input, &format!("{} [y/n] ", message))?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn parse_coordinate(line: &str) -> Option<Coordinate> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    Some(Coordinate::new(x, y))
}

fn parse_placement(line: &str) -> Option<(Coordinate, Orientation)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let orientation = match parts.next()? {
        "h" | "H" => Orientation::Horizontal,
        "v" | "V" => Orientation::Vertical,
        _ => return None,
    };
    Some((Coordinate::new(x, y), orientation))
}
