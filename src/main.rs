use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_engine::{lines, Piece, Searcher, StandardBoard, WIDTH};

mod display;

fn main() -> Result<()> {
    let mut board = StandardBoard::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut engine_players = (false, false);

    // choose engine control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 engine controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => {
                engine_players.0 = true;
                break;
            }
            Some('n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose engine control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 engine controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => {
                engine_players.1 = true;
                break;
            }
            Some('n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    let mut current = Piece::PlayerOne;
    loop {
        display::draw(&board).expect("Failed to draw board!");

        let engine_turn = match current {
            Piece::PlayerOne => engine_players.0,
            Piece::PlayerTwo => engine_players.1,
        };

        let column =
            // engine player
            if engine_turn {
                println!("Engine is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                // slow down play if both players are engines
                if engine_players == (true, true) {
                    std::thread::sleep(std::time::Duration::new(1, 0));
                }

                let column = Searcher::new(current).choose_move(&board);
                println!("Engine plays column {}", column + 1);
                column

            // human player
            } else {
                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!("Invalid move, columns must be between 1 and {}", WIDTH);
                        continue;
                    }
                };
                if !board.playable(column) {
                    println!("Invalid move, column {} full", column + 1);
                    continue;
                }
                column
            };

        let row = board
            .landing_row(column)
            .expect("playable column has an open row");
        board.place(row, column, current);

        // end states
        if lines::has_four_in_a_row(&board, current) {
            display::draw(&board).expect("Failed to draw board!");
            let player = match current {
                Piece::PlayerOne => 1,
                Piece::PlayerTwo => 2,
            };
            println!("Player {} wins!", player);
            break;
        }
        if board.playable_columns().is_empty() {
            display::draw(&board).expect("Failed to draw board!");
            println!("Draw!");
            break;
        }

        current = current.opponent();
    }
    Ok(())
}
