use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{Board, Piece};

/// Draws the grid to the terminal, one styled tile per slot
pub fn draw<const W: usize, const H: usize>(board: &Board<W, H>) -> Result<()> {
    let mut stdout = stdout();

    let columns: String = (1..=W).map(|column| column.to_string()).collect();
    stdout.queue(PrintStyledContent(style(columns + "\n")))?;

    for row in 0..H {
        for column in 0..W {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column) {
                        Some(Piece::PlayerOne) => Color::Red,
                        Some(Piece::PlayerTwo) => Color::Yellow,
                        None => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
