use std::fmt;

use super::GameState;

/// Grid view of the board, rank 8 at the top, followed by the side to move.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} |", 8 - row)?;
            for cell in cells {
                let ch = cell.map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move())
    }
}
