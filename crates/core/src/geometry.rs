//! Square -> grid cell and square -> color mapping.
//!
//! Grid cells are `(x, y)` with `(0, 0)` at the top-left of the rendered
//! board. Unflipped, rank 8 is the top row and file a the left column.

use chess_svg_types::Rgb;
use shakmaty::{File, Rank, Square};

use crate::config::RenderConfig;

/// Grid cell of a square on the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    /// Top-left corner of the cell in board units.
    pub fn origin(&self, square_width: u32, square_height: u32) -> (u32, u32) {
        (self.x as u32 * square_width, self.y as u32 * square_height)
    }
}

pub fn cell_for_square(sq: Square, flip: bool) -> Cell {
    let file = sq.file() as u8;
    let rank = sq.rank() as u8;
    if flip {
        Cell { x: 7 - file, y: rank }
    } else {
        Cell { x: file, y: 7 - rank }
    }
}

fn is_dark(sq: Square) -> bool {
    (sq.file() as u8 + sq.rank() as u8) % 2 == 0
}

/// Background fill: even (file + rank) is dark, odd is light.
pub fn square_color(sq: Square, config: &RenderConfig) -> Rgb {
    if is_dark(sq) {
        config.dark
    } else {
        config.light
    }
}

/// Label color: always the opposite of the square's fill.
pub fn text_color(sq: Square, config: &RenderConfig) -> Rgb {
    if is_dark(sq) {
        config.light
    } else {
        config.dark
    }
}

/// Rank digits go on the visual left column.
pub fn is_rank_label_square(sq: Square, flip: bool) -> bool {
    sq.file() == if flip { File::H } else { File::A }
}

/// File letters go on the visual bottom row.
pub fn is_file_label_square(sq: Square, flip: bool) -> bool {
    sq.rank() == if flip { Rank::Eighth } else { Rank::First }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unflipped_puts_a8_top_left_and_h1_bottom_right() {
        assert_eq!(cell_for_square(Square::A8, false), Cell { x: 0, y: 0 });
        assert_eq!(cell_for_square(Square::H1, false), Cell { x: 7, y: 7 });
        assert_eq!(cell_for_square(Square::A1, false), Cell { x: 0, y: 7 });
        assert_eq!(cell_for_square(Square::E4, false), Cell { x: 4, y: 4 });
    }

    #[test]
    fn flipped_rotates_180_degrees() {
        assert_eq!(cell_for_square(Square::H1, true), Cell { x: 0, y: 0 });
        assert_eq!(cell_for_square(Square::A8, true), Cell { x: 7, y: 7 });
        assert_eq!(cell_for_square(Square::A1, true), Cell { x: 7, y: 0 });
        assert_eq!(cell_for_square(Square::E4, true), Cell { x: 3, y: 3 });
    }

    #[test]
    fn every_square_maps_to_a_distinct_cell() {
        for flip in [false, true] {
            let mut seen = [false; 64];
            for sq in Square::ALL {
                let c = cell_for_square(sq, flip);
                let i = c.y as usize * 8 + c.x as usize;
                assert!(!seen[i], "cell {:?} reused", c);
                seen[i] = true;
            }
        }
    }

    #[test]
    fn parity_decides_fill_and_text_is_opposite() {
        let cfg = RenderConfig::default();
        assert_eq!(square_color(Square::A1, &cfg), cfg.dark);
        assert_eq!(square_color(Square::B1, &cfg), cfg.light);
        assert_eq!(square_color(Square::H1, &cfg), cfg.light);
        assert_eq!(square_color(Square::H8, &cfg), cfg.dark);
        for sq in Square::ALL {
            assert_ne!(square_color(sq, &cfg), text_color(sq, &cfg));
        }
    }

    #[test]
    fn label_squares_follow_visual_edges() {
        let rank_labels = Square::ALL
            .iter()
            .filter(|&&sq| is_rank_label_square(sq, false))
            .count();
        assert_eq!(rank_labels, 8);
        assert!(is_rank_label_square(Square::A5, false));
        assert!(is_rank_label_square(Square::H5, true));
        assert!(is_file_label_square(Square::C1, false));
        assert!(is_file_label_square(Square::C8, true));
        assert!(!is_file_label_square(Square::C1, true));
    }

    #[test]
    fn cell_origin_scales_by_square_size() {
        let c = Cell { x: 3, y: 5 };
        assert_eq!(c.origin(45, 45), (135, 225));
        assert_eq!(c.origin(10, 20), (30, 100));
    }
}
