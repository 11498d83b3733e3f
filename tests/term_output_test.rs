//! Terminal backend driven through the facade.

use chess_svg::chess::{Board, Square};
use chess_svg::term::{encode_full_into, piece_symbol, render_frame};
use chess_svg::types::{Rgb, DEFAULT_DARK};
use chess_svg::{flip, mark_squares};

#[test]
fn frame_matches_board_geometry() {
    let fb = render_frame(&Board::new(), &[]).unwrap();
    assert_eq!((fb.width(), fb.height()), (24, 8));
    let pieces = fb
        .cells()
        .iter()
        .filter(|c| "♚♛♜♝♞♟".contains(c.ch))
        .count();
    assert_eq!(pieces, 32);
}

#[test]
fn flipped_frame_has_black_at_the_bottom() {
    let fb = render_frame(&Board::new(), &[flip()]).unwrap();
    // h8 rook at the bottom-left, drawn in black.
    let cell = fb.get(1, 7).unwrap();
    assert_eq!(cell.ch, piece_symbol(chess_svg::chess::Role::Rook));
    assert_eq!(cell.style.fg, Rgb::new(0, 0, 0));
    assert_eq!(fb.get(0, 7).map(|c| c.ch), Some('8'));
    assert_eq!(fb.get(23, 7).map(|c| c.ch), Some('a'));
}

#[test]
fn marked_square_is_tinted() {
    let red = Rgb::new(255, 0, 0);
    let fb = render_frame(&Board::empty(), &[mark_squares(red, [Square::A1])]).unwrap();
    let bg = fb.get(1, 7).map(|c| c.style.bg).unwrap();
    assert_ne!(bg, DEFAULT_DARK);
    assert!(bg.r > DEFAULT_DARK.r);
}

#[test]
fn escape_stream_has_one_line_per_rank() {
    let fb = render_frame(&Board::new(), &[]).unwrap();
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("\r\n").count(), 8);
}
