//! Board encoder - drives a [`Format`] through one full board render.

use shakmaty::{Board, Square};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{resolve, RenderOption, RenderSettings};
use crate::format::{Format, FormatError, Label};
use crate::geometry::{
    cell_for_square, is_file_label_square, is_rank_label_square, square_color, text_color,
};

/// Error returned by [`Encoder::encode`].
///
/// Output already written before the failure stays in the stream.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to init output format: {0}")]
    Init(#[source] FormatError),
    #[error("failed to draw square {square}: {source}")]
    Draw {
        square: Square,
        #[source]
        source: FormatError,
    },
    #[error("failed to finish output: {0}")]
    Finish(#[source] FormatError),
}

/// Encodes boards with one resolved set of render settings.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    settings: RenderSettings,
}

impl Encoder {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn from_options(options: &[RenderOption]) -> Self {
        Self::new(resolve(options))
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Draw `board` into `format`.
    ///
    /// Squares are visited in ascending index order (a1, b1, ..., h8), so
    /// equal inputs always produce equal output.
    pub fn encode<F: Format>(&self, board: &Board, mut format: F) -> Result<(), EncodeError> {
        let cfg = &self.settings.config;
        let (width, height) = cfg.board_size();
        debug!(
            width,
            height,
            flip = cfg.flip,
            marks = self.settings.marks.len(),
            "encoding board"
        );

        format.init(width, height).map_err(EncodeError::Init)?;

        let mut pieces = 0usize;
        for sq in Square::ALL {
            let drew_piece = self
                .encode_square(board, sq, &mut format)
                .map_err(|source| EncodeError::Draw { square: sq, source })?;
            if drew_piece {
                pieces += 1;
            }
        }

        format.finish().map_err(EncodeError::Finish)?;
        debug!(pieces, "board encoded");
        Ok(())
    }

    fn encode_square<F: Format>(
        &self,
        board: &Board,
        sq: Square,
        format: &mut F,
    ) -> Result<bool, FormatError> {
        let cfg = &self.settings.config;
        let cell = cell_for_square(sq, cfg.flip);

        format.draw_square(cell.x, cell.y, square_color(sq, cfg))?;

        if let Some(mark) = self.settings.marks.get(sq) {
            format.draw_mark(cell.x, cell.y, mark)?;
        }

        let piece = board.piece_at(sq);
        if let Some(piece) = piece {
            trace!(square = %sq, ?piece, "drawing piece");
            format.draw_piece(cell.x, cell.y, piece)?;
        }

        let txt = text_color(sq, cfg);
        if is_rank_label_square(sq, cfg.flip) {
            format.draw_label(cell.x, cell.y, Label::Rank(sq.rank().char()), txt)?;
        }
        if is_file_label_square(sq, cfg.flip) {
            format.draw_label(cell.x, cell.y, Label::File(sq.file().char()), txt)?;
        }

        Ok(piece.is_some())
    }
}

/// Resolve `options` and encode `board` into `format` in one call.
pub fn encode<F: Format>(
    board: &Board,
    format: F,
    options: &[RenderOption],
) -> Result<(), EncodeError> {
    Encoder::from_options(options).encode(board, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{flip, mark_squares, square_colors, square_size};
    use chess_svg_types::{Rgb, DEFAULT_DARK, DEFAULT_LIGHT};
    use shakmaty::{Color, Piece, Role};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Init(u32, u32),
        Square(u8, u8, Rgb),
        Mark(u8, u8, Rgb),
        Piece(u8, u8, Piece),
        Label(u8, u8, Label, Rgb),
        Finish,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_after: Option<usize>,
    }

    impl Recorder {
        fn push(&mut self, call: Call) -> Result<(), FormatError> {
            if self.fail_after == Some(self.calls.len()) {
                return Err(FormatError::Backend("boom".into()));
            }
            self.calls.push(call);
            Ok(())
        }
    }

    impl Format for Recorder {
        fn init(&mut self, width: u32, height: u32) -> Result<(), FormatError> {
            self.push(Call::Init(width, height))
        }
        fn draw_square(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
            self.push(Call::Square(x, y, color))
        }
        fn draw_mark(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), FormatError> {
            self.push(Call::Mark(x, y, color))
        }
        fn draw_piece(&mut self, x: u8, y: u8, piece: Piece) -> Result<(), FormatError> {
            self.push(Call::Piece(x, y, piece))
        }
        fn draw_label(&mut self, x: u8, y: u8, label: Label, color: Rgb) -> Result<(), FormatError> {
            self.push(Call::Label(x, y, label, color))
        }
        fn finish(&mut self) -> Result<(), FormatError> {
            self.push(Call::Finish)
        }
    }

    fn record(board: &Board, options: &[RenderOption]) -> Vec<Call> {
        let mut rec = Recorder::default();
        encode(board, &mut rec, options).unwrap();
        rec.calls
    }

    #[test]
    fn empty_board_draws_64_squares_16_labels_no_pieces() {
        let calls = record(&Board::empty(), &[]);
        assert_eq!(calls.first(), Some(&Call::Init(360, 360)));
        assert_eq!(calls.last(), Some(&Call::Finish));

        let squares = calls.iter().filter(|c| matches!(c, Call::Square(..))).count();
        let labels = calls.iter().filter(|c| matches!(c, Call::Label(..))).count();
        let pieces = calls.iter().filter(|c| matches!(c, Call::Piece(..))).count();
        let marks = calls.iter().filter(|c| matches!(c, Call::Mark(..))).count();
        assert_eq!((squares, labels, pieces, marks), (64, 16, 0, 0));

        let dark = calls
            .iter()
            .filter(|c| matches!(c, Call::Square(_, _, col) if *col == DEFAULT_DARK))
            .count();
        assert_eq!(dark, 32);
    }

    #[test]
    fn first_square_is_a1_with_both_labels() {
        let calls = record(&Board::empty(), &[]);
        assert_eq!(calls[1], Call::Square(0, 7, DEFAULT_DARK));
        assert_eq!(calls[2], Call::Label(0, 7, Label::Rank('1'), DEFAULT_LIGHT));
        assert_eq!(calls[3], Call::Label(0, 7, Label::File('a'), DEFAULT_LIGHT));
    }

    #[test]
    fn mark_sits_between_fill_and_piece() {
        let mut board = Board::empty();
        let king = Piece {
            color: Color::White,
            role: Role::King,
        };
        board.set_piece_at(Square::A1, king);
        let red = Rgb::new(255, 0, 0);

        let calls = record(&board, &[mark_squares(red, [Square::A1])]);
        assert_eq!(calls[1], Call::Square(0, 7, DEFAULT_DARK));
        assert_eq!(calls[2], Call::Mark(0, 7, red));
        assert_eq!(calls[3], Call::Piece(0, 7, king));
        assert_eq!(calls.iter().filter(|c| matches!(c, Call::Mark(..))).count(), 1);
    }

    #[test]
    fn custom_colors_change_only_color_values() {
        let a = Rgb::new(1, 2, 3);
        let b = Rgb::new(4, 5, 6);
        let plain = record(&Board::new(), &[]);
        let custom = record(&Board::new(), &[square_colors(a, b)]);
        assert_eq!(plain.len(), custom.len());
        for (p, c) in plain.iter().zip(custom.iter()) {
            assert_eq!(std::mem::discriminant(p), std::mem::discriminant(c));
        }
        assert!(custom.contains(&Call::Square(0, 7, b)));
        assert!(custom.contains(&Call::Square(1, 7, a)));
    }

    #[test]
    fn flip_moves_labels_to_h_file_and_eighth_rank() {
        let calls = record(&Board::empty(), &[flip()]);
        // h1 is drawn at the top-left when flipped.
        assert!(calls.contains(&Call::Label(0, 0, Label::Rank('1'), DEFAULT_DARK)));
        // a8 is drawn at the bottom-right.
        assert!(calls.contains(&Call::Label(7, 7, Label::File('a'), DEFAULT_DARK)));
        assert_eq!(calls.iter().filter(|c| matches!(c, Call::Label(..))).count(), 16);
    }

    #[test]
    fn init_failure_aborts_before_drawing() {
        let mut rec = Recorder {
            fail_after: Some(0),
            ..Default::default()
        };
        let err = encode(&Board::new(), &mut rec, &[]).unwrap_err();
        assert!(matches!(err, EncodeError::Init(_)));
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn draw_failure_reports_square_and_stops() {
        // init, a1 fill, a1 rook, a1 rank label, a1 file label; b1 fill fails.
        let mut rec = Recorder {
            fail_after: Some(5),
            ..Default::default()
        };
        let err = encode(&Board::new(), &mut rec, &[]).unwrap_err();
        match err {
            EncodeError::Draw { square, .. } => assert_eq!(square, Square::B1),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(rec.calls.len(), 5);
        assert!(!rec.calls.contains(&Call::Finish));
    }

    #[test]
    fn encoder_keeps_resolved_settings() {
        let encoder = Encoder::from_options(&[flip(), square_size(10, 20)]);
        assert!(encoder.settings().config.flip);
        assert_eq!(encoder.settings().config.board_size(), (80, 160));
        assert_eq!(encoder.settings(), &resolve(&[flip(), square_size(10, 20)]));
    }

    #[test]
    fn encoding_is_deterministic() {
        let opts = [mark_squares(Rgb::new(0, 255, 0), [Square::E4])];
        assert_eq!(record(&Board::new(), &opts), record(&Board::new(), &opts));
    }
}
