//! `chess-svg` command line entry point.
//!
//! Reads a position as FEN and writes the board as SVG (default) or as
//! colored terminal output. Logs go to stderr so stdout stays a clean
//! document; set `RUST_LOG=debug` to see them.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chess_svg::chess::fen::Fen;
use chess_svg::chess::{Board, Square};
use chess_svg::core::resolve;
use chess_svg::term::{print_frame, render_frame};
use chess_svg::types::{Rgb, DEFAULT_DARK, DEFAULT_LIGHT, MAX_SQUARE_SIZE};
use chess_svg::{flip, mark_squares, render, square_colors, square_size, RenderOption, Theme};

/// Yellow, the usual last-move highlight.
const DEFAULT_MARK: Rgb = Rgb::new(255, 255, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Term,
}

#[derive(Debug, Parser)]
#[command(name = "chess-svg", version, about = "Render a chess position as an SVG board")]
struct Args {
    /// Position in FEN; only the board field is used.
    #[arg(long, default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")]
    fen: String,

    /// Draw from black's side.
    #[arg(long)]
    flip: bool,

    /// Light square color, #rrggbb.
    #[arg(long, value_parser = parse_rgb)]
    light: Option<Rgb>,

    /// Dark square color, #rrggbb.
    #[arg(long, value_parser = parse_rgb)]
    dark: Option<Rgb>,

    /// Squares to highlight, e.g. `e2,e4`.
    #[arg(long, value_delimiter = ',', value_parser = parse_square)]
    mark: Vec<Square>,

    /// Highlight color, #rrggbb.
    #[arg(long, value_parser = parse_rgb)]
    mark_color: Option<Rgb>,

    /// Side length of one square in pixels, at most 65536.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SQUARE_SIZE as i64))]
    square_size: Option<u32>,

    /// JSON theme file; explicit flags override its values.
    #[arg(long, env = "CHESS_SVG_THEME")]
    theme: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write to a file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn parse_rgb(s: &str) -> Result<Rgb, String> {
    Rgb::from_hex(s).ok_or_else(|| format!("`{s}` is not a #rrggbb color"))
}

fn parse_square(s: &str) -> Result<Square, String> {
    s.trim()
        .parse::<Square>()
        .map_err(|_| format!("`{s}` is not a square"))
}

fn parse_board(fen: &str) -> Result<Board> {
    let fen: Fen = fen
        .trim()
        .parse()
        .with_context(|| format!("invalid FEN: {fen}"))?;
    Ok(fen.into_setup().board)
}

/// Theme first, then explicit flags, so flags win in the fold.
fn build_options(args: &Args, theme: Option<&Theme>) -> Result<Vec<RenderOption>> {
    let mut opts = Vec::new();
    let mut mark_color = DEFAULT_MARK;

    if let Some(theme) = theme {
        opts.extend(theme.options((DEFAULT_LIGHT, DEFAULT_DARK))?);
        if let Some(c) = theme.mark_color()? {
            mark_color = c;
        }
    }

    if args.light.is_some() || args.dark.is_some() {
        let current = resolve(&opts).config;
        opts.push(square_colors(
            args.light.unwrap_or(current.light),
            args.dark.unwrap_or(current.dark),
        ));
    }
    if let Some(size) = args.square_size {
        opts.push(square_size(size, size));
    }
    if let Some(c) = args.mark_color {
        mark_color = c;
    }
    if !args.mark.is_empty() {
        opts.push(mark_squares(mark_color, args.mark.iter().copied()));
    } else if args.mark_color.is_some() {
        warn!("--mark-color given without --mark; ignoring");
    }
    if args.flip {
        opts.push(flip());
    }
    Ok(opts)
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(
            File::create(p).with_context(|| format!("failed to create {}", p.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let theme = args
        .theme
        .as_ref()
        .map(Theme::load)
        .transpose()
        .context("failed to load theme")?;
    let board = parse_board(&args.fen)?;
    let options = build_options(&args, theme.as_ref())?;
    let out = open_output(args.output.as_ref())?;

    match args.format {
        OutputFormat::Svg => render(out, &board, &options).context("failed to render svg")?,
        OutputFormat::Term => {
            if args.square_size.is_some() {
                warn!("--square-size has no effect on terminal output");
            }
            let fb = render_frame(&board, &options).context("failed to render board")?;
            print_frame(out, &fb)?;
        }
    }
    Ok(())
}
