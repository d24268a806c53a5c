//! The hero banner scene
//!
//! Every coordinate, color role, shape literal, and line of text below is a
//! fixed constant; the render is a single linear pass over them. The board
//! depicts a mid-game stack with a T-piece in flight, flanked by the seven
//! tetromino diagrams and an info panel of mechanics and scoring rules.

use std::fs;
use std::path::{Path, PathBuf};

use tiny_skia::{Color, Pixmap};

use crate::error::{Error, Result};
use crate::rendering::layout::{centered_x, GridSpec, Rect};
use crate::rendering::paint::Painter;
use crate::rendering::text::{FontSet, Role, ScaledSet};
use crate::rendering::new_canvas;
use crate::BannerConfig;

/// File name of the rendered banner, written next to the crate manifest
pub const OUTPUT_FILE: &str = "hero.png";

const TITLE: &str = "TETRIS: THE FALLING BLOCKS PUZZLE";
const SUBTITLE: &str = "A Study in Spatial Reasoning and Real-Time Strategy";
const CAPTION: &str = "From Soviet Computing to Global Phenomenon";

const TITLE_Y: f32 = 40.0;
const SUBTITLE_Y: f32 = 85.0;
const CAPTION_RAISE: f32 = 50.0;

/// The 10x16 playfield grid
pub const BOARD_GRID: GridSpec = GridSpec {
    origin_x: 150,
    origin_y: 140,
    cell: 25,
    cols: 10,
    rows: 16,
};

/// Settled stack cells, (col, row) with row 15 at the bottom of the well
pub const SETTLED_BLOCKS: [(u32, u32); 37] = [
    // Bottom rows, each with one gap
    (0, 15), (1, 15), (2, 15), (4, 15), (5, 15), (6, 15), (7, 15), (8, 15), (9, 15),
    (0, 14), (1, 14), (2, 14), (3, 14), (4, 14), (6, 14), (7, 14), (8, 14), (9, 14),
    (1, 13), (2, 13), (3, 13), (4, 13), (5, 13), (6, 13), (8, 13), (9, 13),
    // Scattered columns above the stack
    (0, 12), (8, 12), (9, 12),
    (0, 11), (1, 11), (8, 11), (9, 11),
    (5, 10), (6, 10), (7, 10),
    (5, 9),
];

/// The T-piece in flight, drawn outlined and hatched rather than filled
pub const FALLING_PIECE: [(u32, u32); 4] = [(3, 3), (4, 3), (5, 3), (4, 4)];

/// One labeled tetromino diagram
pub struct PieceDiagram {
    pub label: &'static str,
    pub cells: [(u32, u32); 4],
}

/// The seven canonical tetrominoes, in display order
pub const PIECE_DIAGRAMS: [PieceDiagram; 7] = [
    PieceDiagram { label: "I-PIECE (Line)", cells: [(0, 0), (1, 0), (2, 0), (3, 0)] },
    PieceDiagram { label: "O-PIECE (Square)", cells: [(0, 0), (1, 0), (0, 1), (1, 1)] },
    PieceDiagram { label: "T-PIECE", cells: [(0, 0), (1, 0), (2, 0), (1, 1)] },
    PieceDiagram { label: "S-PIECE (Zigzag)", cells: [(1, 0), (2, 0), (0, 1), (1, 1)] },
    PieceDiagram { label: "Z-PIECE (Zigzag)", cells: [(0, 0), (1, 0), (1, 1), (2, 1)] },
    PieceDiagram { label: "J-PIECE", cells: [(0, 0), (0, 1), (1, 1), (2, 1)] },
    PieceDiagram { label: "L-PIECE", cells: [(2, 0), (0, 1), (1, 1), (2, 1)] },
];

pub const DIAGRAM_ORIGIN: (i32, i32) = (500, 140);
pub const DIAGRAM_CELL: u32 = 18;
/// Vertical distance between consecutive diagrams
pub const DIAGRAM_PITCH: i32 = 50;
const DIAGRAM_CELLS_DY: i32 = 20;
const DIAGRAM_LABEL_DY: i32 = 35;
const DIAGRAM_LABEL_DX: i32 = 100;

/// Bordered info panel on the right-hand side
pub const INFO_PANEL: Rect = Rect { x: 850, y: 140, width: 280, height: 400 };

const INFO_HEADER: &str = "GAME MECHANICS:";
const INFO_LINE_HEIGHT: i32 = 16;

/// Panel body, one entry per line; empty strings are vertical spacers
pub const INFO_LINES: [&str; 24] = [
    "",
    "\u{2022} Blocks fall from top",
    "\u{2022} Rotate pieces 90\u{00B0}",
    "\u{2022} Move left/right",
    "\u{2022} Complete rows vanish",
    "\u{2022} Score increases",
    "\u{2022} Speed accelerates",
    "",
    "SCORING SYSTEM:",
    "",
    "1 Line:  100 pts",
    "2 Lines: 300 pts",
    "3 Lines: 500 pts",
    "4 Lines: 800 pts",
    "  (TETRIS!)",
    "",
    "STRATEGY:",
    "",
    "\u{2022} Plan ahead",
    "\u{2022} Leave gaps for",
    "  I-pieces",
    "\u{2022} Build flat",
    "\u{2022} Avoid stacking",
    "  too high",
];

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

/// Render the full banner onto a freshly allocated canvas
pub fn render(config: &BannerConfig, fonts: &FontSet) -> Result<Pixmap> {
    let mut pixmap = new_canvas(config.width, config.height)?;
    let fg = rgb(config.style.foreground);
    let grid_color = rgb(config.style.grid);

    // Parse each role's face once for the whole pass
    let styles = fonts.scaled();

    let mut painter = Painter::new(&mut pixmap);
    painter.clear(rgb(config.style.background));

    draw_headings(&mut painter, config, &styles, fg);
    draw_board(&mut painter, fg, grid_color);
    draw_piece_diagrams(&mut painter, &styles, fg);
    draw_info_panel(&mut painter, &styles, fg);
    draw_caption(&mut painter, config, &styles, fg);
    draw_frame(&mut painter, config, fg);

    Ok(pixmap)
}

/// Load fonts, render, and write the PNG next to the crate manifest
pub fn generate() -> Result<PathBuf> {
    let fonts = FontSet::load();
    let config = BannerConfig::default();
    let pixmap = render(&config, &fonts)?;

    let path = output_path();
    let png = pixmap
        .encode_png()
        .map_err(|err| Error::Encode(err.to_string()))?;
    fs::write(&path, png).map_err(|source| Error::Write { path: path.clone(), source })?;
    Ok(path)
}

/// Fixed output location, independent of the invocation's working directory
pub fn output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_FILE)
}

fn draw_centered(
    painter: &mut Painter<'_>,
    config: &BannerConfig,
    styles: &ScaledSet<'_>,
    role: Role,
    text: &str,
    y: f32,
    color: Color,
) {
    let font = styles.get(role);
    let x = centered_x(config.width, font.measure(text));
    font.draw(painter, x, y, text, color);
}

fn draw_headings(painter: &mut Painter<'_>, config: &BannerConfig, styles: &ScaledSet<'_>, fg: Color) {
    draw_centered(painter, config, styles, Role::Title, TITLE, TITLE_Y, fg);
    draw_centered(painter, config, styles, Role::Subtitle, SUBTITLE, SUBTITLE_Y, fg);
}

fn draw_board(painter: &mut Painter<'_>, fg: Color, grid_color: Color) {
    let grid = BOARD_GRID;
    let outer = grid.outer();
    painter.stroke_rect(outer, fg, 3.0);

    // Interior gridlines first, so filled cells sit on top
    for col in 1..grid.cols {
        painter.vline(grid.col_line_x(col), grid.origin_y, outer.height, grid_color);
    }
    for row in 1..grid.rows {
        painter.hline(grid.origin_x, grid.row_line_y(row), outer.width, grid_color);
    }

    for &(col, row) in &SETTLED_BLOCKS {
        painter.fill_rect(grid.block_rect(col, row), fg);
    }

    for &(col, row) in &FALLING_PIECE {
        let block = grid.block_rect(col, row);
        painter.stroke_rect(block, fg, 2.0);
        // X hatching to signal motion
        let (x0, y0) = ((block.x + 2) as f32, (block.y + 2) as f32);
        let (x1, y1) = (block.right() as f32, block.bottom() as f32);
        painter.line(x0, y0, x1, y1, fg, 1.0);
        painter.line(x1, y0, x0, y1, fg, 1.0);
    }
}

fn draw_piece_diagrams(painter: &mut Painter<'_>, styles: &ScaledSet<'_>, fg: Color) {
    let (ox, oy) = DIAGRAM_ORIGIN;
    styles
        .get(Role::Header)
        .draw(painter, ox as f32, oy as f32, "THE SEVEN TETROMINOES:", fg);

    let body = styles.get(Role::Body);
    let fill = DIAGRAM_CELL - 2;
    for (i, piece) in PIECE_DIAGRAMS.iter().enumerate() {
        let slot = oy + DIAGRAM_PITCH * i as i32;
        body.draw(
            painter,
            (ox + DIAGRAM_LABEL_DX) as f32,
            (slot + DIAGRAM_LABEL_DY) as f32,
            piece.label,
            fg,
        );
        for &(col, row) in &piece.cells {
            painter.fill_rect(
                Rect::new(
                    ox + (col * DIAGRAM_CELL) as i32,
                    slot + DIAGRAM_CELLS_DY + (row * DIAGRAM_CELL) as i32,
                    fill,
                    fill,
                ),
                fg,
            );
        }
    }
}

fn draw_info_panel(painter: &mut Painter<'_>, styles: &ScaledSet<'_>, fg: Color) {
    let panel = INFO_PANEL;
    painter.stroke_rect(panel, fg, 2.0);
    styles.get(Role::Header).draw(
        painter,
        (panel.x + 10) as f32,
        (panel.y + 20) as f32,
        INFO_HEADER,
        fg,
    );

    let small = styles.get(Role::Small);
    let mut y = panel.y + 50;
    for line in INFO_LINES {
        small.draw(painter, (panel.x + 15) as f32, y as f32, line, fg);
        y += INFO_LINE_HEIGHT;
    }
}

fn draw_caption(painter: &mut Painter<'_>, config: &BannerConfig, styles: &ScaledSet<'_>, fg: Color) {
    let y = config.height as f32 - CAPTION_RAISE;
    draw_centered(painter, config, styles, Role::Caption, CAPTION, y, fg);
}

fn draw_frame(painter: &mut Painter<'_>, config: &BannerConfig, fg: Color) {
    let (w, h) = (config.width as i32, config.height as i32);
    painter.stroke_rect(Rect::from_corners(10, 10, w - 10, h - 10), fg, 4.0);
    painter.stroke_rect(Rect::from_corners(15, 15, w - 15, h - 15), fg, 1.0);
}
