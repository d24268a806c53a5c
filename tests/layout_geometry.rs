//! Fixed-coordinate checks over the scene literals
//!
//! These properties hold independently of font resolution: every coordinate
//! in the banner is a closed-form function of constants.

use tetris_hero::banner::{
    BOARD_GRID, DIAGRAM_CELL, DIAGRAM_ORIGIN, DIAGRAM_PITCH, FALLING_PIECE, INFO_PANEL,
    PIECE_DIAGRAMS, SETTLED_BLOCKS,
};
use tetris_hero::rendering::layout::{centered_x, Rect};
use tetris_hero::rendering::text::{FontSet, Role};
use tetris_hero::BannerConfig;

fn canvas_rect(config: &BannerConfig) -> Rect {
    Rect::new(0, 0, config.width, config.height)
}

#[test]
fn grid_outline_spans_fixed_corners() {
    let outer = BOARD_GRID.outer();
    assert_eq!(outer, Rect::from_corners(150, 140, 400, 540));
}

#[test]
fn every_board_cell_stays_inside_the_grid() {
    let outer = BOARD_GRID.outer();
    for &(col, row) in SETTLED_BLOCKS.iter().chain(FALLING_PIECE.iter()) {
        let block = BOARD_GRID.block_rect(col, row);
        assert!(outer.contains(&block), "cell ({col},{row}) escapes the grid");
    }
}

#[test]
fn diagrams_stay_on_canvas_and_clear_of_the_grid() {
    let config = BannerConfig::default();
    let canvas = canvas_rect(&config);
    let grid_right = BOARD_GRID.outer().right();
    let (ox, oy) = DIAGRAM_ORIGIN;

    for (i, piece) in PIECE_DIAGRAMS.iter().enumerate() {
        let slot = oy + DIAGRAM_PITCH * i as i32;
        for &(col, row) in &piece.cells {
            let cell = Rect::new(
                ox + (col * DIAGRAM_CELL) as i32,
                slot + 20 + (row * DIAGRAM_CELL) as i32,
                DIAGRAM_CELL - 2,
                DIAGRAM_CELL - 2,
            );
            assert!(canvas.contains(&cell));
            assert!(cell.x > grid_right);
        }
    }
}

#[test]
fn info_panel_sits_inside_the_frame() {
    let config = BannerConfig::default();
    let frame = Rect::from_corners(
        10,
        10,
        config.width as i32 - 10,
        config.height as i32 - 10,
    );
    assert!(frame.contains(&INFO_PANEL));
    assert_eq!(INFO_PANEL, Rect::from_corners(850, 140, 1130, 540));
}

#[test]
fn diagram_labels_follow_canonical_order() {
    let labels: Vec<&str> = PIECE_DIAGRAMS.iter().map(|p| p.label).collect();
    assert_eq!(
        labels,
        vec![
            "I-PIECE (Line)",
            "O-PIECE (Square)",
            "T-PIECE",
            "S-PIECE (Zigzag)",
            "Z-PIECE (Zigzag)",
            "J-PIECE",
            "L-PIECE",
        ]
    );
}

#[test]
fn centered_text_balances_margins() {
    let config = BannerConfig::default();
    let fonts = FontSet::fallback();
    let styles = fonts.scaled();
    for (role, text) in [
        (Role::Title, "TETRIS: THE FALLING BLOCKS PUZZLE"),
        (Role::Subtitle, "A Study in Spatial Reasoning and Real-Time Strategy"),
        (Role::Caption, "From Soviet Computing to Global Phenomenon"),
    ] {
        let width = styles.get(role).measure(text);
        let x = centered_x(config.width, width);
        let left = x;
        let right = config.width as f32 - (x + width);
        assert!((left - right).abs() <= 1.0, "margins differ for {text:?}");
        assert!(left >= 0.0, "{text:?} wider than the canvas");
    }
}
