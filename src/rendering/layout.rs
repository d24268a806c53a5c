/// Fixed-offset geometry for the banner: pixel rectangles, the cell grid,
/// and centered-text origin math. Everything here is closed-form arithmetic
/// over constants; no value depends on runtime input.

/// An axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Corner-to-corner construction, mirroring `[x0, y0, x1, y1]` call sites
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: (x1 - x0).max(0) as u32,
            height: (y1 - y0).max(0) as u32,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Shrink by `margin` pixels on every side
    pub fn inset(&self, margin: u32) -> Self {
        Self {
            x: self.x + margin as i32,
            y: self.y + margin as i32,
            width: self.width.saturating_sub(margin * 2),
            height: self.height.saturating_sub(margin * 2),
        }
    }

    /// Whether `other` lies entirely inside `self`
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_xywh(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// A uniform cell grid anchored at a fixed origin
///
/// Cells are addressed by `(col, row)` with `(0, 0)` at the top-left.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell: u32,
    pub cols: u32,
    pub rows: u32,
}

impl GridSpec {
    /// Outline rectangle enclosing the whole grid
    pub fn outer(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.cols * self.cell,
            self.rows * self.cell,
        )
    }

    /// Full pixel rectangle of one cell
    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            self.origin_x + (col * self.cell) as i32,
            self.origin_y + (row * self.cell) as i32,
            self.cell,
            self.cell,
        )
    }

    /// Cell rectangle inset by 2 px so adjacent fills keep a background seam
    pub fn block_rect(&self, col: u32, row: u32) -> Rect {
        self.cell_rect(col, row).inset(2)
    }

    /// X coordinate of the interior gridline after column `col`
    pub fn col_line_x(&self, col: u32) -> i32 {
        self.origin_x + (col * self.cell) as i32
    }

    /// Y coordinate of the interior gridline after row `row`
    pub fn row_line_y(&self, row: u32) -> i32 {
        self.origin_y + (row * self.cell) as i32
    }
}

/// Horizontal origin that centers a run of `text_width` px on the canvas
pub fn centered_x(canvas_width: u32, text_width: f32) -> f32 {
    (canvas_width as f32 - text_width) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_corners_round_trip() {
        let r = Rect::from_corners(10, 10, 1190, 620);
        assert_eq!(r, Rect::new(10, 10, 1180, 610));
        assert_eq!(r.right(), 1190);
        assert_eq!(r.bottom(), 620);
    }

    #[test]
    fn inset_keeps_seam_on_both_sides() {
        let r = Rect::new(100, 100, 25, 25).inset(2);
        assert_eq!(r, Rect::new(102, 102, 21, 21));
    }

    #[test]
    fn grid_outer_matches_cell_arithmetic() {
        let g = GridSpec { origin_x: 150, origin_y: 140, cell: 25, cols: 10, rows: 16 };
        let outer = g.outer();
        assert_eq!(outer, Rect::from_corners(150, 140, 400, 540));
        assert!(outer.contains(&g.block_rect(9, 15)));
        assert_eq!(g.col_line_x(1), 175);
        assert_eq!(g.row_line_y(15), 515);
    }

    #[test]
    fn centered_x_balances_margins() {
        let x = centered_x(1200, 400.0);
        assert_eq!(x, 400.0);
        // left margin == right margin
        assert_eq!(x, 1200.0 - (x + 400.0));
    }
}
