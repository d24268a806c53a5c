/// Drawing primitives over the tiny-skia pixel surface
///
/// The banner only needs solid fills, outlined rectangles, and straight
/// lines. Geometry fills are aliased so cell seams and gridlines stay
/// pixel-crisp; glyph fills opt into anti-aliasing.

use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::rendering::layout::Rect;

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = false;
    paint
}

/// Borrowed view of the canvas exposing the primitive set
pub struct Painter<'a> {
    pixmap: &'a mut Pixmap,
}

impl<'a> Painter<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self { pixmap }
    }

    /// Flood the whole surface with one color
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(r) = rect.to_skia() {
            self.pixmap
                .fill_rect(r, &solid(color), Transform::identity(), None);
        }
    }

    /// Unfilled rectangle outline with the given stroke width
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        if let Some(r) = rect.to_skia() {
            let path = PathBuilder::from_rect(r);
            let stroke = Stroke { width, ..Stroke::default() };
            self.pixmap
                .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
        }
    }

    /// Straight line segment between two points
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        if let Some(path) = pb.finish() {
            let stroke = Stroke { width, ..Stroke::default() };
            self.pixmap
                .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
        }
    }

    /// One-pixel vertical gridline spanning `height` px down from `(x, y)`
    pub fn vline(&mut self, x: i32, y: i32, height: u32, color: Color) {
        self.fill_rect(Rect::new(x, y, 1, height), color);
    }

    /// One-pixel horizontal gridline spanning `width` px right from `(x, y)`
    pub fn hline(&mut self, x: i32, y: i32, width: u32, color: Color) {
        self.fill_rect(Rect::new(x, y, width, 1), color);
    }

    /// Filled path in canvas coordinates, anti-aliased (glyph outlines)
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        let mut paint = solid(color);
        paint.anti_alias = true;
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * pixmap.width() + x) * 4) as usize;
        let d = pixmap.data();
        [d[idx], d[idx + 1], d[idx + 2], d[idx + 3]]
    }

    #[test]
    fn fill_rect_writes_exact_extent() {
        let mut pixmap = Pixmap::new(16, 16).unwrap();
        let mut p = Painter::new(&mut pixmap);
        p.clear(Color::from_rgba8(245, 241, 227, 255));
        p.fill_rect(Rect::new(2, 2, 4, 4), Color::from_rgba8(44, 36, 22, 255));
        assert_eq!(pixel(&pixmap, 2, 2), [44, 36, 22, 255]);
        assert_eq!(pixel(&pixmap, 5, 5), [44, 36, 22, 255]);
        assert_eq!(pixel(&pixmap, 6, 6), [245, 241, 227, 255]);
        assert_eq!(pixel(&pixmap, 1, 2), [245, 241, 227, 255]);
    }

    #[test]
    fn gridline_is_one_pixel_wide() {
        let mut pixmap = Pixmap::new(8, 8).unwrap();
        let mut p = Painter::new(&mut pixmap);
        p.clear(Color::from_rgba8(255, 255, 255, 255));
        p.vline(3, 0, 8, Color::from_rgba8(139, 134, 119, 255));
        assert_eq!(pixel(&pixmap, 3, 4), [139, 134, 119, 255]);
        assert_eq!(pixel(&pixmap, 2, 4), [255, 255, 255, 255]);
        assert_eq!(pixel(&pixmap, 4, 4), [255, 255, 255, 255]);
    }
}
