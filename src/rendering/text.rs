//! Font resolution and text drawing
//!
//! The generator prefers a set of six TrueType faces at fixed sizes. The
//! probe is all-or-nothing: if any face fails to read or parse, every role
//! degrades to the built-in 5x7 bitmap font and the run continues. Missing
//! fonts are never an error.
//!
//! Raw font bytes are validated at probe time and parsed into a [`Glyphs`]
//! view once per render pass via [`FontSet::scaled`]; measurement and
//! drawing then reuse the parsed face.

use std::fs;
use std::path::Path;

use log::debug;
use tiny_skia::{Color, PathBuilder};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::rendering::bitmap_font;
use crate::rendering::layout::Rect;
use crate::rendering::paint::Painter;

const FONT_DIR: &str = "/usr/share/fonts/truetype/dejavu";

/// Text roles used across the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Subtitle,
    Header,
    Body,
    Small,
    Caption,
}

/// A font resource bound to a fixed pixel size
pub struct Font {
    size: f32,
    kind: FontKind,
}

enum FontKind {
    /// Raw TrueType data, validated once at probe time
    Outline(Vec<u8>),
    /// Built-in 5x7 glyph table stamped at a fixed scale
    Bitmap,
}

impl Font {
    fn from_file(path: &Path, size: f32) -> Option<Font> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                debug!("font probe: cannot read {}: {err}", path.display());
                return None;
            }
        };
        if let Err(err) = Face::parse(&data, 0) {
            debug!("font probe: cannot parse {}: {err}", path.display());
            return None;
        }
        Some(Font { size, kind: FontKind::Outline(data) })
    }

    fn bitmap(size: f32) -> Font {
        Font { size, kind: FontKind::Bitmap }
    }

    /// Parse the face and bind it to this font's size
    ///
    /// Unparseable outline data degrades to the bitmap glyphs, the same
    /// policy as a failed probe.
    pub fn scaled(&self) -> Glyphs<'_> {
        match &self.kind {
            FontKind::Outline(data) => match Face::parse(data, 0) {
                Ok(face) => Glyphs::Outline { face, size: self.size },
                Err(_) => Glyphs::Bitmap,
            },
            FontKind::Bitmap => Glyphs::Bitmap,
        }
    }
}

/// A font resolved for measurement and drawing
pub enum Glyphs<'a> {
    Outline { face: Face<'a>, size: f32 },
    Bitmap,
}

fn advance(face: &Face<'_>, gid: GlyphId, scale: f32) -> f32 {
    face.glyph_hor_advance(gid).map_or(0.0, |adv| f32::from(adv) * scale)
}

fn space_advance(face: &Face<'_>, scale: f32) -> f32 {
    face.glyph_index(' ').map_or(0.0, |gid| advance(face, gid, scale))
}

impl Glyphs<'_> {
    /// Width in pixels of `text` rendered with this font
    pub fn measure(&self, text: &str) -> f32 {
        match self {
            Glyphs::Outline { face, size } => {
                let scale = *size / f32::from(face.units_per_em());
                let space = space_advance(face, scale);
                text.chars()
                    .map(|c| match face.glyph_index(c) {
                        Some(gid) => advance(face, gid, scale),
                        // unmapped codepoints advance like a space
                        None => space,
                    })
                    .sum()
            }
            Glyphs::Bitmap => (text.chars().count() as u32 * bitmap_font::ADVANCE) as f32,
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`
    pub fn draw(&self, painter: &mut Painter<'_>, x: f32, y: f32, text: &str, color: Color) {
        match self {
            Glyphs::Outline { face, size } => {
                let scale = *size / f32::from(face.units_per_em());
                let baseline = y + f32::from(face.ascender()) * scale;
                let space = space_advance(face, scale);

                let mut pb = PathBuilder::new();
                let mut pen_x = x;
                for c in text.chars() {
                    match face.glyph_index(c) {
                        Some(gid) => {
                            let mut sink =
                                GlyphSink { pb: &mut pb, x: pen_x, baseline, scale };
                            face.outline_glyph(gid, &mut sink);
                            pen_x += advance(face, gid, scale);
                        }
                        None => pen_x += space,
                    }
                }
                if let Some(path) = pb.finish() {
                    painter.fill_path(&path, color);
                }
            }
            Glyphs::Bitmap => draw_bitmap(painter, x, y, text, color),
        }
    }
}

/// Bridges ttf-parser outline callbacks (Y-up font units) into a tiny-skia
/// path in canvas coordinates (Y-down pixels).
struct GlyphSink<'a> {
    pb: &'a mut PathBuilder,
    x: f32,
    baseline: f32,
    scale: f32,
}

impl GlyphSink<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (px, py) = self.map(x, y);
        self.pb.move_to(px, py);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (px, py) = self.map(x, y);
        self.pb.line_to(px, py);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (cx, cy) = self.map(x1, y1);
        let (px, py) = self.map(x, y);
        self.pb.quad_to(cx, cy, px, py);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1x, c1y) = self.map(x1, y1);
        let (c2x, c2y) = self.map(x2, y2);
        let (px, py) = self.map(x, y);
        self.pb.cubic_to(c1x, c1y, c2x, c2y, px, py);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

fn draw_bitmap(painter: &mut Painter<'_>, x: f32, y: f32, text: &str, color: Color) {
    let scale = bitmap_font::SCALE;
    let mut pen_x = x.round() as i32;
    let top = y.round() as i32;
    for c in text.chars() {
        if let Some(cols) = bitmap_font::glyph(c) {
            for (col, bits) in cols.iter().enumerate() {
                for row in 0..bitmap_font::GLYPH_HEIGHT {
                    if bits & (1 << row) != 0 {
                        painter.fill_rect(
                            Rect::new(
                                pen_x + (col as u32 * scale) as i32,
                                top + (row * scale) as i32,
                                scale,
                                scale,
                            ),
                            color,
                        );
                    }
                }
            }
        }
        pen_x += bitmap_font::ADVANCE as i32;
    }
}

/// The resolved font for every text role
pub struct FontSet {
    title: Font,
    subtitle: Font,
    header: Font,
    body: Font,
    small: Font,
    caption: Font,
}

impl FontSet {
    /// Probe the preferred faces, degrading the whole set on any failure
    pub fn load() -> FontSet {
        match Self::probe() {
            Some(set) => set,
            None => {
                debug!("preferred font set unavailable, using built-in fallback");
                Self::fallback()
            }
        }
    }

    fn probe() -> Option<FontSet> {
        let dir = Path::new(FONT_DIR);
        Some(FontSet {
            title: Font::from_file(&dir.join("DejaVuSerif-Bold.ttf"), 36.0)?,
            subtitle: Font::from_file(&dir.join("DejaVuSerif.ttf"), 20.0)?,
            header: Font::from_file(&dir.join("DejaVuSansMono-Bold.ttf"), 18.0)?,
            body: Font::from_file(&dir.join("DejaVuSansMono.ttf"), 14.0)?,
            small: Font::from_file(&dir.join("DejaVuSansMono.ttf"), 13.0)?,
            caption: Font::from_file(&dir.join("DejaVuSerif-Italic.ttf"), 16.0)?,
        })
    }

    /// The uniform bitmap set used when the probe fails
    pub fn fallback() -> FontSet {
        FontSet {
            title: Font::bitmap(36.0),
            subtitle: Font::bitmap(20.0),
            header: Font::bitmap(18.0),
            body: Font::bitmap(14.0),
            small: Font::bitmap(13.0),
            caption: Font::bitmap(16.0),
        }
    }

    /// Parse every role's face once for a render pass
    pub fn scaled(&self) -> ScaledSet<'_> {
        ScaledSet {
            title: self.title.scaled(),
            subtitle: self.subtitle.scaled(),
            header: self.header.scaled(),
            body: self.body.scaled(),
            small: self.small.scaled(),
            caption: self.caption.scaled(),
        }
    }
}

/// Per-render view of the font set with the faces already parsed
pub struct ScaledSet<'a> {
    title: Glyphs<'a>,
    subtitle: Glyphs<'a>,
    header: Glyphs<'a>,
    body: Glyphs<'a>,
    small: Glyphs<'a>,
    caption: Glyphs<'a>,
}

impl<'a> ScaledSet<'a> {
    pub fn get(&self, role: Role) -> &Glyphs<'a> {
        match role {
            Role::Title => &self.title,
            Role::Subtitle => &self.subtitle,
            Role::Header => &self.header,
            Role::Body => &self.body,
            Role::Small => &self.small,
            Role::Caption => &self.caption,
        }
    }
}
