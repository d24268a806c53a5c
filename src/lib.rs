//! Tetris article hero-banner generator
//!
//! Renders a fixed 1200x630 promotional banner for a falling-block puzzle
//! article and writes it as `hero.png` next to the crate manifest. The whole
//! scene is hard-coded: a vintage cream canvas, centered headings, a
//! mid-game playfield, the seven tetromino diagrams, an info panel, and a
//! double decorative frame. Given the same font resolution, two runs produce
//! identical pixels.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> tetris_hero::Result<()> {
//!     let path = tetris_hero::generate()?;
//!     println!("Hero image saved to: {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! Missing font files are not an error: if any of the preferred DejaVu faces
//! cannot be loaded, every text role falls back to a built-in bitmap font
//! and the run completes normally.

pub mod error;
pub use error::{Error, Result};

pub mod rendering;

pub mod banner;
pub use banner::{generate, output_path, render, OUTPUT_FILE};

/// Color roles of the banner, as opaque RGB triples
///
/// The defaults are the vintage palette: cream background, dark brown
/// foreground, lighter brown gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    pub grid: [u8; 3],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: [245, 241, 227], // #F5F1E3
            foreground: [44, 36, 22],    // #2C2416
            grid: [139, 134, 119],       // #8B8677
        }
    }
}

/// Canvas dimensions and palette for a render
#[derive(Debug, Clone, Copy)]
pub struct BannerConfig {
    pub width: u32,
    pub height: u32,
    pub style: Style,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            style: Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BannerConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 630);
        assert_eq!(config.style.background, [245, 241, 227]);
    }

    #[test]
    fn test_style_roles_are_distinct() {
        let style = Style::default();
        assert_ne!(style.background, style.foreground);
        assert_ne!(style.foreground, style.grid);
    }
}
