//! Smoke tests for the full banner render

use tetris_hero::rendering::text::FontSet;
use tetris_hero::{render, BannerConfig};

#[test]
fn smoke_render_matches_config_dimensions() {
    let config = BannerConfig::default();
    let pixmap = render(&config, &FontSet::fallback()).expect("render failed");
    assert_eq!(pixmap.width(), 1200);
    assert_eq!(pixmap.height(), 630);
}

#[test]
fn render_is_deterministic() {
    let config = BannerConfig::default();
    let fonts = FontSet::fallback();
    let first = render(&config, &fonts).expect("first render failed");
    let second = render(&config, &fonts).expect("second render failed");
    assert_eq!(first.data(), second.data());
}

#[test]
fn resolved_font_set_renders() {
    // Whatever FontSet::load resolves to on this machine, the run completes
    // and dimensions are unchanged.
    let config = BannerConfig::default();
    let pixmap = render(&config, &FontSet::load()).expect("render failed");
    assert_eq!((pixmap.width(), pixmap.height()), (config.width, config.height));
}

#[test]
fn banner_is_not_blank() {
    let config = BannerConfig::default();
    let pixmap = render(&config, &FontSet::fallback()).expect("render failed");
    let [br, bg, bb] = config.style.background;
    let foreground_pixels = pixmap
        .data()
        .chunks(4)
        .filter(|px| px[0] != br || px[1] != bg || px[2] != bb)
        .count();
    assert!(foreground_pixels > 1000, "only {foreground_pixels} non-background pixels");
}

#[test]
fn generate_writes_decodable_output() -> anyhow::Result<()> {
    let path = tetris_hero::generate()?;
    assert_eq!(path, tetris_hero::output_path());
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("hero.png"));

    let data = std::fs::read(&path)?;
    let pixmap = tiny_skia::Pixmap::decode_png(&data)?;
    assert_eq!((pixmap.width(), pixmap.height()), (1200, 630));

    std::fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn encoded_png_round_trips_dimensions() -> anyhow::Result<()> {
    let config = BannerConfig::default();
    let pixmap = render(&config, &FontSet::fallback())?;
    let png = pixmap.encode_png()?;
    let decoded = tiny_skia::Pixmap::decode_png(&png)?;
    assert_eq!(decoded.width(), config.width);
    assert_eq!(decoded.height(), config.height);
    Ok(())
}
