use std::sync::Arc;

use eframe::egui::{Context, FontData, FontDefinitions, FontFamily};

// ---------------------------------------------------------------------------
// Japanese font setup
// ---------------------------------------------------------------------------

/// System font files with Japanese glyph coverage, tried in order.
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/ipafont-gothic/ipag.ttf",
    // macOS
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    // Windows
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Register a system font with Japanese coverage as a fallback for both
/// font families. egui's bundled fonts have no CJK glyphs, so without this
/// every label in the app renders as placeholder boxes.
pub fn install_japanese_fonts(ctx: &Context) {
    let Some((path, bytes)) = FONT_CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
    else {
        log::warn!("No Japanese system font found; Japanese labels will not render");
        return;
    };
    log::info!("Using Japanese font {path}");

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("japanese".to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("japanese".to_owned());
    }
    ctx.set_fonts(fonts);
}
