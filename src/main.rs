mod app;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use app::PokedexApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ポケモンデータ可視化アプリ",
        options,
        Box::new(|cc| {
            // Install a CJK-capable font so the Japanese labels render.
            ui::fonts::install_japanese_fonts(&cc.egui_ctx);
            Ok(Box::new(PokedexApp::bootstrap()))
        }),
    )
}
