use std::path::Path;

use eframe::egui;

use crate::data::{fetch, loader};
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PokedexApp {
    pub state: AppState,
}

impl PokedexApp {
    /// Run the acquire → parse pipeline once and build the initial state.
    /// A failure is logged and shown in the top bar instead of aborting.
    pub fn bootstrap() -> Self {
        let mut state = AppState::default();
        let path = Path::new(fetch::DATASET_FILE);

        let loaded = fetch::ensure_dataset(path, fetch::DATASET_URL)
            .map_err(anyhow::Error::new)
            .and_then(|()| loader::load_csv(path));

        match loaded {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} Pokémon across {} primary types",
                    dataset.len(),
                    dataset.type1_counts.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }

        Self { state }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: counts and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: chart feed + search, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui);
                    plot::attack_histogram(ui, &self.state);
                    plot::annotated_histogram(ui, &self.state);
                    plot::type_box_plot(ui, &self.state);
                    plot::type_distribution(ui, &self.state);
                    panels::search_section(ui, &mut self.state);
                });
        });
    }
}
