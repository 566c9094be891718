use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::localize::column_label;
use crate::data::model::{PokemonDataset, Stat};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: record counts and load errors.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("ポケモンデータ可視化アプリ");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{}体読み込み済み、{}体表示中",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

/// Title and caption at the top of the chart feed.
pub fn header(ui: &mut Ui) {
    ui.heading("ポケモンデータ可視化アプリ");
    ui.label(
        RichText::new(
            "800体のポケモンデータを読み込み、800体のポケモンの攻撃のデータを可視化します。\n\
             ポケモンの名前を入力すると詳細情報を表示することができます。",
        )
        .weak(),
    );
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Name search + results table
// ---------------------------------------------------------------------------

/// Render the search input and the filtered results below the charts.
pub fn search_section(ui: &mut Ui, state: &mut AppState) {
    ui.separator();
    ui.label("ポケモンの名前を入力してください");
    if ui.text_edit_singleline(&mut state.query).changed() {
        state.refilter();
    }
    ui.add_space(4.0);

    let Some(dataset) = &state.dataset else { return };

    if state.visible_indices.is_empty() {
        ui.label("該当するポケモンが見つかりません");
        return;
    }
    results_table(ui, dataset, &state.visible_indices);
}

fn results_table(ui: &mut Ui, dataset: &PokemonDataset, indices: &[usize]) {
    // Stat headers go through the rename table; the rest pass through.
    let mut headers = vec![
        column_label("pokedex_number"),
        column_label("name"),
        column_label("japanese_name"),
        column_label("type1"),
        column_label("type2"),
    ];
    headers.extend(Stat::ALL.iter().map(|s| s.label()));

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(60.0), headers.len())
        .max_scroll_height(360.0)
        .header(20.0, |mut header| {
            for text in &headers {
                header.col(|ui| {
                    ui.strong(*text);
                });
            }
        })
        .body(|mut body| {
            for &idx in indices {
                let p = &dataset.records[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(p.dex.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&p.name);
                    });
                    row.col(|ui| {
                        ui.label(&p.display_name);
                    });
                    row.col(|ui| {
                        ui.label(&p.type1);
                    });
                    row.col(|ui| {
                        ui.label(&p.type2);
                    });
                    for stat in Stat::ALL {
                        row.col(|ui| {
                            ui.label(p.stats.get(stat).to_string());
                        });
                    }
                });
            }
        });
}
