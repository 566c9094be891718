use crate::color::ColorMap;
use crate::data::filter::search_indices;
use crate::data::model::{PokemonDataset, Stat};
use crate::stats::{box_summary, histogram, population_summary, BoxSummary, HistBin, Summary};

/// The stat every chart analyses, as in the original app.
pub const ANALYZED_STAT: Stat = Stat::Attack;

/// Bin count for the attack histograms.
pub const ATTACK_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Chart inputs are computed
/// once per dataset, never per frame.
pub struct AppState {
    /// Loaded dataset (None until startup loading succeeds).
    pub dataset: Option<PokemonDataset>,

    /// Current contents of the name search box.
    pub query: String,

    /// Indices of records matching the current query (cached).
    pub visible_indices: Vec<usize>,

    /// Population summary of the analysed stat.
    pub summary: Option<Summary>,

    /// Equal-width bins of the analysed stat.
    pub attack_histogram: Vec<HistBin>,

    /// Box summary of the analysed stat per primary type,
    /// in first-appearance order.
    pub type_boxes: Vec<(String, BoxSummary)>,

    /// Colour per primary type.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            query: String::new(),
            visible_indices: Vec::new(),
            summary: None,
            attack_histogram: Vec::new(),
            type_boxes: Vec::new(),
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and precompute everything the charts
    /// need.
    pub fn set_dataset(&mut self, dataset: PokemonDataset) {
        let values = dataset.stat_values(ANALYZED_STAT);
        self.summary = population_summary(&values);
        self.attack_histogram = histogram(&values, ATTACK_BINS);

        self.type_boxes = dataset
            .stat_by_type1(ANALYZED_STAT)
            .into_iter()
            .filter_map(|(label, vals)| box_summary(&vals).map(|b| (label, b)))
            .collect();

        self.color_map = Some(ColorMap::new(
            dataset.type1_counts.iter().map(|(t, _)| t.as_str()),
        ));

        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after the query changed.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = search_indices(ds, &self.query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_records;

    const SAMPLE: &str = "\
pokedex_number,name,japanese_name,hp,attack,defense,sp_attack,sp_defense,speed,type1,type2
1,Bulbasaur,フシギダネFushigidane,45,49,49,65,65,45,grass,poison
2,Ivysaur,フシギソウFushigisou,60,62,63,80,80,60,grass,poison
4,Charmander,ヒトカゲHitokage,39,52,43,60,50,65,fire,
";

    #[test]
    fn set_dataset_precomputes_chart_inputs() {
        let mut state = AppState::default();
        state.set_dataset(read_records(SAMPLE.as_bytes()).unwrap());

        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        let summary = state.summary.unwrap();
        assert_eq!(summary.count, 3);
        assert!(!state.attack_histogram.is_empty());
        // One box per primary type, in first-appearance order.
        assert_eq!(state.type_boxes.len(), 2);
        assert_eq!(state.type_boxes[0].0, "くさ");
        assert_eq!(state.type_boxes[1].0, "ほのお");
    }

    #[test]
    fn refilter_narrows_and_restores() {
        let mut state = AppState::default();
        state.set_dataset(read_records(SAMPLE.as_bytes()).unwrap());

        state.query = "ヒトカゲ".to_string();
        state.refilter();
        assert_eq!(state.visible_indices, vec![2]);

        state.query.clear();
        state.refilter();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }
}
