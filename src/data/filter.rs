use super::model::PokemonDataset;

// ---------------------------------------------------------------------------
// Name search
// ---------------------------------------------------------------------------

/// Return indices of records whose display name contains `query` as a
/// case-insensitive substring. An empty query matches every record.
pub fn search_indices(dataset: &PokemonDataset, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..dataset.len()).collect();
    }
    let needle = query.to_lowercase();

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, p)| p.display_name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{BaseStats, Pokemon};

    fn dataset() -> PokemonDataset {
        let names = ["フシギダネ", "フシギソウ", "ヒトカゲ"];
        let records = names
            .iter()
            .enumerate()
            .map(|(i, name)| Pokemon {
                dex: i as u32 + 1,
                name: format!("pokemon-{i}"),
                display_name: name.to_string(),
                type1: "くさ".to_string(),
                type2: "タイプなし".to_string(),
                stats: BaseStats {
                    hp: 45,
                    attack: 49,
                    defense: 49,
                    sp_attack: 65,
                    sp_defense: 65,
                    speed: 45,
                },
            })
            .collect();
        PokemonDataset::from_records(records)
    }

    #[test]
    fn full_name_matches_exactly_one() {
        let ds = dataset();
        assert_eq!(search_indices(&ds, "ヒトカゲ"), vec![2]);
    }

    #[test]
    fn partial_name_matches_all_candidates() {
        let ds = dataset();
        assert_eq!(search_indices(&ds, "フシギ"), vec![0, 1]);
    }

    #[test]
    fn unknown_name_matches_nothing() {
        let ds = dataset();
        assert!(search_indices(&ds, "ミュウツー").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let ds = dataset();
        assert_eq!(search_indices(&ds, ""), vec![0, 1, 2]);
    }
}
