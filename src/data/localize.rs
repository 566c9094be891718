// ---------------------------------------------------------------------------
// Japanese localisation tables
// ---------------------------------------------------------------------------

/// Stat column names and their Japanese display labels.
pub const STAT_LABELS: &[(&str, &str)] = &[
    ("hp", "HP"),
    ("attack", "こうげき"),
    ("defense", "ぼうぎょ"),
    ("sp_attack", "とくこう"),
    ("sp_defense", "とくぼう"),
    ("speed", "すばやさ"),
];

/// English type names and their Japanese display labels.
pub const TYPE_LABELS: &[(&str, &str)] = &[
    ("grass", "くさ"),
    ("fire", "ほのお"),
    ("water", "みず"),
    ("bug", "むし"),
    ("normal", "ノーマル"),
    ("poison", "どく"),
    ("electric", "でんき"),
    ("ground", "じめん"),
    ("fairy", "フェアリー"),
    ("fighting", "かくとう"),
    ("psychic", "エスパー"),
    ("rock", "いわ"),
    ("ghost", "ゴースト"),
    ("ice", "こおり"),
    ("dragon", "ドラゴン"),
    ("dark", "あく"),
    ("steel", "はがね"),
    ("flying", "ひこう"),
];

/// Label used when a record has no value for a type column.
pub const MISSING_TYPE_LABEL: &str = "タイプなし";

/// Localise a column name. Columns not present in [`STAT_LABELS`] pass
/// through unchanged.
pub fn column_label(column: &str) -> &str {
    STAT_LABELS
        .iter()
        .find(|(en, _)| *en == column)
        .map(|(_, ja)| *ja)
        .unwrap_or(column)
}

/// Localise a type value. `None` (missing cell) maps to the sentinel label;
/// values not present in [`TYPE_LABELS`] pass through unchanged.
pub fn type_label(raw: Option<&str>) -> String {
    match raw {
        None => MISSING_TYPE_LABEL.to_string(),
        Some(en) => TYPE_LABELS
            .iter()
            .find(|(key, _)| *key == en)
            .map(|(_, ja)| ja.to_string())
            .unwrap_or_else(|| en.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_columns_rename() {
        assert_eq!(column_label("hp"), "HP");
        assert_eq!(column_label("attack"), "こうげき");
        assert_eq!(column_label("speed"), "すばやさ");
    }

    #[test]
    fn unknown_columns_pass_through() {
        assert_eq!(column_label("name"), "name");
        assert_eq!(column_label("pokedex_number"), "pokedex_number");
    }

    #[test]
    fn type_remap_is_total_over_table() {
        for (en, ja) in TYPE_LABELS {
            assert_eq!(type_label(Some(en)), *ja);
        }
    }

    #[test]
    fn unknown_type_passes_through() {
        assert_eq!(type_label(Some("???")), "???");
    }

    #[test]
    fn missing_type_maps_to_sentinel() {
        assert_eq!(type_label(None), MISSING_TYPE_LABEL);
    }
}
