use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::localize::type_label;
use super::model::{BaseStats, Pokemon, PokemonDataset};

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// The columns we read from the source CSV. Everything else in the file
/// (abilities, capture rate, type match-ups, ...) is ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    pokedex_number: u32,
    name: String,
    japanese_name: String,
    hp: u32,
    attack: u32,
    defense: u32,
    sp_attack: u32,
    sp_defense: u32,
    speed: u32,
    type1: Option<String>,
    type2: Option<String>,
}

// ---------------------------------------------------------------------------
// Katakana extraction
// ---------------------------------------------------------------------------

/// First contiguous run of katakana (U+30A1..U+30FF).
static KATAKANA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{30A1}-\u{30FF}]+").expect("valid katakana pattern"));

/// Extract the katakana display name from a raw `japanese_name` cell,
/// e.g. `"フシギダネFushigidane"` → `"フシギダネ"`.
pub fn extract_katakana(raw: &str) -> Option<&str> {
    KATAKANA.find(raw).map(|m| m.as_str())
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<PokemonDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_records(file)
}

/// Parse CSV records from any reader into a localised dataset.
pub fn read_records<R: Read>(reader: R) -> Result<PokemonDataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_no, result) in rdr.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(localize_row(raw, row_no)?);
    }

    if records.is_empty() {
        bail!("dataset contains no rows");
    }
    Ok(PokemonDataset::from_records(records))
}

/// Turn a raw row into a localised record. A missing katakana name is a
/// malformed row, not something to skip silently.
fn localize_row(raw: RawRow, row_no: usize) -> Result<Pokemon> {
    let display_name = extract_katakana(&raw.japanese_name)
        .with_context(|| {
            format!(
                "CSV row {row_no}: no katakana name in {:?}",
                raw.japanese_name
            )
        })?
        .to_string();

    Ok(Pokemon {
        dex: raw.pokedex_number,
        name: raw.name,
        display_name,
        type1: type_label(raw.type1.as_deref()),
        type2: type_label(raw.type2.as_deref()),
        stats: BaseStats {
            hp: raw.hp,
            attack: raw.attack,
            defense: raw.defense,
            sp_attack: raw.sp_attack,
            sp_defense: raw.sp_defense,
            speed: raw.speed,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::localize::MISSING_TYPE_LABEL;

    const SAMPLE: &str = "\
pokedex_number,name,japanese_name,hp,attack,defense,sp_attack,sp_defense,speed,type1,type2
1,Bulbasaur,フシギダネFushigidane,45,49,49,65,65,45,grass,poison
4,Charmander,ヒトカゲHitokage,39,52,43,60,50,65,fire,
";

    #[test]
    fn parses_and_localises_rows() {
        let ds = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);

        let bulbasaur = &ds.records[0];
        assert_eq!(bulbasaur.dex, 1);
        assert_eq!(bulbasaur.display_name, "フシギダネ");
        assert_eq!(bulbasaur.type1, "くさ");
        assert_eq!(bulbasaur.type2, "どく");
        assert_eq!(bulbasaur.stats.attack, 49);

        let charmander = &ds.records[1];
        assert_eq!(charmander.type1, "ほのお");
        assert_eq!(charmander.type2, MISSING_TYPE_LABEL);
    }

    #[test]
    fn display_names_are_pure_katakana() {
        let ds = read_records(SAMPLE.as_bytes()).unwrap();
        for p in &ds.records {
            assert!(!p.display_name.is_empty());
            assert!(p
                .display_name
                .chars()
                .all(|c| ('\u{30A1}'..='\u{30FF}').contains(&c)));
        }
    }

    #[test]
    fn row_without_katakana_is_an_error() {
        let csv = "\
pokedex_number,name,japanese_name,hp,attack,defense,sp_attack,sp_defense,speed,type1,type2
1,Bulbasaur,Fushigidane,45,49,49,65,65,45,grass,poison
";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("no katakana name"));
    }

    #[test]
    fn empty_file_is_an_error() {
        let csv =
            "pokedex_number,name,japanese_name,hp,attack,defense,sp_attack,sp_defense,speed,type1,type2\n";
        assert!(read_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn extracts_first_katakana_run() {
        assert_eq!(extract_katakana("フシギダネFushigidane"), Some("フシギダネ"));
        assert_eq!(extract_katakana("abcカビゴンxyzピカチュウ"), Some("カビゴン"));
        assert_eq!(extract_katakana("no kana here"), None);
    }
}
