use super::localize;

// ---------------------------------------------------------------------------
// Stat – one of the six base-stat columns
// ---------------------------------------------------------------------------

/// The six numeric base stats carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    /// All stats in dataset column order.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    /// The CSV column name.
    pub fn column(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpAttack => "sp_attack",
            Stat::SpDefense => "sp_defense",
            Stat::Speed => "speed",
        }
    }

    /// The localised display label.
    pub fn label(self) -> &'static str {
        localize::column_label(self.column())
    }
}

// ---------------------------------------------------------------------------
// Pokemon – one row of the dataset
// ---------------------------------------------------------------------------

/// The six base stats of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// A single Pokémon (one row of the source CSV), already localised.
#[derive(Debug, Clone)]
pub struct Pokemon {
    /// National dex number.
    pub dex: u32,
    /// English name.
    pub name: String,
    /// Katakana display name extracted from the raw `japanese_name` field.
    pub display_name: String,
    /// Localised primary type.
    pub type1: String,
    /// Localised secondary type (sentinel label when absent).
    pub type2: String,
    pub stats: BaseStats,
}

// ---------------------------------------------------------------------------
// PokemonDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with a precomputed primary-type tally.
#[derive(Debug, Clone)]
pub struct PokemonDataset {
    /// All records (rows).
    pub records: Vec<Pokemon>,
    /// Count of records per primary type, in first-appearance order.
    pub type1_counts: Vec<(String, usize)>,
}

impl PokemonDataset {
    /// Build the type tally from the loaded records.
    pub fn from_records(records: Vec<Pokemon>) -> Self {
        let mut type1_counts: Vec<(String, usize)> = Vec::new();

        for p in &records {
            match type1_counts.iter_mut().find(|(t, _)| *t == p.type1) {
                Some((_, n)) => *n += 1,
                None => type1_counts.push((p.type1.clone(), 1)),
            }
        }

        PokemonDataset {
            records,
            type1_counts,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one stat across all records, in row order.
    pub fn stat_values(&self, stat: Stat) -> Vec<f64> {
        self.records
            .iter()
            .map(|p| p.stats.get(stat) as f64)
            .collect()
    }

    /// Values of one stat grouped by primary type, in first-appearance order.
    pub fn stat_by_type1(&self, stat: Stat) -> Vec<(String, Vec<f64>)> {
        let mut groups: Vec<(String, Vec<f64>)> = self
            .type1_counts
            .iter()
            .map(|(t, _)| (t.clone(), Vec::new()))
            .collect();

        for p in &self.records {
            if let Some((_, vals)) = groups.iter_mut().find(|(t, _)| *t == p.type1) {
                vals.push(p.stats.get(stat) as f64);
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dex: u32, name: &str, type1: &str, attack: u32) -> Pokemon {
        Pokemon {
            dex,
            name: name.to_string(),
            display_name: name.to_string(),
            type1: type1.to_string(),
            type2: "タイプなし".to_string(),
            stats: BaseStats {
                hp: 50,
                attack,
                defense: 50,
                sp_attack: 50,
                sp_defense: 50,
                speed: 50,
            },
        }
    }

    #[test]
    fn tally_preserves_first_appearance_order() {
        let ds = PokemonDataset::from_records(vec![
            record(1, "A", "くさ", 49),
            record(4, "B", "ほのお", 52),
            record(2, "C", "くさ", 62),
        ]);
        assert_eq!(
            ds.type1_counts,
            vec![("くさ".to_string(), 2), ("ほのお".to_string(), 1)]
        );
    }

    #[test]
    fn grouped_stats_follow_tally_order() {
        let ds = PokemonDataset::from_records(vec![
            record(1, "A", "くさ", 49),
            record(4, "B", "ほのお", 52),
            record(2, "C", "くさ", 62),
        ]);
        let groups = ds.stat_by_type1(Stat::Attack);
        assert_eq!(groups[0], ("くさ".to_string(), vec![49.0, 62.0]));
        assert_eq!(groups[1], ("ほのお".to_string(), vec![52.0]));
    }

    #[test]
    fn stat_accessors_agree() {
        let p = record(1, "A", "くさ", 49);
        assert_eq!(p.stats.get(Stat::Attack), 49);
        assert_eq!(Stat::Attack.label(), "こうげき");
        assert_eq!(Stat::Hp.column(), "hp");
    }
}
