/// Data layer: acquisition, parsing, localisation, and filtering.
///
/// Architecture:
/// ```text
///  remote CSV
///        │  (first run only)
///        ▼
///   ┌──────────┐
///   │  fetch    │  HTTP GET → pokemon.csv on disk
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, extract katakana names,
///   └──────────┘  localise via the `localize` tables
///        │
///        ▼
///   ┌───────────────┐
///   │ PokemonDataset │  Vec<Pokemon>, per-type tally
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  name substring search → matching indices
///   └──────────┘
/// ```

pub mod fetch;
pub mod filter;
pub mod loader;
pub mod localize;
pub mod model;
