/// Data layer: core types, loading, derivation, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → RawTable, validate columns, coerce year
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────────┐
///   │ countries / producers  │  country flags + vocabulary, producer column
///   └───────────────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ FilmDataset   │  Vec<FilmRecord>, CountryIndex (immutable)
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range + section → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  per-view tables
///   └───────────┘
/// ```

pub mod aggregate;
pub mod countries;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod producers;
