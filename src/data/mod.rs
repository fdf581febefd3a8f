/// Data layer: record types, loading, and crop/year filtering.
///
/// Architecture:
/// ```text
///     crops.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CropTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ CropTable  │  Vec<CropRecord>, source order
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  crop + year range → new CropTable
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
