/// Data layer: core types, loading, partitioning and statistics.
///
/// Architecture:
/// ```text
///  meting1.csv   meting2.csv
///        │            │
///        ▼            ▼
///   ┌──────────────────────┐
///   │  loader               │  parse + concat → MeasurementTable
///   └──────────────────────┘
///        │
///        ▼
///   ┌──────────────────────┐
///   │  filter               │  threshold → Partition (below / above)
///   └──────────────────────┘
///        │
///        ▼
///   ┌──────────────────────┐
///   │  stats                │  mean / min / max per group
///   └──────────────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
