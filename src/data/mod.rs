/// Data layer: core types, loading, and the two chart pipelines.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site / booster indices
///   └──────────────┘
///        │                    │
///        ▼                    ▼
///   ┌───────────┐       ┌──────────┐
///   │ aggregate  │       │  filter   │
///   │ (pie data) │       │ (scatter) │
///   └───────────┘       └──────────┘
/// ```
///
/// The dataset is immutable after load; both pipelines are pure functions of
/// the dataset and the user's selection, so every interaction is independent
/// and idempotent.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
