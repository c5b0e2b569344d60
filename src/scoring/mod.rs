//! Score normalization, aggregation and classification.
//!
//! All functions in this module are pure. The flow is
//! `interpret` (raw JSON to typed result) → `aggregate_*` (averages) →
//! `classify` (bands), with rounding applied only when a value is displayed.

mod aggregate;
mod classify;
mod normalize;

pub use aggregate::{
    aggregate_by_methodology, aggregate_by_platform, grid_mean, overall_score, round_half_up,
    AggregateRow, MethodologyRow, PlatformRow,
};
pub use classify::{classify, Band, Rating, Trend, EXCELLENT_THRESHOLD, GOOD_THRESHOLD};
pub use normalize::{
    detect, interpret, normalize, normalize_grid, normalize_url, unwrap_envelope,
};
