//! Typed snapshots of analysis results.
//!
//! Raw service responses are untyped JSON. The scoring layer normalizes them
//! into the structures defined here, which are total over the static
//! reference lists in [`reference`]: every platform/methodology pair and
//! every URL category always has a value.

pub mod reference;
mod result;
mod table;
mod url;

pub use reference::{
    Dimension, Methodology, MethodologyId, Platform, PlatformId, UrlCategoryId, METHODOLOGIES,
    METHODOLOGY_COUNT, PLATFORMS, PLATFORM_COUNT, URL_CATEGORIES, URL_CATEGORY_COUNT,
};
pub use result::{AnalysisResult, GridAnalysis, ResultSchema};
pub use table::{ScoreCell, ScoreTable};
pub use url::{CategoryScore, OverallScore, UrlAnalysis};
