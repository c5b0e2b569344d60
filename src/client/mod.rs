//! Analysis service clients.
//!
//! [`AnalysisBackend`] is the only way results enter the crate. The live
//! implementation is [`HttpBackend`]; [`FileBackend`] replays a saved
//! response for offline rendering.

mod file;
mod http;
mod traits;

pub use file::FileBackend;
pub use http::{extract_error_message, interpret_response, HttpBackend, HttpBackendConfig};
pub use traits::AnalysisBackend;
