//! Request orchestration and the search state it owns.

mod orchestrator;
mod state;

pub use orchestrator::{Completion, Orchestrator, Session, Ticket};
pub use state::{RequestId, SearchState};
