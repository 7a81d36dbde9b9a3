// Adapters layer: concrete implementations for external systems
// (Steam Web API over HTTP, file-backed account persistence).

pub mod steam;
pub mod store;
