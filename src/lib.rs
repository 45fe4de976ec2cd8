pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod notify;
pub mod service;
pub mod settlement;
pub mod storage;

pub use error::SplitError;
pub use service::EventService;
pub use settlement::compute_settlement;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
