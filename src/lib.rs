pub mod api_connection;
pub mod cli;
pub mod config;
pub mod extractor;
pub mod generation;
pub mod normalizer;
pub mod orchestrator;
pub mod prompt;
pub mod reconcile;
pub mod request;
pub mod server;
