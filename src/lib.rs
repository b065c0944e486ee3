// Library crate exposing modules for the binary and integration tests

pub mod cli;
pub mod client;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod recipe;
pub mod repository;
pub mod util;
