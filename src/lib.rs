pub mod classify;
pub mod cli;
pub mod engine;
pub mod error;
pub mod reduce;
pub mod reporting;
pub mod scanner;
pub mod types;
