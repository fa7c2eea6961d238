pub mod import_service;

pub use import_service::{ImportOutcome, ImportService};
