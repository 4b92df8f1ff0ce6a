pub mod core;
pub mod diag;
pub mod error;
