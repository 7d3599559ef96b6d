//! Command line glue around the reconstruction engine: loading share files, running the reconstruction in the
//! configured arithmetic domain and presenting the result.

pub mod app;
pub mod config;
pub mod loader;
pub mod recovery;
pub mod report;
pub mod telemetry;
