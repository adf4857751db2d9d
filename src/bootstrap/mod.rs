//! API Hub playground bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. For now the only job is the HTTP
//! API server.
pub mod app;
pub mod jobs;
pub mod logging;
