//! Command-line front end: argument parsing, logger setup and the run loop.
pub mod app;
pub mod args;
pub mod logging;
