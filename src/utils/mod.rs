//! Utility functions for file handling, logging and tests

pub mod io;
pub mod logging;
pub mod test;
