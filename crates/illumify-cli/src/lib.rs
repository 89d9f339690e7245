//! Library side of the `illumify` command line tool.

pub mod logging;
pub mod report;
