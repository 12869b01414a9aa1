//! Command line front end for describing recurrence rules.

pub mod cli;
pub mod error;
