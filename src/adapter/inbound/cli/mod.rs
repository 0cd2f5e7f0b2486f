//! Command-line interface.

pub mod check;
pub mod command;
pub mod digest;
pub mod dispatch;
pub mod fixtures;
pub mod output;
pub mod rows;
pub mod run;
