//! Infrastructure configuration modules.

pub mod digest;
pub mod logging;
pub mod settings;
pub mod source;
pub mod telegram;
