//! Command implementations.

pub mod edit;
pub mod export;
pub mod list;
pub mod mark;
pub mod reset;
pub mod util;
