//! Parsers for the pieces of a management frame.

mod components;
mod frame_types;

pub use components::*;
pub use frame_types::*;
