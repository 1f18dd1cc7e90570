//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod movement;
mod panic;
mod perception;

pub use movement::*;
pub use panic::*;
pub use perception::*;
