//! Game systems organized by domain.
//!
//! - `triggers`: the ordered trigger backlog and detection handling
//! - `panic`: the panic-level state machine and its effects table
//! - `movement`: direct and panic-delayed movement input

pub mod movement;
pub mod panic;
pub mod triggers;

// Re-export commonly used items
pub use movement::{DelayedMovement, MoveDirection};
pub use panic::{PanicEffects, PanicState};
pub use triggers::TriggerRegistry;
