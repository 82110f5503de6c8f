//! Property schema: slot definitions and declaration resolution.

mod resolve;
mod slot;

pub use resolve::{Declaration, resolve};
pub use slot::{PropertySlot, SlotDef, SlotKind};
