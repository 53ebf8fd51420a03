//! Reusable form controls

mod button;
mod input;

pub use button::*;
pub use input::*;
