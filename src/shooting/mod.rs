//! Shooting module - swing input, charge, and shot power

mod charge;
mod swing;

pub use charge::*;
pub use swing::*;
