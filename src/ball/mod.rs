//! Ball module - state, motion modes, and physics

mod components;
mod physics;

pub use components::*;
