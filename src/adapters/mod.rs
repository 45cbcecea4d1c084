//! Adapters - concrete implementations of the ports.

pub mod credits;
pub mod selection;
