//! Application layer - use-case handlers orchestrating the domain.

pub mod handlers;
