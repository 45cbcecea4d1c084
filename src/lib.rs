//! PitchPerfect Core - Objection Detection and Coaching Engine
//!
//! This crate implements the rule-based objection detection and
//! response-selection engine behind the PitchPerfect sales-pitch
//! practice product, together with the credit-gated coaching flow
//! that surrounds it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
