//! Core types and definitions for the blaster simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, actor components, commands, sound cues, the score ledger,
//! frame snapshots, and tuning constants. It has no dependency on any
//! rendering, input, or audio backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
