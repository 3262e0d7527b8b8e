//! Core types and definitions for the SKYWATCH radar-intercept simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, game state, events, constants and the static
//! configuration tables. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tables;
pub mod types;
pub mod views;

#[cfg(test)]
mod tests;
