// VidScope - app/mod.rs
//
// Application layer: state management and remote call orchestration.
// Dependencies: core layer. Must NOT depend on: ui.

pub mod state;
pub mod transfer;
