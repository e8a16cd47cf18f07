// VidScope - core/mod.rs
//
// Core layer: domain models and the service client.
// Dependencies: util layer only. Must NOT depend on: app, ui.

pub mod api;
pub mod model;
