// VidScope - ui/panels/mod.rs

pub mod record;
pub mod toast;
pub mod upload;
