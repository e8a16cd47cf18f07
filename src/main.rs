// VidScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use vidscope::app;

pub use vidscope::core;
pub use vidscope::ui;
pub use vidscope::util;

use clap::Parser;

/// VidScope - Upload a video to an analysis service and view the result.
///
/// Pick a video file, give it a title and description, upload it, then
/// trigger server-side analysis and inspect the returned JSON.
#[derive(Parser, Debug)]
#[command(name = "VidScope", version, about)]
struct Cli {
    /// Base URL of the video service.
    #[arg(short = 's', long = "server", default_value = util::constants::DEFAULT_SERVER_URL)]
    server: String,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        server = %cli.server,
        "VidScope starting"
    );

    let state = app::state::AppState::new(cli.server);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([680.0, 760.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::VidScopeApp::new(cc, state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch VidScope GUI: {e}");
        std::process::exit(1);
    }
}
