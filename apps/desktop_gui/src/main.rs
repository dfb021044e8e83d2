mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use url::Url;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::WorkbenchApp;

/// Desktop workbench for the remote JSON filter endpoint.
#[derive(Debug, Parser)]
#[command(name = "payload-workbench")]
struct Args {
    /// Filter endpoint receiving submitted payloads.
    #[arg(long, default_value = client_core::DEFAULT_ENDPOINT)]
    endpoint: Url,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(args.endpoint, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Payload Workbench")
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Payload Workbench",
        options,
        Box::new(|_cc| Ok(Box::new(WorkbenchApp::new(cmd_tx, ui_rx)))),
    )
}
