use std::thread;

use client_core::{parse_submission, FilterApiClient};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextEdit;
use shared::protocol::{join_tokens, FilterResponse};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

/// Fixed checkbox set controlling which response sections are displayed.
/// Selections persist across submissions and across errors; nothing clears
/// them except the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub alphabets: bool,
    pub numbers: bool,
    pub highest_alphabet: bool,
}

/// Display lines derived from the last response and the current selection.
///
/// Pure: an absent response yields no lines, and the output order is fixed
/// (Numbers, Alphabets, Highest alphabet) regardless of toggle order.
pub fn filtered_lines(response: Option<&FilterResponse>, filters: FilterSelection) -> Vec<String> {
    let Some(response) = response else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if filters.numbers {
        lines.push(format!("Numbers: {}", join_tokens(&response.numbers)));
    }
    if filters.alphabets {
        lines.push(format!("Alphabets: {}", join_tokens(&response.alphabets)));
    }
    if filters.highest_alphabet {
        if let Some(token) = &response.highest_alphabet {
            lines.push(format!("Highest Alphabet: {token}"));
        }
    }
    lines
}

pub struct WorkbenchApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    input: String,
    response: Option<FilterResponse>,
    error: Option<String>,
    filters: FilterSelection,
}

impl WorkbenchApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            input: String::new(),
            response: None,
            error: None,
            filters: FilterSelection::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SubmitOk(response) => {
                    self.response = Some(response);
                    self.error = None;
                }
                UiEvent::SubmitFailed { message } => {
                    self.error = Some(message.to_string());
                    self.response = None;
                }
            }
        }
    }

    fn submit(&mut self) {
        match parse_submission(&self.input) {
            Ok(payload) => {
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::Submit { payload },
                    &mut self.error,
                );
            }
            Err(err) => {
                tracing::debug!("rejected submission before dispatch: {err}");
                self.error = Some(err.user_message().to_string());
                self.response = None;
            }
        }
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("API INPUT");
            ui.add_space(8.0);

            ui.add(
                TextEdit::multiline(&mut self.input)
                    .hint_text(r#"Enter JSON input here (e.g., {"data": ["A","C","z"]})"#)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );
            ui.add_space(8.0);

            if ui.button("Submit").clicked() {
                self.submit();
            }

            if let Some(message) = &self.error {
                ui.add_space(6.0);
                ui.colored_label(ui.visuals().error_fg_color, message);
            }

            if self.response.is_some() {
                ui.add_space(10.0);
                ui.separator();

                ui.strong("Select Filters");
                ui.checkbox(&mut self.filters.alphabets, "Alphabets");
                ui.checkbox(&mut self.filters.numbers, "Numbers");
                ui.checkbox(&mut self.filters.highest_alphabet, "Highest alphabet");

                ui.add_space(10.0);
                ui.strong("Filtered Response:");
                for line in filtered_lines(self.response.as_ref(), self.filters) {
                    ui.label(line);
                }
            }
        });
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_form(ctx);

        // Keep draining worker events even when no input arrives.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub fn start_backend_bridge(
    endpoint: Url,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::SubmitFailed {
                    message: "Backend worker failed to start; restart the app",
                });
                return;
            }
        };

        runtime.block_on(async move {
            let client = FilterApiClient::new(endpoint);
            tracing::info!(endpoint = %client.endpoint(), "backend worker ready");

            // Commands drain one at a time, so overlapping submits resolve in
            // submission order and the latest outcome wins the display slot.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Submit { payload } => {
                        tracing::info!("backend: submit");
                        match client.submit(&payload).await {
                            Ok(response) => {
                                let _ = ui_tx.try_send(UiEvent::SubmitOk(response));
                            }
                            Err(err) => {
                                tracing::error!("backend: submit failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::SubmitFailed {
                                    message: err.user_message(),
                                });
                            }
                        }
                    }
                }
            }
        });
    });
}
