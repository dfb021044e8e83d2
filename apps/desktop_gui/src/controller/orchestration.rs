//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    error_slot: &mut Option<String>,
) {
    let cmd_name = match &cmd {
        BackendCommand::Submit { .. } => "submit",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *error_slot = Some("Submission queue is full; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            *error_slot = Some(
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string(),
            );
        }
    }
}
