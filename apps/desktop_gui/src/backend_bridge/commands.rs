//! Backend commands queued from UI to backend worker.

use serde_json::Value;

pub enum BackendCommand {
    Submit { payload: Value },
}
