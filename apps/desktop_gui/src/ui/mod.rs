//! UI layer: app shell and form rendering.

pub mod app;

pub use app::WorkbenchApp;
