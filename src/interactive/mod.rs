//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, Message, MessageStyle, WordSource, run_tui};
