mod presenter;
mod progress;

pub use presenter::{MessageType, format_load_summary, format_table, style_text};
pub use progress::LoadingSpinner;

pub fn present_error(error: anyhow::Error) {
    eprintln!("\n{}", format_error(&error));
}

fn format_error(error: &anyhow::Error) -> String {
    format!("{} {error:#}", style_text("ERROR:", MessageType::Error))
}
