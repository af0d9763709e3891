use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use leaderboard_core::config::Config;
use leaderboard_core::render::render_html;
use tracing::info;

use super::load_leaderboard;
use crate::ux::{MessageType, style_text};

/// Loads the results and writes the leaderboard page to `output`.
pub async fn execute(config: Config, results: Option<String>, output: &Path) -> Result<()> {
    let board = load_leaderboard(config, results).await?;
    let html = render_html(&board, None, Utc::now())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(output = %output.display(), "Wrote leaderboard page");

    eprintln!(
        "{}",
        style_text(
            &format!("◼ Wrote {}.", output.display()),
            MessageType::Footer
        )
    );
    Ok(())
}
