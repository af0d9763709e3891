//! HTML page rendering.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use tracing::{debug, error};

use crate::assets::get_page_template;
use crate::table::{Leaderboard, SortBy};

const TEMPLATE_NAME: &str = "leaderboard.html";

/// Renders the leaderboard page: sortable table followed by the citation box.
///
/// Values are HTML escaped by the template environment.
pub fn render_html(
    board: &Leaderboard,
    sort: Option<&SortBy>,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let view = board.view(sort)?;
    debug!(rows = view.rows.len(), "Render leaderboard page");

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, get_page_template())
        .context("Invalid page template")?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;

    let config = board.config();
    tmpl.render(context! {
        title => &config.title,
        header_rows => &view.header_rows,
        rows => &view.rows,
        citation => config.citation.trim(),
        generated_at => generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    })
    .inspect_err(|e| error!(error = ?e, "Failed to render leaderboard page"))
    .context("Template rendering failed")
}
