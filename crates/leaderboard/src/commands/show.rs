use anyhow::Result;
use leaderboard_core::config::Config;
use leaderboard_core::table::SortBy;

use super::load_leaderboard;
use crate::ux::format_table;

/// Loads the results and prints the leaderboard, optionally sorted by a column id.
pub async fn execute(
    config: Config,
    results: Option<String>,
    sort: Option<&str>,
    descending: bool,
) -> Result<()> {
    let board = load_leaderboard(config, results).await?;
    let sort = sort.map(|column| SortBy::new(column, descending));
    let view = board.view(sort.as_ref())?;

    let styled = console::colors_enabled();
    print!("{}", format_table(&view, styled));
    Ok(())
}
