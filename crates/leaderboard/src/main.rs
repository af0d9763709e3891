use std::process::ExitCode;

use leaderboard::commands::run_app;
use leaderboard::ux;

#[tokio::main]
async fn main() -> ExitCode {
    match run_app().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ux::present_error(e);
            ExitCode::FAILURE
        }
    }
}
