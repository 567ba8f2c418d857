//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hockey_stats::{
    cli::{load_rates, Commands, HockeyStats},
    commands::{
        salary_report::{handle_salary_report, SalaryReportParams},
        stats_report::{handle_stats_report, StatsReportParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    sensible_env_logger::init!();
    let app = HockeyStats::parse();

    match app.command {
        Commands::Salary {
            nickname,
            cancelled,
            rates,
            common,
        } => {
            let config = common
                .report_config()?
                .with_cancelled_policy(cancelled)
                .with_rates(load_rates(rates.as_deref())?);

            handle_salary_report(SalaryReportParams {
                api_url: common.api_url,
                nickname,
                config,
                as_json: common.json,
            })
            .await?
        }

        Commands::Stats { nicknames, common } => {
            handle_stats_report(StatsReportParams {
                api_url: common.api_url.clone(),
                nicknames,
                config: common.report_config()?,
                as_json: common.json,
            })
            .await?
        }
    }

    Ok(())
}
