use hwtree_common::config::Config;
use hwtree_core::scenario::{self, CheckReport};
use tracing::{error, info};

use crate::terminal::print;

pub fn check(cfg: &Config) -> anyhow::Result<()> {
    print::header("self check", cfg);

    let reports: Vec<CheckReport> = match scenario::run() {
        Ok(reports) => reports,
        Err(err) => {
            error!("self check failed");
            return Err(err.into());
        }
    };

    if cfg.quiet == 0 {
        for (idx, report) in reports.iter().enumerate() {
            print::check_line(idx, report.name, report.lines);
        }
        print::fat_separator(cfg);
    }
    info!("{} checks passed", reports.len());
    Ok(())
}
