use anyhow::Context;
use hwtree_common::config::Config;
use hwtree_common::inventory::Network;
use hwtree_core::sample;
use tracing::info;

use crate::terminal::print;

pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let network: Network = sample::fit_network();
    info!(network = network.name(), hosts = network.len(), "rendering network");

    print::header("inventory", cfg);
    print::tree(&network.to_string()).context("failed to write tree to stdout")?;
    print::fat_separator(cfg);
    Ok(())
}
