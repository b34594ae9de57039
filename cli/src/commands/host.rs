use anyhow::Context;
use hwtree_common::config::Config;
use hwtree_common::inventory::{Host, Network};
use hwtree_core::sample;
use tracing::info;

use crate::terminal::print;

pub fn host(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let network: Network = sample::fit_network();
    let host: &Host = network.require(name)?;
    info!(
        host = host.name(),
        addresses = host.addresses().len(),
        components = host.components().len(),
        "host found"
    );

    print::header("host", cfg);
    print::tree(&host.to_string()).context("failed to write tree to stdout")?;
    print::fat_separator(cfg);
    Ok(())
}
