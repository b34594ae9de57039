//! # Check Scenario
//!
//! Implements the "self check" use case.
//!
//! The scenario builds the sample network, copies it, mutates the copy through
//! a lookup handle and verifies every rendered tree against the expected
//! text. It exercises the three guarantees the inventory model makes:
//! 1. **Exact rendering** of the whole hierarchy.
//! 2. **Aliasing**: a host found by name is the host that gets printed.
//! 3. **Value semantics**: copies never share storage with their source.

use hwtree_common::inventory::Network;
use tracing::{debug, info};

use crate::error::ScenarioError;
use crate::sample;

/// Outcome of one passed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: &'static str,
    pub lines: usize,
}

/// Runs every check in order and stops at the first failure.
pub fn run() -> Result<Vec<CheckReport>, ScenarioError> {
    let mut reports: Vec<CheckReport> = Vec::new();

    let original: Network = sample::fit_network();
    reports.push(expect_tree("fixture render", &original.to_string(), sample::FIT_NETWORK_TREE)?);

    let mut copy: Network = original.clone();
    {
        let imap = copy.require_mut(sample::IMAP)?;
        reports.push(expect_tree("host lookup in copy", &imap.to_string(), sample::IMAP_HOST_TREE)?);
        imap.add_component(sample::mail_disk());
    }
    reports.push(expect_tree(
        "mutation through lookup handle",
        &copy.to_string(),
        sample::FIT_NETWORK_WITH_MAIL_DISK_TREE,
    )?);
    reports.push(expect_tree("original untouched", &original.to_string(), sample::FIT_NETWORK_TREE)?);

    let mut assigned: Network = Network::new("POKUS");
    assigned.clone_from(&original);
    reports.push(expect_tree("copy assignment", &assigned.to_string(), sample::FIT_NETWORK_TREE)?);

    info!(checks = reports.len(), "all checks passed");
    Ok(reports)
}

/// Compares a rendered tree with the expected text.
pub fn expect_tree(
    check: &'static str,
    actual: &str,
    expected: &str,
) -> Result<CheckReport, ScenarioError> {
    if actual != expected {
        return Err(ScenarioError::Mismatch {
            check,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    let lines: usize = actual.lines().count();
    debug!(check, lines, "check passed");
    Ok(CheckReport { name: check, lines })
}
