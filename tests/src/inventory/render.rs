#![cfg(test)]
use crate::util::{lines, network_of};
use hwtree_common::inventory::{Cpu, Disk, Host, Memory, Network};
use hwtree_common::RenderTree;
use hwtree_core::sample;
use pretty_assertions::assert_eq;

#[test]
fn fixture_network_renders_exactly() {
    let network: Network = sample::fit_network();
    assert_eq!(network.to_string(), sample::FIT_NETWORK_TREE);
    assert_eq!(network.to_tree_string(), sample::FIT_NETWORK_TREE);
}

#[test]
fn rendering_is_deterministic() {
    let network: Network = sample::fit_network();
    assert_eq!(network.to_string(), network.to_string());
}

#[test]
fn every_line_is_newline_terminated_without_trailing_space() {
    let tree: String = sample::fit_network().to_string();
    assert!(tree.ends_with('\n'));
    assert_eq!(tree.matches('\n').count(), 25);
    for line in lines(&tree) {
        assert!(!line.ends_with(' '), "trailing space in {line:?}");
    }
}

#[test]
fn glyph_rule_holds_at_every_depth() {
    let network = network_of(
        "deep",
        &[
            Host::new("first").with_component(Disk::solid_state(1).with_partition(1, "p")),
            Host::new("last")
                .with_component(Disk::magnetic(2).with_partition(1, "a").with_partition(1, "b"))
                .with_component(Disk::magnetic(3).with_partition(3, "c")),
        ],
    );

    assert_eq!(
        lines(&network.to_string()),
        vec![
            "Network: deep",
            "+-Host: first",
            "| \\-SSD, 1 GiB",
            "|   \\-[0]: 1 GiB, p",
            "\\-Host: last",
            "  +-HDD, 2 GiB",
            "  | +-[0]: 1 GiB, a",
            "  | \\-[1]: 1 GiB, b",
            "  \\-HDD, 3 GiB",
            "    \\-[0]: 3 GiB, c",
        ]
    );
}

#[test]
fn addresses_stay_middle_even_without_components() {
    let network = network_of(
        "addr",
        &[Host::new("only").with_address("10.0.0.1").with_address("10.0.0.2")],
    );
    assert_eq!(
        lines(&network.to_string()),
        vec!["Network: addr", "\\-Host: only", "  +-10.0.0.1", "  +-10.0.0.2"]
    );
}

#[test]
fn empty_collections() {
    assert_eq!(Network::new("none").to_string(), "Network: none\n");
    assert_eq!(Host::new("bare").to_string(), "Host: bare\n");
    assert_eq!(Disk::magnetic(5).to_string(), "HDD, 5 GiB\n");

    let network = network_of("one", &[Host::new("bare")]);
    assert_eq!(network.to_string(), "Network: one\n\\-Host: bare\n");
}

#[test]
fn leaf_lines_match_wire_format() {
    let host = Host::new("leaf")
        .with_component(Cpu::new(0, 0))
        .with_component(Memory::new(-1));
    assert_eq!(
        host.to_string(),
        "Host: leaf\n+-CPU, 0 cores @ 0MHz\n\\-Memory, -1 MiB\n"
    );
}
