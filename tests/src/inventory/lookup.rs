#![cfg(test)]
use crate::util::network_of;
use hwtree_common::inventory::{Host, Memory, Network};
use hwtree_common::InventoryError;
use hwtree_core::sample;
use pretty_assertions::assert_eq;

#[test]
fn every_added_host_is_found() {
    let network: Network = sample::fit_network();
    for name in [sample::PROGTEST, sample::EDUX, sample::IMAP] {
        let host: &Host = network.find(name).unwrap();
        assert_eq!(host.name(), name);
    }
}

#[test]
fn unknown_name_is_not_found() {
    let mut network: Network = sample::fit_network();
    assert!(network.find("nonexistent.fit.cvut.cz").is_none());
    assert!(network.find_mut("").is_none());
    assert!(matches!(
        network.require("nonexistent.fit.cvut.cz"),
        Err(InventoryError::HostNotFound { .. })
    ));
}

#[test]
fn lookup_handle_aliases_printed_host() {
    let mut network: Network = sample::fit_network();
    network.find_mut(sample::EDUX).unwrap().add_component(Memory::new(16));

    let printed: &Host = &network.hosts()[1];
    assert_eq!(printed.components().len(), 4);
    assert_eq!(network.find(sample::EDUX).unwrap(), printed);
}

#[test]
fn duplicate_name_resolves_to_newest() {
    let network = network_of(
        "dup",
        &[
            Host::new("twin").with_address("old"),
            Host::new("other"),
            Host::new("twin").with_address("new"),
        ],
    );

    assert_eq!(network.len(), 3);
    assert_eq!(network.find("twin").unwrap().addresses(), ["new"]);
    assert_eq!(
        network.to_string(),
        "Network: dup\n\
         +-Host: twin\n\
         | +-old\n\
         +-Host: other\n\
         \\-Host: twin\n  \
         +-new\n"
    );
}

#[test]
fn duplicate_name_mutation_only_hits_newest() {
    let mut network = network_of("dup", &[Host::new("twin"), Host::new("twin")]);
    network.find_mut("twin").unwrap().add_address("10.0.0.1");

    assert!(network.hosts()[0].addresses().is_empty());
    assert_eq!(network.hosts()[1].addresses(), ["10.0.0.1"]);
}

#[test]
fn lookup_survives_copy() {
    let original: Network = sample::fit_network();
    let copy: Network = original.clone();
    assert_eq!(copy.find(sample::IMAP), original.find(sample::IMAP));
    assert_eq!(copy.len(), original.len());
}
