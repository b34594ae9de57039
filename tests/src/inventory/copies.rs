#![cfg(test)]
use crate::util::disk_mut;
use hwtree_common::inventory::{Cpu, Disk, Host, Memory, Network};
use hwtree_core::sample;
use pretty_assertions::assert_eq;

#[test]
fn network_copy_is_independent() {
    let original: Network = sample::fit_network();
    let mut copy: Network = original.clone();

    copy.find_mut(sample::PROGTEST)
        .unwrap()
        .add_address("10.0.0.1")
        .add_component(Memory::new(1));
    disk_mut(copy.find_mut(sample::EDUX).unwrap(), 2).add_partition(1, "/tmp");

    assert_eq!(original.to_string(), sample::FIT_NETWORK_TREE);
    assert_ne!(copy.to_string(), sample::FIT_NETWORK_TREE);
}

#[test]
fn mutation_through_handle_reaches_only_its_network() {
    let before: Network = sample::fit_network();
    let mut network: Network = before.clone();

    network
        .find_mut(sample::IMAP)
        .unwrap()
        .add_component(sample::mail_disk());

    assert_eq!(network.to_string(), sample::FIT_NETWORK_WITH_MAIL_DISK_TREE);
    assert_eq!(before.to_string(), sample::FIT_NETWORK_TREE);
}

#[test]
fn clone_from_replaces_previous_content() {
    let source: Network = sample::fit_network();
    let mut target: Network = Network::new("POKUS");
    target.add_host(&Host::new("stale"));

    target.clone_from(&source);
    assert!(target.find("stale").is_none());
    assert_eq!(target.to_string(), sample::FIT_NETWORK_TREE);

    target.find_mut(sample::EDUX).unwrap().add_component(Cpu::new(1, 1));
    assert_eq!(source.to_string(), sample::FIT_NETWORK_TREE);
}

#[test]
fn host_copy_is_independent() {
    let original: Host = sample::progtest_host();
    let mut copy: Host = original.clone();

    copy.add_address("10.0.0.9");
    disk_mut(&mut copy, 2).add_partition(10, "/srv");

    assert_eq!(original, sample::progtest_host());
    assert_eq!(copy.addresses().len(), 2);
    assert_eq!(copy.components()[2].as_disk().unwrap().partitions().len(), 4);
}

#[test]
fn disk_given_to_host_is_a_copy() {
    let mut disk: Disk = Disk::magnetic(500).with_partition(100, "/");
    let mut host = Host::new("store");
    host.add_component(&disk);

    disk.add_partition(400, "/home");
    assert_eq!(host.to_string(), "Host: store\n\\-HDD, 500 GiB\n  \\-[0]: 100 GiB, /\n");

    disk_mut(&mut host, 0).add_partition(400, "/home");
    assert_eq!(
        host.to_string(),
        "Host: store\n\\-HDD, 500 GiB\n  +-[0]: 100 GiB, /\n  \\-[1]: 400 GiB, /home\n"
    );
}

#[test]
fn host_added_to_network_is_a_copy() {
    let mut host: Host = sample::imap_host();
    let mut network = Network::new("n");
    network.add_host(&host);

    host.add_component(sample::mail_disk());
    assert_eq!(network.find(sample::IMAP).unwrap(), &sample::imap_host());
}
