use hwtree_common::inventory::{Component, Disk, Host, Network};

/// Lines of a rendered tree, without the trailing newline.
pub fn lines(tree: &str) -> Vec<&str> {
    tree.lines().collect()
}

/// Stored disk at `idx` of `host`, mutable.
pub fn disk_mut(host: &mut Host, idx: usize) -> &mut Disk {
    host.component_mut(idx)
        .and_then(Component::as_disk_mut)
        .unwrap_or_else(|| panic!("component {idx} is not a disk"))
}

pub fn network_of(name: &str, hosts: &[Host]) -> Network {
    let mut network = Network::new(name);
    for host in hosts {
        network.add_host(host);
    }
    network
}
