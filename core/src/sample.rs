//! # Sample Inventory
//!
//! The "FIT network" used by the command line tool and the check scenario,
//! together with the exact trees it must print.

use hwtree_common::inventory::{Cpu, Disk, Host, Memory, Network};

pub const NETWORK_NAME: &str = "FIT network";
pub const PROGTEST: &str = "progtest.fit.cvut.cz";
pub const EDUX: &str = "edux.fit.cvut.cz";
pub const IMAP: &str = "imap.fit.cvut.cz";

pub const FIT_NETWORK_TREE: &str = concat!(
    "Network: FIT network\n",
    "+-Host: progtest.fit.cvut.cz\n",
    "| +-147.32.232.142\n",
    "| +-CPU, 8 cores @ 2400MHz\n",
    "| +-CPU, 8 cores @ 1200MHz\n",
    "| +-HDD, 1500 GiB\n",
    "| | +-[0]: 50 GiB, /\n",
    "| | +-[1]: 5 GiB, /boot\n",
    "| | \\-[2]: 1000 GiB, /var\n",
    "| +-SSD, 60 GiB\n",
    "| | \\-[0]: 60 GiB, /data\n",
    "| +-Memory, 2000 MiB\n",
    "| \\-Memory, 2000 MiB\n",
    "+-Host: edux.fit.cvut.cz\n",
    "| +-147.32.232.158\n",
    "| +-CPU, 4 cores @ 1600MHz\n",
    "| +-Memory, 4000 MiB\n",
    "| \\-HDD, 2000 GiB\n",
    "|   +-[0]: 100 GiB, /\n",
    "|   \\-[1]: 1900 GiB, /data\n",
    "\\-Host: imap.fit.cvut.cz\n",
    "  +-147.32.232.238\n",
    "  +-2001:718:2:2901::238\n",
    "  +-CPU, 4 cores @ 2500MHz\n",
    "  \\-Memory, 8000 MiB\n",
);

/// `imap.fit.cvut.cz` printed on its own.
pub const IMAP_HOST_TREE: &str = concat!(
    "Host: imap.fit.cvut.cz\n",
    "+-147.32.232.238\n",
    "+-2001:718:2:2901::238\n",
    "+-CPU, 4 cores @ 2500MHz\n",
    "\\-Memory, 8000 MiB\n",
);

/// The sample network after [`mail_disk`] was appended to `imap.fit.cvut.cz`.
pub const FIT_NETWORK_WITH_MAIL_DISK_TREE: &str = concat!(
    "Network: FIT network\n",
    "+-Host: progtest.fit.cvut.cz\n",
    "| +-147.32.232.142\n",
    "| +-CPU, 8 cores @ 2400MHz\n",
    "| +-CPU, 8 cores @ 1200MHz\n",
    "| +-HDD, 1500 GiB\n",
    "| | +-[0]: 50 GiB, /\n",
    "| | +-[1]: 5 GiB, /boot\n",
    "| | \\-[2]: 1000 GiB, /var\n",
    "| +-SSD, 60 GiB\n",
    "| | \\-[0]: 60 GiB, /data\n",
    "| +-Memory, 2000 MiB\n",
    "| \\-Memory, 2000 MiB\n",
    "+-Host: edux.fit.cvut.cz\n",
    "| +-147.32.232.158\n",
    "| +-CPU, 4 cores @ 1600MHz\n",
    "| +-Memory, 4000 MiB\n",
    "| \\-HDD, 2000 GiB\n",
    "|   +-[0]: 100 GiB, /\n",
    "|   \\-[1]: 1900 GiB, /data\n",
    "\\-Host: imap.fit.cvut.cz\n",
    "  +-147.32.232.238\n",
    "  +-2001:718:2:2901::238\n",
    "  +-CPU, 4 cores @ 2500MHz\n",
    "  +-Memory, 8000 MiB\n",
    "  \\-HDD, 1000 GiB\n",
    "    +-[0]: 100 GiB, system\n",
    "    +-[1]: 200 GiB, WWW\n",
    "    \\-[2]: 700 GiB, mail\n",
);

pub fn progtest_host() -> Host {
    Host::new(PROGTEST)
        .with_address("147.32.232.142")
        .with_component(Cpu::new(8, 2400))
        .with_component(Cpu::new(8, 1200))
        .with_component(
            Disk::magnetic(1500)
                .with_partition(50, "/")
                .with_partition(5, "/boot")
                .with_partition(1000, "/var"),
        )
        .with_component(Disk::solid_state(60).with_partition(60, "/data"))
        .with_component(Memory::new(2000))
        .with_component(Memory::new(2000))
}

pub fn edux_host() -> Host {
    Host::new(EDUX)
        .with_address("147.32.232.158")
        .with_component(Cpu::new(4, 1600))
        .with_component(Memory::new(4000))
        .with_component(
            Disk::magnetic(2000)
                .with_partition(100, "/")
                .with_partition(1900, "/data"),
        )
}

/// Addresses and components are interleaved on purpose; print order still
/// lists every address before the first component.
pub fn imap_host() -> Host {
    Host::new(IMAP)
        .with_address("147.32.232.238")
        .with_component(Cpu::new(4, 2500))
        .with_address("2001:718:2:2901::238")
        .with_component(Memory::new(8000))
}

pub fn fit_network() -> Network {
    let mut network = Network::new(NETWORK_NAME);
    network
        .add_host(&progtest_host())
        .add_host(&edux_host())
        .add_host(&imap_host());
    network
}

/// Disk appended to `imap.fit.cvut.cz` through a lookup handle.
pub fn mail_disk() -> Disk {
    Disk::magnetic(1000)
        .with_partition(100, "system")
        .with_partition(200, "WWW")
        .with_partition(700, "mail")
}
