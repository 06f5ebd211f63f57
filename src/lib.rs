//! ifstate — interroge et reconfigure l'état réseau d'un hôte Linux.
//!
//! Lecture de l'état noyau (adresses par ioctl, table de routage, resolver
//! DNS, tables de connexions /proc/net) et bascule d'une interface entre
//! adressage statique et DHCP via les outils système (`ifup`/`ifdown`).
//!
//! Le fichier interfaces et son format appartiennent au collaborateur
//! externe derrière [`InterfacesStore`] ; l'exécution de commandes passe
//! par [`CommandRunner`].
//!
//! # Examples
//! ```rust,no_run
//! use ifstate::{NetworkInventory, SystemRunner};
//! # use ifstate::{InterfacesStore, NetError, StaticConf};
//! # struct NoStore;
//! # impl InterfacesStore for NoStore {
//! #     fn conf(&self, _: &str) -> Result<Option<String>, NetError> { Ok(None) }
//! #     fn set_manual(&mut self, _: &str) -> Result<(), NetError> { Ok(()) }
//! #     fn set_static(&mut self, _: &str, _: &StaticConf) -> Result<(), NetError> { Ok(()) }
//! #     fn set_dhcp(&mut self, _: &str) -> Result<(), NetError> { Ok(()) }
//! # }
//! let inventory = NetworkInventory::new(NoStore, SystemRunner);
//! let conf = inventory.ipconf("eth0");
//! println!("eth0: {:?}", conf.addr);
//! ```

#![deny(unsafe_code)] // seul infrastructure/ioctl.rs y déroge, localement

mod application;
pub mod domain;
mod infrastructure;

pub use domain::{
    ApplyError, ConnStatus, ConnectionRecord, InterfacesStore, IpConf, NetError, NetPaths, Proto,
    StaticConf,
};

pub use application::{IfaceQuery, InterfaceController, NetworkInventory};

pub use application::logging::init_logging;

pub use infrastructure::command::{CommandRunner, SystemRunner};

// Outils de test/fuzz internes
#[cfg(any(test, feature = "internals"))]
pub mod internals {
    pub use crate::infrastructure::proc_net::{
        parse_connection_row, parse_connection_table, parse_host_port, parse_ifnames,
    };
    pub use crate::infrastructure::resolver::{nameserver, parse_resolv};
    pub use crate::infrastructure::route::parse_route_table;
}
