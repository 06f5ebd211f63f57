use std::net::{IpAddr, Ipv4Addr};

use crate::domain::{InterfacesStore, IpConf, NetPaths};
use crate::infrastructure::command::CommandRunner;
use crate::infrastructure::{resolver, route};

#[cfg(target_os = "linux")]
use crate::infrastructure::ioctl::{self, AddrKind};

/// Surface d'accès uniforme aux cinq faits connus d'une interface.
///
/// Chaque accesseur refait sa requête à l'appel, rien n'est mis en cache :
/// l'état est re-dérivable à tout moment depuis le noyau. Un échec
/// d'interrogation (interface down, inexistante, droits) donne `None`.
pub struct IfaceQuery<'a, S, R> {
    pub(crate) ifname: &'a str,
    pub(crate) paths: &'a NetPaths,
    pub(crate) store: &'a S,
    pub(crate) runner: &'a R,
}

impl<S: InterfacesStore, R: CommandRunner> IfaceQuery<'_, S, R> {
    pub fn ifname(&self) -> &str {
        self.ifname
    }

    pub fn addr(&self) -> Option<Ipv4Addr> {
        kernel_addr(self.ifname, Kind::Addr)
    }

    pub fn netmask(&self) -> Option<Ipv4Addr> {
        kernel_addr(self.ifname, Kind::Netmask)
    }

    pub fn brdaddr(&self) -> Option<Ipv4Addr> {
        kernel_addr(self.ifname, Kind::Brdaddr)
    }

    pub fn gateway(&self) -> Option<Ipv4Addr> {
        route::default_gateway(self.runner, self.ifname)
    }

    pub fn nameserver(&self) -> Option<IpAddr> {
        resolver::nameserver(self.store, self.paths, self.ifname)
    }

    /// Les quatre faits de configuration IP d'un coup.
    pub fn ipconf(&self) -> IpConf {
        IpConf {
            addr: self.addr(),
            netmask: self.netmask(),
            gateway: self.gateway(),
            nameserver: self.nameserver(),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) enum Kind {
    Addr,
    Netmask,
    Brdaddr,
}

/// Requête ioctl, `None` hors Linux (même contrat silencieux-absent).
pub(crate) fn kernel_addr(ifname: &str, kind: Kind) -> Option<Ipv4Addr> {
    #[cfg(target_os = "linux")]
    {
        let kind = match kind {
            Kind::Addr => AddrKind::Addr,
            Kind::Netmask => AddrKind::Netmask,
            Kind::Brdaddr => AddrKind::Brdaddr,
        };
        ioctl::if_addr(ifname, kind)
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = (ifname, kind);
        None
    }
}
