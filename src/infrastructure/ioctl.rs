//! Interrogation d'adresses par ioctl sur socket datagramme.
//!
//! Seul module du crate autorisé à faire de l'unsafe : appel ioctl brut
//! et lecture du `sockaddr_in` retourné dans l'`ifreq`.
#![allow(unsafe_code)]

use std::net::Ipv4Addr;
use std::os::fd::AsRawFd;

use nix::sys::socket::{socket, AddressFamily, SockFlag, SockType};

/// Les trois requêtes d'adresse, une par fait interrogeable.
///
/// Trois codes distincts plutôt qu'une requête combinée : chaque
/// interrogation échoue indépendamment des autres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddrKind {
    Addr,
    Netmask,
    Brdaddr,
}

impl AddrKind {
    fn request(self) -> libc::c_ulong {
        match self {
            AddrKind::Addr => libc::SIOCGIFADDR,
            AddrKind::Netmask => libc::SIOCGIFNETMASK,
            AddrKind::Brdaddr => libc::SIOCGIFBRDADDR,
        }
    }
}

/// Adresse IPv4 de l'interface pour le fait demandé, `None` sur tout échec
/// (interface inexistante, down, permission refusée) : « non configuré »
/// est un état attendu, pas une erreur.
///
/// Le socket est acquis pour la durée de l'appel et relâché dans tous les
/// cas (OwnedFd).
pub(crate) fn if_addr(ifname: &str, kind: AddrKind) -> Option<Ipv4Addr> {
    // ifr_name est limité à IFNAMSIZ-1 octets utiles.
    if ifname.is_empty() || ifname.len() >= libc::IFNAMSIZ {
        return None;
    }

    let fd = socket(
        AddressFamily::Inet,
        SockType::Datagram,
        SockFlag::empty(),
        None,
    )
    .ok()?;

    // Requête de 32 octets entièrement à zéro, nom copié en tête.
    let mut req: libc::ifreq = unsafe { std::mem::zeroed() };
    for (dst, src) in req.ifr_name.iter_mut().zip(ifname.as_bytes()) {
        *dst = *src as libc::c_char;
    }

    let rc = unsafe { libc::ioctl(fd.as_raw_fd(), kind.request() as _, &mut req) };
    if rc < 0 {
        return None;
    }

    // L'adresse occupe les 4 octets de sin_addr dans l'union retournée.
    let sin = unsafe {
        &*(std::ptr::addr_of!(req.ifr_ifru.ifru_addr) as *const libc::sockaddr_in)
    };
    Some(Ipv4Addr::from(sin.sin_addr.s_addr.to_ne_bytes()))
}
