use std::fs;
use std::net::IpAddr;
use std::path::Path;

use crate::domain::{InterfacesStore, NetPaths};

/// Resolver DNS actif de l'interface, par précédence fixe :
/// config statique, puis resolvconf dynamique, puis repli global.
/// Première source concluante gagne, aucune fusion.
pub fn nameserver<S: InterfacesStore>(
    store: &S,
    paths: &NetPaths,
    ifname: &str,
) -> Option<IpAddr> {
    // 1. directive statique dans l'entrée de l'interface
    if let Ok(Some(conf)) = store.conf(ifname) {
        for line in conf.lines() {
            let line = line.trim();
            if line.starts_with("dns-nameservers") {
                return line.split_whitespace().nth(1).and_then(|t| t.parse().ok());
            }
        }
    }

    // 2. resolvers générés par resolvconf (DHCP) ; le répertoire peut manquer
    if let Ok(entries) = fs::read_dir(&paths.resolvconf_run) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with(ifname) || name.ends_with(".inet") {
                continue;
            }
            if let Some(ns) = parse_resolv(&entry.path()) {
                return Some(ns);
            }
        }
    }

    // 3. repli global
    parse_resolv(&paths.resolv_conf)
}

/// Premier argument de la première ligne `nameserver` du fichier,
/// `None` si le fichier manque ou ne contient pas de directive.
pub fn parse_resolv(path: &Path) -> Option<IpAddr> {
    let content = fs::read_to_string(path).ok()?;
    for line in content.lines() {
        if line.starts_with("nameserver") {
            return line.split_whitespace().nth(1).and_then(|t| t.parse().ok());
        }
    }
    None
}
