use std::path::PathBuf;

/// Emplacements des surfaces noyau/FS consultées.
///
/// Injectables à la construction pour substituer des fixtures en test ;
/// les valeurs par défaut sont les chemins Linux usuels.
#[derive(Debug, Clone)]
pub struct NetPaths {
    /// Répertoire des tables réseau du noyau (tcp, tcp6, udp, dev).
    pub proc_net: PathBuf,
    /// Resolver global de repli.
    pub resolv_conf: PathBuf,
    /// Répertoire resolvconf des resolvers générés par interface (optionnel).
    pub resolvconf_run: PathBuf,
}

impl Default for NetPaths {
    fn default() -> Self {
        Self {
            proc_net: PathBuf::from("/proc/net"),
            resolv_conf: PathBuf::from("/etc/resolv.conf"),
            resolvconf_run: PathBuf::from("/etc/resolvconf/run/interface"),
        }
    }
}
