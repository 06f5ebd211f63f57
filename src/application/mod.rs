pub mod control;
pub mod logging;
pub mod query;

use tracing::debug;

use crate::domain::{ConnectionRecord, InterfacesStore, IpConf, NetError, NetPaths};
use crate::infrastructure::command::CommandRunner;
use crate::infrastructure::proc_net;

pub use control::InterfaceController;
pub use query::IfaceQuery;

/// Façade de lecture de l'état réseau de l'hôte.
///
/// Compose les requêtes d'adresses, de routes et de resolver en une seule
/// surface, et expose l'énumération des interfaces et des connexions.
/// Tout est synchrone et sans état : chaque appel relit le noyau.
pub struct NetworkInventory<S, R> {
    paths: NetPaths,
    store: S,
    runner: R,
}

impl<S: InterfacesStore, R: CommandRunner> NetworkInventory<S, R> {
    pub fn new(store: S, runner: R) -> Self {
        Self::with_paths(NetPaths::default(), store, runner)
    }

    /// Variante avec chemins injectés (fixtures de test).
    pub fn with_paths(paths: NetPaths, store: S, runner: R) -> Self {
        Self {
            paths,
            store,
            runner,
        }
    }

    /// Les cinq faits d'une interface, sous forme d'accesseurs explicites.
    pub fn iface<'a>(&'a self, ifname: &'a str) -> IfaceQuery<'a, S, R> {
        IfaceQuery {
            ifname,
            paths: &self.paths,
            store: &self.store,
            runner: &self.runner,
        }
    }

    /// Configuration IP complète de l'interface (adresse, masque,
    /// passerelle, resolver). Les faits absents valent `None`.
    pub fn ipconf(&self, ifname: &str) -> IpConf {
        let conf = self.iface(ifname).ipconf();
        debug!(ifname, addr = ?conf.addr, gateway = ?conf.gateway, "ipconf");
        conf
    }

    /// Méthode de configuration persistée (`static`, `dhcp`, `manual`…)
    /// depuis l'entrée `iface <nom> inet <méthode>` du magasin ; `None`
    /// si l'interface n'a pas d'entrée.
    pub fn ifmethod(&self, ifname: &str) -> Option<String> {
        let conf = self.store.conf(ifname).ok().flatten()?;
        for line in conf.lines() {
            let mut fields = line.split_whitespace();
            if fields.next() == Some("iface")
                && fields.next() == Some(ifname)
                && fields.next() == Some("inet")
            {
                return fields.next().map(str::to_string);
            }
        }
        None
    }

    /// Noms de toutes les interfaces connues (up et down), dans l'ordre
    /// de la table des périphériques.
    pub fn ifnames(&self) -> Result<Vec<String>, NetError> {
        proc_net::collect_ifnames(&self.paths.proc_net)
    }

    /// Hostname du système.
    pub fn hostname(&self) -> Result<String, NetError> {
        #[cfg(target_os = "linux")]
        {
            let name = nix::unistd::gethostname()
                .map_err(|e| NetError::System(format!("gethostname: {e}")))?;
            Ok(name.to_string_lossy().into_owned())
        }
        #[cfg(not(target_os = "linux"))]
        {
            Err(NetError::Unsupported("hostname is only supported on Linux"))
        }
    }

    /// Connexions actives des tables tcp, tcp6 et udp, dans cet ordre.
    /// Une ligne malformée fait échouer l'énumération entière.
    pub fn connections(&self) -> Result<Vec<ConnectionRecord>, NetError> {
        let records = proc_net::collect_connections(&self.paths.proc_net)?;
        debug!(count = records.len(), "connections_enumerated");
        Ok(records)
    }
}
