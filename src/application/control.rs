use tracing::{debug, error};

use crate::application::query::{kernel_addr, Kind};
use crate::domain::{ApplyError, InterfacesStore, NetError, StaticConf};
use crate::infrastructure::command::CommandRunner;

/// Orchestration des transitions d'état d'interface.
///
/// Chaque opération est une séquence linéaire down → mutation → up, sans
/// retry ni rollback : en cas d'échec les étapes déjà faites restent
/// acquises et l'erreur est renvoyée aplatie en message. Le contrat public
/// est `Ok(())` ou un `ApplyError` lisible, jamais d'erreur structurée.
pub struct InterfaceController<S, R> {
    store: S,
    runner: R,
}

impl<S: InterfacesStore, R: CommandRunner> InterfaceController<S, R> {
    pub fn new(store: S, runner: R) -> Self {
        Self { store, runner }
    }

    /// Déconfigure l'interface : down, méthode `manual`, adresse remise
    /// à 0.0.0.0, up.
    pub fn unconfigure(&mut self, ifname: &str) -> Result<(), ApplyError> {
        self.apply(ifname, "unconfigure", |ctl, ifname| {
            ctl.ifdown(ifname)?;
            ctl.store.set_manual(ifname)?;
            ctl.runner.run("ifconfig", &[ifname, "0.0.0.0"])?;
            ctl.ifup(ifname)?;
            Ok(())
        })
    }

    /// Bascule l'interface en adressage statique.
    pub fn set_static(&mut self, ifname: &str, conf: &StaticConf) -> Result<(), ApplyError> {
        self.apply(ifname, "set_static", |ctl, ifname| {
            ctl.ifdown(ifname)?;
            ctl.store.set_static(ifname, conf)?;
            ctl.ifup(ifname)?;
            Ok(())
        })
    }

    /// Bascule l'interface en DHCP, puis vérifie qu'une adresse a bien
    /// été obtenue ; sinon l'échec emporte la sortie capturée de l'ifup
    /// (le cas courant est une négociation DHCP silencieusement ratée).
    pub fn set_dhcp(&mut self, ifname: &str) -> Result<(), ApplyError> {
        self.apply(ifname, "set_dhcp", |ctl, ifname| {
            ctl.ifdown(ifname)?;
            ctl.store.set_dhcp(ifname)?;
            let output = ctl.ifup(ifname)?;

            if kernel_addr(ifname, Kind::Addr).is_none() {
                return Err(NetError::Dhcp(output));
            }
            Ok(())
        })
    }

    /// Frontière d'aplatissement : toute erreur interne de la séquence est
    /// convertie ici en message, après journalisation.
    fn apply(
        &mut self,
        ifname: &str,
        op: &'static str,
        seq: impl FnOnce(&mut Self, &str) -> Result<(), NetError>,
    ) -> Result<(), ApplyError> {
        match seq(self, ifname) {
            Ok(()) => {
                debug!(ifname, op, "interface_applied");
                Ok(())
            }
            Err(err) => {
                error!(ifname, op, error = %err, "apply_error");
                Err(ApplyError::from(err))
            }
        }
    }

    fn ifup(&self, ifname: &str) -> Result<String, NetError> {
        self.runner.output("ifup", &[ifname])
    }

    fn ifdown(&self, ifname: &str) -> Result<String, NetError> {
        self.runner.output("ifdown", &[ifname])
    }
}
