use crate::domain::{NetError, StaticConf};

/// Contrat du magasin de configuration persistante des interfaces
/// (le fichier interfaces lui-même appartient au collaborateur externe).
///
/// Synchrone ; chaque mutation persiste immédiatement.
pub trait InterfacesStore {
    /// Texte de configuration de l'interface, `None` si aucune entrée.
    fn conf(&self, ifname: &str) -> Result<Option<String>, NetError>;

    /// Marque l'entrée de l'interface en méthode `manual`.
    fn set_manual(&mut self, ifname: &str) -> Result<(), NetError>;

    /// Écrit un bloc statique (adresse, masque, passerelle, resolver).
    fn set_static(&mut self, ifname: &str, conf: &StaticConf) -> Result<(), NetError>;

    /// Marque l'entrée de l'interface en méthode `dhcp`.
    fn set_dhcp(&mut self, ifname: &str) -> Result<(), NetError>;
}
