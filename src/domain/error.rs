use thiserror::Error;

/// Erreurs possibles de la bibliothèque.
#[derive(Debug, Error)]
pub enum NetError {
    /// Erreur liée au système (I/O sur /proc, hostname…).
    #[error("system error: {0}")]
    System(String),

    /// Appel externe (ex: ifup, route) a échoué ou est introuvable.
    #[error("external command failed: {0}")]
    External(String),

    /// Erreur de parsing (table de connexions, sortie de commande).
    #[error("parse error: {0}")]
    Parse(String),

    /// DHCP n'a pas fourni d'adresse ; la sortie de l'ifup est jointe.
    #[error("error obtaining IP address\n\n{0}")]
    Dhcp(String),

    /// Fonctionnalité indisponible sur cette plateforme.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

/// Échec d'une opération de reconfiguration, aplati en message lisible.
///
/// Les opérations mutantes ne laissent jamais remonter d'erreur structurée :
/// leur contrat public est `Ok(())` ou un message destiné à l'humain.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ApplyError(pub String);

impl From<NetError> for ApplyError {
    fn from(err: NetError) -> Self {
        ApplyError(err.to_string())
    }
}
