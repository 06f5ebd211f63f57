use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration IP complète d'une interface, telle que vue par le noyau.
///
/// Chaque champ absent signifie « non configuré », jamais une erreur.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IpConf {
    pub addr: Option<Ipv4Addr>,
    pub netmask: Option<Ipv4Addr>,
    pub gateway: Option<Ipv4Addr>,
    /// Le resolver peut être IPv6 (resolv.conf), contrairement aux champs ioctl.
    pub nameserver: Option<IpAddr>,
}

/// Protocole d'une table de connexions du noyau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Proto {
    Tcp,
    Tcp6,
    Udp,
}

impl Proto {
    /// Nom de la table sous /proc/net, dans l'ordre d'énumération fixe.
    pub const ALL: [Proto; 3] = [Proto::Tcp, Proto::Tcp6, Proto::Udp];

    pub fn table(self) -> &'static str {
        match self {
            Proto::Tcp => "tcp",
            Proto::Tcp6 => "tcp6",
            Proto::Udp => "udp",
        }
    }
}

impl fmt::Display for Proto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// État d'une connexion, décodé depuis le code hexadécimal du noyau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConnStatus {
    Established,
    Listening,
    Waiting,
    Unknown,
}

impl ConnStatus {
    /// `01`/`0A`/`10` sont les seuls codes reconnus ; tout le reste est Unknown.
    pub fn from_hex(code: &str) -> Self {
        match code {
            "01" => ConnStatus::Established,
            "0A" => ConnStatus::Listening,
            "10" => ConnStatus::Waiting,
            _ => ConnStatus::Unknown,
        }
    }
}

impl fmt::Display for ConnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnStatus::Established => "ESTABLISHED",
            ConnStatus::Listening => "LISTENING",
            ConnStatus::Waiting => "WAITING",
            ConnStatus::Unknown => "UNKNOWN",
        })
    }
}

/// Une ligne d'une table de connexions, normalisée.
///
/// Les hôtes tcp6 sont tronqués à leurs 32 bits de poids faible, comme
/// les hôtes v4 (même décodage petit-boutiste pour les trois tables).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConnectionRecord {
    pub proto: Proto,
    pub lhost: Ipv4Addr,
    pub lport: u16,
    pub rhost: Ipv4Addr,
    pub rport: u16,
    pub status: ConnStatus,
}

/// Paramètres d'une configuration statique à persister.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaticConf {
    pub addr: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub nameserver: IpAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_kernel_vocabulary() {
        assert_eq!(ConnStatus::from_hex("01").to_string(), "ESTABLISHED");
        assert_eq!(ConnStatus::from_hex("0A").to_string(), "LISTENING");
        assert_eq!(ConnStatus::from_hex("10").to_string(), "WAITING");
        assert_eq!(ConnStatus::from_hex("FF").to_string(), "UNKNOWN");
    }

    #[test]
    fn proto_order_is_tcp_tcp6_udp() {
        let names: Vec<_> = Proto::ALL.iter().map(|p| p.table()).collect();
        assert_eq!(names, ["tcp", "tcp6", "udp"]);
    }
}
