//! Parsing des tables réseau du noyau (/proc/net).

use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;

use crate::domain::{ConnStatus, ConnectionRecord, NetError, Proto};

/// Connexions des trois tables, dans l'ordre fixe tcp, tcp6, udp.
pub(crate) fn collect_connections(proc_net: &Path) -> Result<Vec<ConnectionRecord>, NetError> {
    let mut records = Vec::new();
    for proto in Proto::ALL {
        let path = proc_net.join(proto.table());
        let content = fs::read_to_string(&path)
            .map_err(|e| NetError::System(format!("{}: {e}", path.display())))?;
        records.append(&mut parse_connection_table(proto, &content)?);
    }
    Ok(records)
}

/// Parse une table complète : l'en-tête est sauté, chaque ligne restante
/// est parsée indépendamment. Une ligne malformée fait échouer toute
/// l'énumération : on s'appuie sur une sortie noyau bien formée, sans
/// récupération ligne à ligne (asymétrie voulue avec `parse_ifnames`).
pub fn parse_connection_table(
    proto: Proto,
    content: &str,
) -> Result<Vec<ConnectionRecord>, NetError> {
    content
        .lines()
        .skip(1)
        .map(|line| parse_connection_row(proto, line))
        .collect()
}

/// Parse une ligne de table : champs séparés par blancs, local en 1,
/// distant en 2, code d'état en 3.
pub fn parse_connection_row(proto: Proto, line: &str) -> Result<ConnectionRecord, NetError> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    let field = |i: usize| {
        cols.get(i)
            .copied()
            .ok_or_else(|| NetError::Parse(format!("{proto}: missing field {i}: {line:?}")))
    };

    let (lhost, lport) = parse_host_port(field(1)?)?;
    let (rhost, rport) = parse_host_port(field(2)?)?;
    let status = ConnStatus::from_hex(field(3)?);

    Ok(ConnectionRecord {
        proto,
        lhost,
        lport,
        rhost,
        rport,
        status,
    })
}

/// Décode `HEXHOST:HEXPORT`. L'hôte est lu comme entier hexadécimal dont
/// les 32 bits de poids faible donnent les octets petit-boutistes du
/// dotted-quad (les hôtes tcp6, sur 32 chiffres hex, sont tronqués de la
/// même façon). Le port est hexadécimal sur 16 bits.
pub fn parse_host_port(spec: &str) -> Result<(Ipv4Addr, u16), NetError> {
    let (hex_host, hex_port) = spec
        .split_once(':')
        .ok_or_else(|| NetError::Parse(format!("host:port attendu: {spec:?}")))?;

    let host = u128::from_str_radix(hex_host, 16)
        .map_err(|e| NetError::Parse(format!("host {hex_host:?}: {e}")))?;
    let bytes = (host as u32).to_le_bytes();
    let host = Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]);

    let port = u16::from_str_radix(hex_port, 16)
        .map_err(|e| NetError::Parse(format!("port {hex_port:?}: {e}")))?;

    Ok((host, port))
}

/// Noms d'interfaces (up et down) de la table des statistiques par
/// périphérique, dans l'ordre du fichier.
pub(crate) fn collect_ifnames(proc_net: &Path) -> Result<Vec<String>, NetError> {
    let path = proc_net.join("dev");
    let content = fs::read_to_string(&path)
        .map_err(|e| NetError::System(format!("{}: {e}", path.display())))?;
    Ok(parse_ifnames(&content))
}

/// Une ligne par interface, `nom: stats…` ; les lignes sans exactement
/// un `:` (en-têtes comprises) sont ignorées.
pub fn parse_ifnames(content: &str) -> Vec<String> {
    let mut ifnames = Vec::new();
    for line in content.lines() {
        let parts: Vec<&str> = line.trim().split(':').collect();
        if let [ifname, _stats] = parts[..] {
            ifnames.push(ifname.to_string());
        }
    }
    ifnames
}
