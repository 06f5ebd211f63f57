use std::net::Ipv4Addr;

use crate::infrastructure::command::CommandRunner;

/// Passerelle par défaut de l'interface via `route -n`.
///
/// Commande absente ou en échec ⇒ `None`, jamais d'erreur : la requête
/// en lecture ne remonte rien au-delà de sa frontière.
pub(crate) fn default_gateway<R: CommandRunner>(runner: &R, ifname: &str) -> Option<Ipv4Addr> {
    let output = runner.output("route", &["-n"]).ok()?;
    parse_route_table(&output, ifname)
}

/// Cherche la route par défaut (destination exactement `0.0.0.0`) dont le
/// champ interface final est `ifname` ; la première correspondance fait foi.
pub fn parse_route_table(output: &str, ifname: &str) -> Option<Ipv4Addr> {
    for line in output.lines() {
        let mut fields = line.split_whitespace();
        if fields.next() != Some("0.0.0.0") {
            continue;
        }
        let gateway = fields.next();
        if line.split_whitespace().next_back() == Some(ifname) {
            return gateway.and_then(|g| g.parse().ok());
        }
    }
    None
}
