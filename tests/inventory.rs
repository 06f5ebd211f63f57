use std::fs;
use std::net::Ipv4Addr;

use ifstate::{
    CommandRunner, ConnStatus, InterfacesStore, NetError, NetPaths, NetworkInventory, Proto,
    StaticConf,
};
use tempfile::TempDir;

struct FakeStore {
    conf: Option<String>,
}

impl InterfacesStore for FakeStore {
    fn conf(&self, _ifname: &str) -> Result<Option<String>, NetError> {
        Ok(self.conf.clone())
    }
    fn set_manual(&mut self, _: &str) -> Result<(), NetError> {
        Ok(())
    }
    fn set_static(&mut self, _: &str, _: &StaticConf) -> Result<(), NetError> {
        Ok(())
    }
    fn set_dhcp(&mut self, _: &str) -> Result<(), NetError> {
        Ok(())
    }
}

struct NoRunner;

impl CommandRunner for NoRunner {
    fn output(&self, program: &str, _args: &[&str]) -> Result<String, NetError> {
        Err(NetError::External(format!("{program}: not found")))
    }
}

fn fixture_inventory(dir: &TempDir, conf: Option<&str>) -> NetworkInventory<FakeStore, NoRunner> {
    let proc_net = dir.path().join("proc_net");
    fs::create_dir(&proc_net).unwrap();
    let paths = NetPaths {
        proc_net,
        resolv_conf: dir.path().join("resolv.conf"),
        resolvconf_run: dir.path().join("run"),
    };
    let store = FakeStore {
        conf: conf.map(str::to_string),
    };
    NetworkInventory::with_paths(paths, store, NoRunner)
}

#[test]
fn ifmethod_from_iface_stanza() {
    let dir = TempDir::new().unwrap();
    let conf = "auto eth0\niface eth0 inet dhcp\n";
    let inv = fixture_inventory(&dir, Some(conf));

    assert_eq!(inv.ifmethod("eth0"), Some("dhcp".to_string()));
    // la strophe vise eth0 : aucune méthode pour une autre interface
    assert_eq!(inv.ifmethod("eth1"), None);
}

#[test]
fn ifmethod_absent_without_entry() {
    let dir = TempDir::new().unwrap();
    let inv = fixture_inventory(&dir, None);
    assert_eq!(inv.ifmethod("eth0"), None);
}

#[test]
fn ifnames_from_device_table() {
    let dir = TempDir::new().unwrap();
    let inv = fixture_inventory(&dir, None);
    let dev = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes
  eth0:  842447    8114    0    0    0     0          0         0   6424
    lo: 1421308   11824    0    0    0     0          0         0  142130
";
    fs::write(dir.path().join("proc_net").join("dev"), dev).unwrap();
    assert_eq!(inv.ifnames().unwrap(), vec!["eth0", "lo"]);
}

#[test]
fn connections_concatenated_in_fixed_proto_order() {
    let dir = TempDir::new().unwrap();
    let inv = fixture_inventory(&dir, None);
    let proc_net = dir.path().join("proc_net");

    let header = "  sl  local_address rem_address   st etc\n";
    fs::write(
        proc_net.join("tcp"),
        format!("{header}   0: 0100007F:0016 00000000:0000 0A 0 0 0\n"),
    )
    .unwrap();
    fs::write(
        proc_net.join("tcp6"),
        format!(
            "{header}   0: 00000000000000000000000001000000:1F90 00000000000000000000000000000000:0000 01 0 0 0\n"
        ),
    )
    .unwrap();
    fs::write(
        proc_net.join("udp"),
        format!("{header}   0: 00000000:0035 00000000:0000 07 0 0 0\n"),
    )
    .unwrap();

    let conns = inv.connections().unwrap();
    assert_eq!(
        conns.iter().map(|c| c.proto).collect::<Vec<_>>(),
        vec![Proto::Tcp, Proto::Tcp6, Proto::Udp]
    );
    assert_eq!(conns[0].lhost, Ipv4Addr::new(127, 0, 0, 1));
    assert_eq!(conns[0].status, ConnStatus::Listening);
    assert_eq!(conns[1].status, ConnStatus::Established);
    // 07 (UNCONN udp) est hors table de correspondance
    assert_eq!(conns[2].status, ConnStatus::Unknown);
    assert_eq!(conns[2].lport, 53);
}

#[test]
fn connections_fail_when_a_table_is_missing() {
    let dir = TempDir::new().unwrap();
    let inv = fixture_inventory(&dir, None);
    // aucune table écrite : l'énumération remonte l'erreur système
    let err = inv.connections().unwrap_err();
    assert!(err.to_string().contains("system error"));
}

#[test]
fn gateway_absent_when_route_command_unavailable() {
    let dir = TempDir::new().unwrap();
    let inv = fixture_inventory(&dir, None);
    // NoRunner échoue toujours : la requête dégrade en absent
    assert_eq!(inv.iface("eth0").gateway(), None);
}
