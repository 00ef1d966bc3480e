use std::fmt;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};

/// Snapshot of one interface as the kernel reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStatus {
    pub name: String,
    pub is_up: bool,
    pub ipv4_nets: Vec<Ipv4Network>,
}

impl fmt::Display for InterfaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_up { "up" } else { "down" };
        write!(f, "{} is {}", self.name, state)?;
        for net in &self.ipv4_nets {
            write!(f, ", {net}")?;
        }
        Ok(())
    }
}

pub trait NetworkInterfaceExtension {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V4(ipv4) = ip {
                    Some(*ipv4)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Looks up `name` among the host's interfaces.
///
/// Returns `None` when the interface does not exist, which is the normal
/// state of a driver-backed interface before its module is loaded.
pub fn interface_status(name: &str) -> Option<InterfaceStatus> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    tracing::debug!("Inspecting {} network interface(s) for {name}", interfaces.len());
    find_status(name, &interfaces)
}

fn find_status(name: &str, interfaces: &[NetworkInterface]) -> Option<InterfaceStatus> {
    interfaces
        .iter()
        .find(|interface| interface.name == name)
        .map(|interface| InterfaceStatus {
            name: interface.name.clone(),
            is_up: interface.is_up(),
            ipv4_nets: interface.get_ipv4_nets(),
        })
}
