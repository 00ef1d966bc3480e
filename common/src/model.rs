//! # Toggle Inputs
//!
//! Defines the values a toggle is keyed on.
//!
//! * A [`PhoneModel`], either by its legacy numeric id (`0`, `1`) or by name.
//! * An [`Action`], `start` or `stop`.
//! * A [`NetworkAddress`], the IPv4 address given to the wireless interface.
//!
//! Every value is parsed and checked here, so a plan is never built from
//! unchecked text.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ToggleError;

/// Network the Android launcher numbers its peers in.
pub const NODE_NETWORK: [u8; 3] = [192, 168, 2];

/// The handsets the toggler knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneModel {
    /// Google Nexus One, Broadcom bcm4329 driver on `eth0`.
    Nexus,
    /// HTC Hero, TI wl1251 driver loaded through `wlan_loader`.
    Hero,
}

impl PhoneModel {
    pub const ALL: [PhoneModel; 2] = [PhoneModel::Nexus, PhoneModel::Hero];

    /// Numeric id the Android launcher passes on the command line.
    pub fn id(&self) -> u8 {
        match self {
            PhoneModel::Nexus => 0,
            PhoneModel::Hero => 1,
        }
    }
}

impl FromStr for PhoneModel {
    type Err = ToggleError;

    /// Accepts `0`/`nexus` and `1`/`hero`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "nexus" => Ok(PhoneModel::Nexus),
            "1" | "hero" => Ok(PhoneModel::Hero),
            _ => Err(ToggleError::UnsupportedModel(s.to_string())),
        }
    }
}

impl fmt::Display for PhoneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneModel::Nexus => write!(f, "nexus"),
            PhoneModel::Hero => write!(f, "hero"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            other => Err(format!("unknown action '{other}' (expected start or stop)")),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => write!(f, "start"),
            Action::Stop => write!(f, "stop"),
        }
    }
}

/// An IPv4 address that can be assigned to an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress(Ipv4Addr);

impl NetworkAddress {
    pub fn new(addr: Ipv4Addr) -> Result<Self, ToggleError> {
        if addr.is_unspecified() || addr.is_broadcast() {
            return Err(ToggleError::InvalidAddress(addr.to_string()));
        }
        Ok(Self(addr))
    }

    /// Builds `192.168.2.<node>`.
    pub fn from_node(node: u8) -> Result<Self, ToggleError> {
        let [a, b, c] = NODE_NETWORK;
        if node == 0 || node == u8::MAX {
            return Err(ToggleError::InvalidAddress(format!("{a}.{b}.{c}.{node}")));
        }
        Self::new(Ipv4Addr::new(a, b, c, node))
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }
}

impl FromStr for NetworkAddress {
    type Err = ToggleError;

    /// Parses strict dotted-quad text. Ports, prefixes and host names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ToggleError::MissingAddress);
        }

        let addr = trimmed
            .parse::<Ipv4Addr>()
            .map_err(|_| ToggleError::InvalidAddress(trimmed.to_string()))?;

        Self::new(addr)
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
