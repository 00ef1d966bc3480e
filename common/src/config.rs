use std::net::Ipv4Addr;

use crate::error::ToggleError;

pub const DEFAULT_NETMASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);
pub const DEFAULT_ESSID: &str = "nexusbac";
pub const DEFAULT_CHANNEL: u8 = 6;
pub const DEFAULT_HERO_INTERFACE: &str = "tiwlan0";

/// Linux caps interface names at `IFNAMSIZ - 1` bytes.
const MAX_IFACE_LEN: usize = 15;
const MAX_ESSID_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Netmask assigned together with the address on start.
    pub netmask: Ipv4Addr,
    /// Network name joined by the Nexus in ad-hoc mode.
    pub essid: String,
    /// 2.4 GHz channel used by the Nexus in ad-hoc mode.
    pub channel: u8,
    /// Interface the Hero driver exposes.
    ///
    /// Firmware builds disagree on the name; `tiwlan0` is what the TI loader creates.
    pub hero_interface: String,
    /// 0 prints everything, 1 drops headers, 2 only reports errors.
    pub quiet: u8,
    /// Run the stop plan (ignoring failures) before starting.
    pub restart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            netmask: DEFAULT_NETMASK,
            essid: DEFAULT_ESSID.to_string(),
            channel: DEFAULT_CHANNEL,
            hero_interface: DEFAULT_HERO_INTERFACE.to_string(),
            quiet: 0,
            restart: false,
        }
    }
}

impl Config {
    /// Checks every value that ends up on a command line.
    pub fn validate(&self) -> Result<(), ToggleError> {
        validate_interface_name(&self.hero_interface)?;

        if self.essid.is_empty() || self.essid.len() > MAX_ESSID_LEN {
            return Err(ToggleError::InvalidConfig(format!(
                "essid must be 1 to {MAX_ESSID_LEN} bytes, got {}",
                self.essid.len()
            )));
        }
        if self.essid.chars().any(char::is_control) {
            return Err(ToggleError::InvalidConfig(
                "essid must not contain control characters".into(),
            ));
        }
        if !(1..=14).contains(&self.channel) {
            return Err(ToggleError::InvalidConfig(format!(
                "channel must be between 1 and 14, got {}",
                self.channel
            )));
        }

        Ok(())
    }
}

pub fn validate_interface_name(name: &str) -> Result<(), ToggleError> {
    let valid_chars = name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));

    if name.is_empty() || name.len() > MAX_IFACE_LEN || !valid_chars {
        return Err(ToggleError::InvalidConfig(format!(
            "'{name}' is not a valid interface name"
        )));
    }
    Ok(())
}
