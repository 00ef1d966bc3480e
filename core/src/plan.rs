//! # Command Plans
//!
//! Maps a `(PhoneModel, Action)` pair to the ordered commands that bring the
//! wireless interface into, or out of, ad-hoc mode.
//!
//! Building a plan is pure: nothing here touches the system. Every command is
//! an argument vector, so addresses and names are passed as single arguments
//! and are never interpreted by a shell.

use std::fmt;

use adhoc_common::ToggleError;
use adhoc_common::config::Config;
use adhoc_common::model::{Action, NetworkAddress, PhoneModel};

const NEXUS_IFACE: &str = "eth0";
const NEXUS_MODULE_PATH: &str = "/system/lib/modules/bcm4329.ko";
const NEXUS_MODULE: &str = "bcm4329";

const HERO_MODULE_PATH: &str = "/system/lib/modules/wlan.ko";
const HERO_MODULE: &str = "wlan";
const HERO_FIRMWARE: &str = "/system/etc/wifi/Fw1251r1c.bin";
const HERO_CALIBRATION: &str = "/proc/calibration";
const HERO_INI: &str = "/data/local/bin/tiwlan.ini";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemCommand {
    /// Run `program` with `args` and wait for it to exit.
    Exec { program: String, args: Vec<String> },
    /// Unload a kernel module directly, without blocking on its reference count.
    DeleteModule { name: String },
}

impl SystemCommand {
    fn exec<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SystemCommand::Exec {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for SystemCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemCommand::Exec { program, args } => {
                write!(f, "{program}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            SystemCommand::DeleteModule { name } => {
                write!(f, "delete_module({name}, O_NONBLOCK|O_EXCL)")
            }
        }
    }
}

/// Exit statuses that count as success for most commands.
const SUCCESS: &[i32] = &[0];
/// `killall` exits 1 when nothing matched, which is the state we want.
const NOTHING_TO_KILL: &[i32] = &[0, 1];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Human readable name used in diagnostics.
    pub name: &'static str,
    pub command: SystemCommand,
    accepted: &'static [i32],
}

impl Step {
    fn new(name: &'static str, command: SystemCommand) -> Self {
        Self {
            name,
            command,
            accepted: SUCCESS,
        }
    }

    fn accepting(mut self, accepted: &'static [i32]) -> Self {
        self.accepted = accepted;
        self
    }

    /// Whether `exit_status` lets the plan continue.
    pub fn succeeded(&self, exit_status: i32) -> bool {
        self.accepted.contains(&exit_status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    pub model: PhoneModel,
    pub action: Action,
    pub steps: Vec<Step>,
}

impl CommandPlan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &SystemCommand> {
        self.steps.iter().map(|step| &step.command)
    }
}

/// Builds the plan for `action` on `model`.
///
/// `address` is only read for [`Action::Start`], where it is required: a
/// start plan without its address step would leave the interface unconfigured.
pub fn plan(
    model: PhoneModel,
    action: Action,
    address: Option<&NetworkAddress>,
    cfg: &Config,
) -> Result<CommandPlan, ToggleError> {
    match (action, address) {
        (Action::Start, Some(addr)) => Ok(start_plan(model, addr, cfg)),
        (Action::Start, None) => Err(ToggleError::MissingAddress),
        (Action::Stop, _) => Ok(stop_plan(model, cfg)),
    }
}

pub fn start_plan(model: PhoneModel, address: &NetworkAddress, cfg: &Config) -> CommandPlan {
    let steps = match model {
        PhoneModel::Nexus => nexus_start(address, cfg),
        PhoneModel::Hero => hero_start(address, cfg),
    };
    CommandPlan { model, action: Action::Start, steps }
}

pub fn stop_plan(model: PhoneModel, cfg: &Config) -> CommandPlan {
    let steps = match model {
        PhoneModel::Nexus => nexus_stop(),
        PhoneModel::Hero => hero_stop(cfg),
    };
    CommandPlan { model, action: Action::Stop, steps }
}

/// The interface the plans for `model` configure.
pub fn interface_name(model: PhoneModel, cfg: &Config) -> &str {
    match model {
        PhoneModel::Nexus => NEXUS_IFACE,
        PhoneModel::Hero => cfg.hero_interface.as_str(),
    }
}

fn assign_address(iface: &str, address: &NetworkAddress, cfg: &Config) -> Step {
    Step::new(
        "assign address",
        SystemCommand::exec(
            "ifconfig",
            [
                iface.to_string(),
                address.to_string(),
                "netmask".to_string(),
                cfg.netmask.to_string(),
            ],
        ),
    )
}

fn nexus_start(address: &NetworkAddress, cfg: &Config) -> Vec<Step> {
    vec![
        Step::new(
            "load driver",
            SystemCommand::exec("insmod", [NEXUS_MODULE_PATH]),
        ),
        assign_address(NEXUS_IFACE, address, cfg),
        Step::new(
            "bring interface up",
            SystemCommand::exec("ifconfig", [NEXUS_IFACE, "up"]),
        ),
        Step::new(
            "set ad-hoc mode",
            SystemCommand::exec("iwconfig", [NEXUS_IFACE, "mode", "ad-hoc"]),
        ),
        Step::new(
            "set network name",
            SystemCommand::exec("iwconfig", [NEXUS_IFACE, "essid", cfg.essid.as_str()]),
        ),
        Step::new(
            "set channel",
            SystemCommand::exec(
                "iwconfig",
                [NEXUS_IFACE.to_string(), "channel".to_string(), cfg.channel.to_string()],
            ),
        ),
        Step::new(
            "commit configuration",
            SystemCommand::exec("iwconfig", [NEXUS_IFACE, "commit"]),
        ),
    ]
}

fn nexus_stop() -> Vec<Step> {
    vec![
        Step::new(
            "bring interface down",
            SystemCommand::exec("ifconfig", [NEXUS_IFACE, "down"]),
        ),
        Step::new(
            "stop configuration helper",
            SystemCommand::exec("killall", ["iwconfig"]),
        )
        .accepting(NOTHING_TO_KILL),
        Step::new("unload driver", SystemCommand::exec("rmmod", [NEXUS_MODULE])),
    ]
}

fn hero_start(address: &NetworkAddress, cfg: &Config) -> Vec<Step> {
    let iface = cfg.hero_interface.as_str();
    vec![
        Step::new(
            "load driver",
            SystemCommand::exec("insmod", [HERO_MODULE_PATH]),
        ),
        Step::new(
            "load firmware",
            SystemCommand::exec(
                "wlan_loader",
                ["-f", HERO_FIRMWARE, "-e", HERO_CALIBRATION, "-i", HERO_INI],
            ),
        ),
        assign_address(iface, address, cfg),
        Step::new(
            "bring interface up",
            SystemCommand::exec("ifconfig", [iface, "up"]),
        ),
    ]
}

fn hero_stop(cfg: &Config) -> Vec<Step> {
    vec![
        Step::new(
            "bring interface down",
            SystemCommand::exec("ifconfig", [cfg.hero_interface.as_str(), "down"]),
        ),
        Step::new(
            "unload driver",
            SystemCommand::DeleteModule {
                name: HERO_MODULE.to_string(),
            },
        ),
    ]
}
