pub mod plan;
pub mod status;
pub mod toggle;

use adhoc_common::config::{Config, DEFAULT_CHANNEL, DEFAULT_ESSID, DEFAULT_HERO_INTERFACE};
use adhoc_common::model::Action;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adhocctl", version)]
#[command(about = "Toggle ad-hoc WiFi on Nexus One and HTC Hero handsets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Log the commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Interface created by the Hero driver
    #[arg(long, global = true, value_name = "IFACE", default_value = DEFAULT_HERO_INTERFACE)]
    pub hero_iface: String,

    /// Network name for the Nexus ad-hoc cell
    #[arg(long, global = true, default_value = DEFAULT_ESSID)]
    pub essid: String,

    /// Channel for the Nexus ad-hoc cell
    #[arg(long, global = true, default_value_t = DEFAULT_CHANNEL)]
    pub channel: u8,

    /// Print less (-q drops headers, -qq only reports errors)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the driver and join the ad-hoc network
    Start {
        /// 0/nexus or 1/hero
        model: String,
        /// IPv4 address for the wireless interface
        #[arg(required_unless_present = "node")]
        address: Option<String>,
        /// Use 192.168.2.<NODE> as the address
        #[arg(long, conflicts_with = "address")]
        node: Option<u8>,
        /// Stop first, ignoring failures
        #[arg(long)]
        restart: bool,
    },
    /// Take the interface down and unload the driver
    Stop {
        /// 0/nexus or 1/hero
        model: String,
        /// Accepted for compatibility and ignored
        #[arg(hide = true)]
        address: Option<String>,
    },
    /// Show whether the model's interface exists and is up
    Status {
        /// 0/nexus or 1/hero
        model: String,
    },
    /// Print the commands a toggle would run
    Plan {
        action: Action,
        model: String,
        address: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let restart = matches!(self.command, Commands::Start { restart: true, .. });
        Config {
            essid: self.essid.clone(),
            channel: self.channel,
            hero_interface: self.hero_iface.clone(),
            quiet: self.quiet,
            restart,
            ..Config::default()
        }
    }
}
