use anyhow::Context;
use is_root::is_root;
use tracing::warn;

use adhoc_common::config::Config;
use adhoc_common::model::{Action, NetworkAddress};
use adhoc_core::{CommandRunner, DryRunRunner, SystemRunner, Toggler};

use crate::terminal::print;

pub fn start(
    model: &str,
    address: Option<&str>,
    node: Option<u8>,
    cfg: &Config,
    dry_run: bool,
) -> anyhow::Result<()> {
    let from_node: Option<String> = node
        .map(|n| NetworkAddress::from_node(n).map(|addr| addr.to_string()))
        .transpose()?;
    let address = from_node.as_deref().or(address);

    run(Action::Start, model, address, cfg, dry_run)
}

pub fn stop(model: &str, cfg: &Config, dry_run: bool) -> anyhow::Result<()> {
    run(Action::Stop, model, None, cfg, dry_run)
}

fn run(
    action: Action,
    model: &str,
    address: Option<&str>,
    cfg: &Config,
    dry_run: bool,
) -> anyhow::Result<()> {
    if !dry_run && !is_root() {
        warn!("Not running as root, module and interface commands will likely fail");
    }

    let mut system = SystemRunner;
    let mut dry = DryRunRunner;
    let runner: &mut dyn CommandRunner = if dry_run { &mut dry } else { &mut system };

    let mut toggler = Toggler::new(runner, cfg.clone());
    toggler
        .toggle_raw(action, model, address)
        .with_context(|| format!("could not {action} ad-hoc networking"))?;

    print::print_status(format!("Ad-hoc networking {}", past_tense(action)));
    Ok(())
}

fn past_tense(action: Action) -> &'static str {
    match action {
        Action::Start => "started",
        Action::Stop => "stopped",
    }
}
