use adhoc_common::config::Config;
use adhoc_common::model::{Action, NetworkAddress, PhoneModel};
use adhoc_core::toggle;

use crate::terminal::print;

pub fn plan(action: Action, model: &str, address: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let model: PhoneModel = model.parse()?;
    let address: Option<NetworkAddress> = match (action, address) {
        (Action::Start, Some(raw)) => Some(raw.parse()?),
        _ => None,
    };

    let plan = toggle::prepare(model, action, address.as_ref(), cfg)?;
    for (idx, step) in plan.steps.iter().enumerate() {
        print::tree_head(idx, step.name);
        print::tree_leaf(&step.command.to_string());
    }
    Ok(())
}
