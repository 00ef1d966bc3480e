use adhoc_common::config::Config;
use adhoc_common::model::PhoneModel;
use adhoc_common::network::interface::{self, InterfaceStatus};
use adhoc_core::plan;

use crate::terminal::print;

pub fn status(model: &str, cfg: &Config) -> anyhow::Result<()> {
    let model: PhoneModel = model.parse()?;
    let name = plan::interface_name(model, cfg);

    print::aligned_line("model", model.to_string());
    print::aligned_line("interface", name.to_string());

    match interface::interface_status(name) {
        Some(status) => print_present(&status),
        None => print::aligned_line("state", "absent (driver not loaded)".to_string()),
    }
    Ok(())
}

fn print_present(status: &InterfaceStatus) {
    let state = if status.is_up { "up" } else { "down" };
    print::aligned_line("state", state.to_string());

    if status.ipv4_nets.is_empty() {
        print::aligned_line("ipv4", "none".to_string());
    }
    for net in &status.ipv4_nets {
        print::aligned_line("ipv4", net.to_string());
    }
}
