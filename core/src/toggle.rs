use tracing::{debug, error, info, warn};

use adhoc_common::ToggleError;
use adhoc_common::config::Config;
use adhoc_common::model::{Action, NetworkAddress, PhoneModel};

use crate::plan::{self, CommandPlan};
use crate::runner::CommandRunner;

/// Brings a handset's wireless interface in and out of ad-hoc mode.
///
/// Each call is a one-shot: steps run strictly in order, the first failure
/// ends the toggle and nothing is rolled back. Two togglers working on the
/// same handset at once will trample each other; callers serialize access.
pub struct Toggler<R: CommandRunner> {
    runner: R,
    cfg: Config,
}

impl<R: CommandRunner> Toggler<R> {
    pub fn new(runner: R, cfg: Config) -> Self {
        Self { runner, cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Parses raw identifiers, then toggles.
    ///
    /// Every input is validated before the first command runs.
    pub fn toggle_raw(
        &mut self,
        action: Action,
        model_id: &str,
        address: Option<&str>,
    ) -> Result<(), ToggleError> {
        let model: PhoneModel = model_id.parse()?;
        let address: Option<NetworkAddress> = match (action, address) {
            (Action::Start, Some(raw)) => Some(raw.parse()?),
            _ => None,
        };
        self.toggle(model, action, address)
    }

    pub fn toggle(
        &mut self,
        model: PhoneModel,
        action: Action,
        address: Option<NetworkAddress>,
    ) -> Result<(), ToggleError> {
        let plan = prepare(model, action, address.as_ref(), &self.cfg)?;

        if action == Action::Start && self.cfg.restart {
            self.reset(model);
        }

        self.execute(&plan)?;
        info!("{} {} completed ({} steps)", model, action, plan.len());
        Ok(())
    }

    /// Runs the stop plan and carries on past failures. A handset that is
    /// already stopped fails the first step, which is expected here.
    fn reset(&mut self, model: PhoneModel) {
        let stop = plan::stop_plan(model, &self.cfg);
        for (idx, step) in stop.steps.iter().enumerate() {
            debug!("reset [{idx}] {}: {}", step.name, step.command);
            match self.runner.run(&step.command) {
                Ok(status) if step.succeeded(status) => {}
                Ok(status) => warn!("Reset step '{}' exited with {status}, continuing", step.name),
                Err(e) => warn!("Reset step '{}' could not be launched: {e}", step.name),
            }
        }
    }

    fn execute(&mut self, plan: &CommandPlan) -> Result<(), ToggleError> {
        for (idx, step) in plan.steps.iter().enumerate() {
            debug!("[{idx}] {}: {}", step.name, step.command);

            let exit_status = self.runner.run(&step.command).map_err(|source| {
                error!("Step '{}' could not be launched: {source}", step.name);
                ToggleError::Launch {
                    step: idx,
                    name: step.name,
                    source,
                }
            })?;

            if !step.succeeded(exit_status) {
                error!("Step '{}' failed with exit status {exit_status}", step.name);
                return Err(ToggleError::CommandFailed {
                    step: idx,
                    name: step.name,
                    exit_status,
                });
            }
        }
        Ok(())
    }
}

/// Validates the inputs and builds the plan, without running anything.
pub fn prepare(
    model: PhoneModel,
    action: Action,
    address: Option<&NetworkAddress>,
    cfg: &Config,
) -> Result<CommandPlan, ToggleError> {
    cfg.validate()?;
    plan::plan(model, action, address, cfg)
}
