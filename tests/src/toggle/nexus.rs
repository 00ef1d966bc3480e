use adhoc_common::config::Config;
use adhoc_common::model::{Action, PhoneModel};
use adhoc_common::ToggleError;
use adhoc_core::Toggler;

use crate::support::{FakeHandset, RecordingRunner};

#[test]
fn start_runs_seven_steps_in_order() -> anyhow::Result<()> {
    let mut toggler = Toggler::new(RecordingRunner::new(), Config::default());
    toggler.toggle_raw(Action::Start, "0", Some("192.168.1.5"))?;

    let runner = toggler.into_runner();
    assert_eq!(
        runner.rendered(),
        vec![
            "insmod /system/lib/modules/bcm4329.ko",
            "ifconfig eth0 192.168.1.5 netmask 255.255.255.0",
            "ifconfig eth0 up",
            "iwconfig eth0 mode ad-hoc",
            "iwconfig eth0 essid nexusbac",
            "iwconfig eth0 channel 6",
            "iwconfig eth0 commit",
        ]
    );
    Ok(())
}

#[test]
fn stop_runs_three_steps_in_order() -> anyhow::Result<()> {
    let mut toggler = Toggler::new(RecordingRunner::new(), Config::default());
    toggler.toggle(PhoneModel::Nexus, Action::Stop, None)?;

    assert_eq!(
        toggler.into_runner().rendered(),
        vec!["ifconfig eth0 down", "killall iwconfig", "rmmod bcm4329"]
    );
    Ok(())
}

#[test]
fn busy_module_fails_at_unload_without_retry() {
    // ifconfig ok, killall found nothing, rmmod refused
    let runner = RecordingRunner::with_statuses(&[0, 1, 1]);
    let mut toggler = Toggler::new(runner, Config::default());

    let err = toggler.toggle(PhoneModel::Nexus, Action::Stop, None).unwrap_err();
    assert!(
        matches!(err, ToggleError::CommandFailed { step: 2, exit_status: 1, .. }),
        "unexpected error: {err:?}"
    );
    assert_eq!(toggler.into_runner().ran.len(), 3);
}

#[test]
fn start_then_stop_on_a_handset() -> anyhow::Result<()> {
    let mut toggler = Toggler::new(FakeHandset::new(), Config::default());

    toggler.toggle_raw(Action::Start, "nexus", Some("192.168.2.3"))?;
    toggler.toggle_raw(Action::Stop, "nexus", None)?;

    let handset = toggler.into_runner();
    assert!(!handset.is_loaded("bcm4329"));
    assert!(!handset.is_up("eth0"));
    assert_eq!(handset.ran.len(), 7 + 3);
    Ok(())
}

#[test]
fn second_stop_fails_at_interface_down() -> anyhow::Result<()> {
    let mut toggler = Toggler::new(FakeHandset::new(), Config::default());
    toggler.toggle_raw(Action::Start, "nexus", Some("192.168.2.3"))?;
    toggler.toggle_raw(Action::Stop, "nexus", None)?;

    let err = toggler.toggle_raw(Action::Stop, "nexus", None).unwrap_err();
    assert!(matches!(
        err,
        ToggleError::CommandFailed { step: 0, name: "bring interface down", .. }
    ));
    Ok(())
}

#[test]
fn second_start_fails_at_module_load() -> anyhow::Result<()> {
    let mut toggler = Toggler::new(FakeHandset::new(), Config::default());
    toggler.toggle_raw(Action::Start, "nexus", Some("192.168.2.3"))?;

    let err = toggler
        .toggle_raw(Action::Start, "nexus", Some("192.168.2.3"))
        .unwrap_err();
    assert!(matches!(err, ToggleError::CommandFailed { step: 0, name: "load driver", .. }));
    Ok(())
}

#[test]
fn restart_recovers_a_running_handset() -> anyhow::Result<()> {
    let cfg = Config { restart: true, ..Config::default() };
    let mut toggler = Toggler::new(FakeHandset::new(), cfg);

    toggler.toggle_raw(Action::Start, "nexus", Some("192.168.2.3"))?;
    toggler.toggle_raw(Action::Start, "nexus", Some("192.168.2.4"))?;

    let handset = toggler.into_runner();
    assert!(handset.is_loaded("bcm4329"));
    assert!(handset.is_up("eth0"));
    Ok(())
}
