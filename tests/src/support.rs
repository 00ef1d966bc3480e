use std::collections::{HashMap, VecDeque};
use std::io;

use adhoc_core::{CommandRunner, SystemCommand};

/// `EBUSY`, as delete_module reports it for a module still in use.
pub const EBUSY: i32 = 16;
/// `ENOENT`, as delete_module reports it for a module that is not loaded.
pub const ENOENT: i32 = 2;

/// Records every command and answers from a script; once the script runs
/// out every command succeeds.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub ran: Vec<SystemCommand>,
    script: VecDeque<i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(statuses: &[i32]) -> Self {
        Self {
            ran: Vec::new(),
            script: statuses.iter().copied().collect(),
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.ran.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &SystemCommand) -> io::Result<i32> {
        self.ran.push(command.clone());
        Ok(self.script.pop_front().unwrap_or(0))
    }
}

/// A toy handset kernel: tracks which modules are loaded and which
/// interfaces exist, and fails commands the way the real tools do.
#[derive(Debug, Default)]
pub struct FakeHandset {
    pub ran: Vec<SystemCommand>,
    /// Module name -> interface it creates.
    drivers: HashMap<String, String>,
    loaded: HashMap<String, bool>,
    up: HashMap<String, bool>,
    busy: Vec<String>,
}

impl FakeHandset {
    pub fn new() -> Self {
        let mut handset = Self::default();
        handset.drivers.insert("bcm4329".into(), "eth0".into());
        handset.drivers.insert("wlan".into(), "tiwlan0".into());
        handset
    }

    /// Makes unloading `module` fail as in use.
    pub fn hold(&mut self, module: &str) {
        self.busy.push(module.to_string());
    }

    pub fn is_loaded(&self, module: &str) -> bool {
        self.loaded.get(module).copied().unwrap_or(false)
    }

    pub fn is_up(&self, iface: &str) -> bool {
        self.up.get(iface).copied().unwrap_or(false)
    }

    fn iface_exists(&self, iface: &str) -> bool {
        self.drivers
            .iter()
            .any(|(module, created)| created == iface && self.is_loaded(module))
    }

    fn module_from_path(path: &str) -> String {
        path.rsplit('/')
            .next()
            .unwrap_or(path)
            .trim_end_matches(".ko")
            .to_string()
    }

    fn unload(&mut self, module: &str) -> i32 {
        if !self.is_loaded(module) {
            return ENOENT;
        }
        if self.busy.iter().any(|m| m == module) {
            return EBUSY;
        }
        self.loaded.insert(module.to_string(), false);
        if let Some(iface) = self.drivers.get(module).cloned() {
            self.up.insert(iface, false);
        }
        0
    }

    fn exec(&mut self, program: &str, args: &[String]) -> i32 {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match (program, args.as_slice()) {
            ("insmod", [path]) => {
                let module = Self::module_from_path(path);
                if self.is_loaded(&module) {
                    return 1;
                }
                self.loaded.insert(module, true);
                0
            }
            ("rmmod", [module]) => match self.unload(module) {
                0 => 0,
                _ => 1,
            },
            ("wlan_loader", _) => {
                if self.is_loaded("wlan") { 0 } else { 1 }
            }
            ("ifconfig", [iface, rest @ ..]) => {
                if !self.iface_exists(iface) {
                    return 1;
                }
                match rest {
                    ["up"] => {
                        self.up.insert(iface.to_string(), true);
                    }
                    ["down"] => {
                        self.up.insert(iface.to_string(), false);
                    }
                    _ => {}
                }
                0
            }
            ("iwconfig", [iface, ..]) => {
                if self.is_up(iface) { 0 } else { 1 }
            }
            // No helper ever lingers on the fake handset.
            ("killall", _) => 1,
            _ => 127,
        }
    }
}

impl CommandRunner for FakeHandset {
    fn run(&mut self, command: &SystemCommand) -> io::Result<i32> {
        self.ran.push(command.clone());
        let status = match command {
            SystemCommand::Exec { program, args } => self.exec(program, args),
            SystemCommand::DeleteModule { name } => self.unload(name),
        };
        Ok(status)
    }
}
