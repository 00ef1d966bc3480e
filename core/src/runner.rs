//! # Command Runners
//!
//! The toggler never talks to the OS directly. It hands each
//! [`SystemCommand`] to a [`CommandRunner`] and only looks at the status it
//! gets back, so tests can swap in a recording stub.

use std::io;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::plan::SystemCommand;

/// Blocking command execution.
///
/// `Ok(0)` is success, any other `Ok` value is the failing exit status.
/// `Err` means the command could not be launched at all.
pub trait CommandRunner {
    fn run(&mut self, command: &SystemCommand) -> io::Result<i32>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &SystemCommand) -> io::Result<i32> {
        (**self).run(command)
    }
}

/// Executes commands on the running system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &SystemCommand) -> io::Result<i32> {
        match command {
            SystemCommand::Exec { program, args } => {
                let status = Command::new(program).args(args).status()?;
                Ok(exit_code(status))
            }
            SystemCommand::DeleteModule { name } => delete_module(name),
        }
    }
}

/// Logs every command and reports success without running anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &SystemCommand) -> io::Result<i32> {
        info!("(dry run) {command}");
        Ok(0)
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Requests module removal with `O_NONBLOCK | O_EXCL`: the kernel refuses
/// immediately with `EBUSY`/`EWOULDBLOCK` instead of waiting for users to go away.
///
/// Returns `0` on success or the errno reported by the kernel.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn delete_module(name: &str) -> io::Result<i32> {
    use std::ffi::CString;

    let module = CString::new(name)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "module name contains NUL"))?;
    let flags = libc::O_NONBLOCK | libc::O_EXCL;

    debug!("delete_module({name}, {flags:#o})");
    // SAFETY: `module` is a valid NUL-terminated string that outlives the call,
    // and delete_module only reads it.
    let ret = unsafe { libc::syscall(libc::SYS_delete_module, module.as_ptr(), flags) };
    if ret == 0 {
        return Ok(0);
    }

    let err = io::Error::last_os_error();
    Ok(err.raw_os_error().unwrap_or(-1))
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn delete_module(name: &str) -> io::Result<i32> {
    debug!("delete_module({name}) is not available on this platform");
    Ok(libc::ENOSYS)
}
