//! System information collection (OS, kernel, uptime, user, host, shell)

use crate::error::{Result, SysfetchError};
use crate::utils::file::{find_line, read_first_line};
use crate::utils::parsing::{basename, format_uptime, shorten_kernel};
use crate::utils::uts::uname;
use std::env;
use std::ffi::CStr;
use std::path::Path;

const UNKNOWN: &str = "Unknown";
const OS_RELEASE: &str = "/etc/os-release";
const HOSTNAME_FILE: &str = "/proc/sys/kernel/hostname";
const UPTIME_FILE: &str = "/proc/uptime";

/// Account name of the effective user, falling back to the login name
pub fn username() -> String {
    // SAFETY: geteuid cannot fail
    let uid = unsafe { libc::geteuid() };

    passwd_name(uid)
        .or_else(login_name)
        .or_else(|| env::var("USER").ok().filter(|u| !u.is_empty()))
        .or_else(|| env::var("LOGNAME").ok().filter(|u| !u.is_empty()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn passwd_name(uid: libc::uid_t) -> Option<String> {
    let mut buf = vec![0 as libc::c_char; 4096];
    // SAFETY: passwd is plain old data; getpwuid_r fills it from `buf`
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe { libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };
    if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
        tracing::debug!(uid, rc, "no passwd entry for effective uid");
        return None;
    }

    // pw_name points into `buf`, which is still alive here
    let name = unsafe { CStr::from_ptr(pwd.pw_name) }.to_string_lossy().into_owned();
    Some(name).filter(|n| !n.is_empty())
}

fn login_name() -> Option<String> {
    // SAFETY: getlogin returns NULL or a pointer to a static NUL-terminated buffer
    let ptr = unsafe { libc::getlogin() };
    if ptr.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    Some(name).filter(|n| !n.is_empty())
}

pub fn hostname() -> String {
    read_first_line(HOSTNAME_FILE)
        .ok()
        .filter(|h| !h.is_empty())
        .or_else(|| uname().ok().map(|uts| uts.nodename))
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn os_name() -> String {
    read_os_name(OS_RELEASE)
        .or_else(|err| {
            tracing::debug!(%err, "falling back to uname for OS name");
            uname().map(|uts| format!("{} {}", uts.sysname, uts.release))
        })
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// `PRETTY_NAME` from an os-release file
pub fn read_os_name<P: AsRef<Path>>(path: P) -> Result<String> {
    let line = find_line(path, |l| l.starts_with("PRETTY_NAME="))?
        .ok_or_else(|| SysfetchError::Detection("PRETTY_NAME not found".to_string()))?;

    let value = line
        .split_once('=')
        .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\'').to_string())
        .unwrap_or_default();

    if value.is_empty() {
        Err(SysfetchError::Detection("PRETTY_NAME is empty".to_string()))
    } else {
        Ok(value)
    }
}

/// Kernel release and build, shortened for display
pub fn kernel_version() -> String {
    match uname() {
        Ok(uts) => shorten_kernel(&format!("{} {}", uts.release, uts.version)),
        Err(err) => {
            tracing::debug!(%err, "uname failed");
            UNKNOWN.to_string()
        }
    }
}

pub fn uptime() -> String {
    match read_uptime_seconds(UPTIME_FILE) {
        Ok(secs) => format_uptime(secs),
        Err(err) => {
            tracing::debug!(%err, "uptime unavailable");
            UNKNOWN.to_string()
        }
    }
}

/// Seconds since boot, the first field of `/proc/uptime`
pub fn read_uptime_seconds<P: AsRef<Path>>(path: P) -> Result<u64> {
    let line = read_first_line(path)?;
    let secs: f64 = line
        .split_whitespace()
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| SysfetchError::Parse(format!("bad uptime line: {:?}", line)))?;
    Ok(secs as u64)
}

/// Shell name from `$SHELL`
pub fn shell() -> String {
    env::var("SHELL")
        .ok()
        .as_deref()
        .and_then(basename)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// `rustc` version the binary was built with, e.g. `1.80.1`
pub fn runtime_version() -> String {
    let full = option_env!("SYSFETCH_RUSTC_VERSION").unwrap_or("");
    full.split_whitespace()
        .nth(1)
        .unwrap_or(UNKNOWN)
        .to_string()
}
