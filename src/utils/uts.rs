//! Thin wrapper over uname(2)

use crate::error::{Result, SysfetchError};
use std::ffi::CStr;

/// Owned copy of the `utsname` fields sysfetch cares about
#[derive(Debug, Clone)]
pub struct UtsName {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

pub fn uname() -> Result<UtsName> {
    // SAFETY: utsname is plain old data and uname only writes into the buffer
    let mut buf: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut buf) } != 0 {
        return Err(SysfetchError::from(std::io::Error::last_os_error()));
    }

    Ok(UtsName {
        sysname: field(&buf.sysname),
        nodename: field(&buf.nodename),
        release: field(&buf.release),
        version: field(&buf.version),
        machine: field(&buf.machine),
    })
}

fn field(raw: &[libc::c_char]) -> String {
    // uname NUL-terminates every field within its fixed-size array
    unsafe { CStr::from_ptr(raw.as_ptr()) }
        .to_string_lossy()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uname_reports_release() {
        let uts = uname().unwrap();
        assert!(!uts.sysname.is_empty());
        assert!(!uts.release.is_empty());
    }
}
