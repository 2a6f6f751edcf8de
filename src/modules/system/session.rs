// src/modules/system/session.rs

use crate::core::error::{Error, Result};

/// Where the `username` fact comes from.
pub type SessionResolver = fn() -> Result<String>;

#[cfg(unix)]
unsafe extern "C" {
    // POSIX; present in every libc we target.
    fn getlogin_r(name: *mut libc::c_char, namesize: libc::size_t) -> libc::c_int;
}

// Login name of the user owning the controlling terminal.
#[cfg(unix)]
pub fn login_name() -> Result<String> {
    use std::ffi::CStr;

    // LOGIN_NAME_MAX is 256 on Linux and 255 on the BSDs.
    let mut buf = [0 as libc::c_char; 256];
    let rc = unsafe { getlogin_r(buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        let err = std::io::Error::from_raw_os_error(rc);
        return Err(Error::session(format!("getlogin_r: {}", err)));
    }

    let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
    non_empty(name.to_string_lossy().into_owned())
}

#[cfg(windows)]
pub fn login_name() -> Result<String> {
    match std::env::var("USERNAME") {
        Ok(name) => non_empty(name),
        Err(e) => Err(Error::session(format!("USERNAME: {}", e))),
    }
}

#[cfg(not(any(unix, windows)))]
pub fn login_name() -> Result<String> {
    Err(Error::session("no login session support on this platform"))
}

fn non_empty(name: String) -> Result<String> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::session("session reported an empty login name"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(
            non_empty("  ".to_string()),
            Err(Error::SessionResolution { .. })
        ));
        assert_eq!(non_empty(" alice\n".to_string()).unwrap(), "alice");
    }

    #[test]
    fn login_name_is_never_silently_empty() {
        // Containers usually have no login record; either outcome is fine
        // as long as success carries a real name.
        match login_name() {
            Ok(name) => assert!(!name.is_empty()),
            Err(e) => assert!(matches!(e, Error::SessionResolution { .. })),
        }
    }
}
