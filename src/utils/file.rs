//! File reading utilities

use crate::error::{QfetchError, Result};
use std::path::Path;

/// Read the first line of a file, trimmed.
///
/// Meant for single-line proc files like /proc/sys/kernel/osrelease.
/// Uses direct syscalls to skip the buffered-reader machinery.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| QfetchError::Probe("invalid path".to_string()))?;

    unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(QfetchError::from(std::io::Error::last_os_error()));
        }

        let mut buffer = [0u8; 256];
        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);

        if bytes_read < 0 {
            return Err(QfetchError::from(std::io::Error::last_os_error()));
        }

        let content = std::str::from_utf8(&buffer[..bytes_read as usize])
            .map_err(|_| QfetchError::Probe("invalid UTF-8".to_string()))?;
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }
}
