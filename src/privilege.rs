/// Whether the current process may write to the system fonts directory.
///
/// Administrator role on Windows, effective uid 0 elsewhere. Anything that
/// cannot be determined counts as not elevated.
pub fn is_elevated() -> bool {
    #[cfg(target_os = "windows")]
    {
        crate::platform::is_user_admin()
    }
    #[cfg(unix)]
    {
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(any(unix, target_os = "windows")))]
    {
        false
    }
}
