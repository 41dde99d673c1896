use crate::ProcessRecord;

/// Image names never treated as applications, compared lower-cased and
/// exactly (no substring matching).
pub const SYSTEM_PROCESSES: &[&str] = &[
    "system",
    "smss.exe",
    "csrss.exe",
    "wininit.exe",
    "winlogon.exe",
    "services.exe",
    "lsass.exe",
    "svchost.exe",
    "spoolsv.exe",
    "dwm.exe",
    "audiodg.exe",
    "conhost.exe",
    "taskmgr.exe",
    "cmd.exe",
    "powershell.exe",
    "wuauclt.exe",
    "mmc.exe",
    "rundll32.exe",
    "dllhost.exe",
    "sihost.exe",
    "fontdrvhost.exe",
    "winrt.exe",
    "backgroundtaskhost.exe",
    "runtimebroker.exe",
];

/// Platform executable extension, lower-case.
pub const EXECUTABLE_EXTENSION: &str = ".exe";

/// Returns whether a process looks like a user application.
///
/// This is a heuristic: denylisted names are rejected, then the process
/// must run in an interactive session (id > 0) and have an executable
/// image name. Background services named like applications will pass.
pub fn is_application(record: &ProcessRecord) -> bool {
    let name = record.image_key();

    if SYSTEM_PROCESSES.contains(&name.as_str()) {
        return false;
    }

    record.session_id > 0 && name.ends_with(EXECUTABLE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image_name: &str, session_id: u32) -> ProcessRecord {
        ProcessRecord {
            image_name: image_name.into(),
            session_id,
            ..Default::default()
        }
    }

    #[test]
    fn denylisted_name_is_not_an_application() {
        assert!(!is_application(&record("svchost.exe", 1)));
    }

    #[test]
    fn denylist_ignores_case() {
        assert!(!is_application(&record("SvcHost.EXE", 1)));
        assert!(!is_application(&record("RuntimeBroker.exe", 2)));
    }

    #[test]
    fn user_session_executable_is_an_application() {
        assert!(is_application(&record("notepad.exe", 1)));
        assert!(is_application(&record("Notepad.EXE", 3)));
    }

    #[test]
    fn system_session_is_rejected() {
        assert!(!is_application(&record("notepad.exe", 0)));
    }

    #[test]
    fn denylist_is_exact_match_only() {
        // Contains "cmd.exe" but is not equal to it.
        assert!(is_application(&record("mycmd.exe", 1)));
    }

    #[test]
    fn non_executable_image_is_rejected() {
        assert!(!is_application(&record("Registry", 1)));
        assert!(!is_application(&record("Memory Compression", 1)));
    }
}
