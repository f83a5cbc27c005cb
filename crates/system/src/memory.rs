use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

const MIB: u64 = 1 << 20;

/// Resident memory of the current process in megabytes.
///
/// Returns `None` if the process can't be found in the system table
/// (unsupported platform, restricted `/proc`).
pub fn process_memory_mb() -> Option<f64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );
    sys.process(pid).map(|p| bytes_to_mb(p.memory()))
}

/// Convert a byte count to (binary) megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}

/// Format a megabyte value as a human-readable string (e.g. `"1.5 GiB"`).
pub fn format_megabytes(mb: f64) -> String {
    if mb.abs() >= 1024.0 {
        format!("{:.1} GiB", mb / 1024.0)
    } else {
        format!("{mb:.1} MiB")
    }
}
