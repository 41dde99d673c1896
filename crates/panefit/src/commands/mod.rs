pub mod find;
pub mod get;
pub mod init;
pub mod list;
pub mod move_window;
pub mod preset;
pub mod size;

use panefit_core::config::InputLimits;
use panefit_core::WindowGeometry;

/// Clamps user-supplied geometry into the configured limits, warning
/// about every adjusted value.
pub(crate) fn clamp_geometry(limits: &InputLimits, requested: WindowGeometry) -> WindowGeometry {
    let clamped = limits.clamp(requested);
    if clamped != requested {
        tracing::warn!(?requested, ?clamped, "geometry adjusted to configured limits");
        eprintln!(
            "Note: adjusted to ({}, {}) {}x{} to stay within configured limits.",
            clamped.x, clamped.y, clamped.width, clamped.height
        );
    }
    clamped
}

/// Prints serialized JSON to stdout. A serialization failure is reported
/// on stderr instead and yields `false`.
pub(crate) fn print_json(json: serde_json::Result<String>) -> bool {
    match json {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize output");
            eprintln!("Error: failed to serialize output: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_json_reports_serialization_failure() {
        let broken = serde_json::from_str::<String>("{");

        assert!(!print_json(broken));
    }

    #[test]
    fn print_json_prints_valid_output() {
        assert!(print_json(Ok("{}".into())));
    }

    #[test]
    fn geometry_inside_limits_is_unchanged() {
        let requested = WindowGeometry::new(10, 20, 800, 600);

        assert_eq!(clamp_geometry(&InputLimits::default(), requested), requested);
    }
}
