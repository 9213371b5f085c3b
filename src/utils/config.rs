//! Configuration and constants for the CLI.

use std::time::Duration;

/// Fixed name of the output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "screenshots";

/// Filename prefix used by single-capture mode when none is given
pub const DEFAULT_PREFIX: &str = "shot";

/// Extension of every file docshot writes or lists
pub const SCREENSHOT_EXT: &str = "png";

// The platform capture tool. `screencapture` ships with macOS; `-i` puts it
// into interactive selection mode and `-x` suppresses the shutter sound.
// The destination path is passed as the sole positional argument.
pub const CAPTURE_PROGRAM: &str = "screencapture";
pub const CAPTURE_FLAGS: &[&str] = &["-i", "-x"];

/// chrono format producing `YYYYMMDD_HHMMSS_mmm` (millisecond precision)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";

/// Breather between guided-sequence steps so the operator can rearrange windows
pub const STEP_PAUSE: Duration = Duration::from_secs(1);

// The guided sequence: six fixed (prefix, description) pairs covering the
// views a typical application README wants documented, in capture order.
pub const GUIDED_SEQUENCE: &[(&str, &str)] = &[
    (
        "overview",
        "Overview: full application window in its initial state",
    ),
    (
        "main_view",
        "Main view: the primary working area with content loaded",
    ),
    (
        "toolbar",
        "Toolbar: main controls and tool selection in focus",
    ),
    (
        "dialog",
        "Dialog: a representative modal or settings popover open",
    ),
    (
        "workflow",
        "Workflow: the application mid-task during a typical operation",
    ),
    (
        "detail",
        "Detail: a close-up of the area that needs explanation",
    ),
];
