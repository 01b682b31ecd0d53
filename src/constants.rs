// DOM wiring constants for the web front-end.

// Canvases carrying this attribute are picked up by `mountAll()`
pub const MOUNT_ATTRIBUTE: &str = "data-link-wave";
pub const MOUNT_SELECTOR: &str = "canvas[data-link-wave]";

pub const CONTEXT_2D: &str = "2d";

// Computed-style properties read for measurement, in Padding field order
pub const PADDING_PROPERTIES: [&str; 4] = [
    "padding-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
];

// A tick arriving this much later than its interval is worth a trace line
pub const LATE_TICK_SLACK_MS: u64 = 50;

// Fallback when the host reports no usable device pixel ratio
pub const DEFAULT_DENSITY: f32 = 1.0;
