// Pure CSS value helpers. No web-sys here so host tests can include it.

/// A computed/inline CSS length in `px`, e.g. `"12.5px"`. Keywords like
/// `auto` and other units yield `None`.
pub fn css_px(value: &str) -> Option<f32> {
    value
        .trim()
        .strip_suffix("px")?
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite())
}

/// CSS px to backing-store pixels, rounded and floored at `min`.
pub fn css_to_device_px(css: f32, density: f32, min: f32) -> u32 {
    (css * density).round().max(min) as u32
}
