use crate::color::Color;

// Defaults and clamp bounds shared by every host.

// Speed maps to a tick interval of `SPEED_INTERVAL_BASE_MS - speed`
pub const DEFAULT_SPEED: u8 = 40;
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 99;
pub const SPEED_INTERVAL_BASE_MS: u64 = 100;

pub const DEFAULT_RING_COUNT: u8 = 5;
pub const MIN_RING_COUNT: u8 = 1;
pub const MAX_RING_COUNT: u8 = 10;

// Ring geometry (surface pixels)
pub const BASE_MAX_DIAMETER: u32 = 128; // growth range beyond the center view
pub const INITIAL_OPACITY: u8 = 128;
pub const STROKE_WIDTH: f32 = 6.0;

// Center view width in device-independent pixels
pub const DEFAULT_CENTER_WIDTH_DP: f32 = 90.0;

pub const DEFAULT_RING_COLOR: Color = Color::RED;
