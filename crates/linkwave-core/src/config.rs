//! Widget settings and the derived per-tick configuration.
//!
//! `WaveSettings` is what the host edits: every setter clamps silently and
//! the getters always return the clamped value. `AnimatorConfig` is the
//! immutable snapshot the tick loop works from; it is rebuilt from the
//! settings only between ticks.

use crate::color::Color;
use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct WaveSettings {
    speed: u8,
    color: Color,
    ring_count: u8,
    running: bool,
    center_width: u32,
}

impl WaveSettings {
    /// Defaults for a surface with the given pixel density (surface pixels
    /// per device-independent pixel).
    pub fn with_density(density: f32) -> Self {
        Self {
            speed: DEFAULT_SPEED,
            color: DEFAULT_RING_COLOR,
            ring_count: DEFAULT_RING_COUNT,
            running: false,
            center_width: dp_to_px(DEFAULT_CENTER_WIDTH_DP, density),
        }
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = clamp_speed(speed);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn ring_count(&self) -> u8 {
        self.ring_count
    }

    pub fn set_ring_count(&mut self, count: i32) {
        self.ring_count = clamp_ring_count(count);
    }

    /// Whether the widget should start animating as soon as it is built.
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Center view width in surface pixels.
    pub fn center_width(&self) -> u32 {
        self.center_width
    }

    pub fn set_center_width(&mut self, width: i32) {
        self.center_width = width.max(0) as u32;
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(SPEED_INTERVAL_BASE_MS - self.speed as u64)
    }

    pub fn initial_diameter(&self) -> u32 {
        self.center_width / 2
    }

    pub fn max_diameter(&self) -> u32 {
        BASE_MAX_DIAMETER + self.initial_diameter()
    }
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

#[inline]
pub fn clamp_speed(speed: i32) -> u8 {
    speed.clamp(MIN_SPEED as i32, MAX_SPEED as i32) as u8
}

#[inline]
pub fn clamp_ring_count(count: i32) -> u8 {
    count.clamp(MIN_RING_COUNT as i32, MAX_RING_COUNT as i32) as u8
}

/// Narrow a host number (e.g. a JS `Number`) for the clamping setters.
/// Out-of-range values saturate and NaN reads as 0.
#[inline]
pub fn saturating_i32(v: f64) -> i32 {
    v.trunc() as i32
}

/// Device-independent pixels to surface pixels, rounded to nearest.
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> u32 {
    (dp * density).round().max(0.0) as u32
}

/// Snapshot of everything a tick needs. Never mutated mid-tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub color: Color,
    pub max_diameter: u32,
    pub initial_diameter: u32,
    pub initial_opacity: u8,
    pub tick_interval: Duration,
    pub max_ring_count: usize,
    pub stroke_width: f32,
}

impl AnimatorConfig {
    /// Diameter the newest ring must reach before the next wave spawns.
    ///
    /// Integer division on purpose: with some combinations the threshold
    /// lies beyond `max_diameter` and no further wave ever spawns.
    pub fn spawn_threshold(&self) -> u32 {
        self.max_diameter / self.max_ring_count as u32 + self.initial_diameter
    }

    /// True when switching to `other` invalidates ring positions.
    pub fn geometry_differs(&self, other: &AnimatorConfig) -> bool {
        self.max_diameter != other.max_diameter || self.initial_diameter != other.initial_diameter
    }
}

impl From<&WaveSettings> for AnimatorConfig {
    fn from(s: &WaveSettings) -> Self {
        Self {
            color: s.color(),
            max_diameter: s.max_diameter(),
            initial_diameter: s.initial_diameter(),
            initial_opacity: INITIAL_OPACITY,
            tick_interval: s.tick_interval(),
            max_ring_count: s.ring_count() as usize,
            stroke_width: STROKE_WIDTH,
        }
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::from(&WaveSettings::default())
    }
}
