//! Drawing contract between the animator and a host surface.
//!
//! The host provides a `RingSurface` in its own coordinate space; rings are
//! stroked as circles around the surface midpoint, one call per ring.

use crate::color::Color;
use crate::config::AnimatorConfig;
use crate::ring::RingSequence;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

pub trait RingSurface {
    /// Drawable size in surface pixels.
    fn size(&self) -> Vec2;
    /// Reset to fully transparent.
    fn clear(&mut self);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke);
}

/// Paint every ring at its current diameter and opacity.
pub fn render<S: RingSurface + ?Sized>(
    rings: &RingSequence,
    config: &AnimatorConfig,
    surface: &mut S,
) {
    surface.clear();
    let center = (surface.size() * 0.5).floor();
    for ring in rings {
        let stroke = Stroke {
            color: config.color.with_alpha(ring.opacity),
            width: config.stroke_width,
        };
        surface.stroke_circle(center, ring.diameter as f32, stroke);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        stroke: Stroke,
    },
}

/// Surface that records draw calls instead of painting. Useful for
/// headless hosts and for checking what a frame would look like.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub size: Vec2,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            calls: Vec::new(),
        }
    }

    /// Circles drawn since the most recent clear, as `(radius, alpha)`.
    pub fn last_frame(&self) -> Vec<(f32, u8)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { radius, stroke, .. } => Some((*radius, stroke.color.a)),
                DrawCall::Clear => None,
            })
            .collect()
    }

    pub fn frame_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear))
            .count()
    }
}

impl RingSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            stroke,
        });
    }
}
