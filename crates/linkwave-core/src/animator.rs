//! The ring animator: owns the settings, the live ring sequence and the
//! scheduler that drives it.
//!
//! Setters only touch `WaveSettings`. The tick loop reads an
//! `AnimatorConfig` snapshot which is refreshed from the settings at tick
//! boundaries (and on `start`), so a tick never sees half-applied changes.

use crate::color::Color;
use crate::config::{AnimatorConfig, WaveSettings};
use crate::measure::{measure, MeasureSpec, Padding};
use crate::render::{render, RingSurface};
use crate::ring::RingSequence;
use crate::scheduler::TickScheduler;
use crate::wave::advance;

pub struct RingAnimator<S> {
    settings: WaveSettings,
    config: AnimatorConfig,
    rings: RingSequence,
    running: bool,
    dirty: bool,
    ticks: u64,
    scheduler: S,
}

impl<S: TickScheduler> RingAnimator<S> {
    /// Build an animator; starts right away if `settings.running()` is set.
    pub fn new(settings: WaveSettings, scheduler: S) -> Self {
        let config = AnimatorConfig::from(&settings);
        let mut animator = Self {
            rings: RingSequence::seeded(&config),
            config,
            settings,
            running: false,
            dirty: false,
            ticks: 0,
            scheduler,
        };
        if animator.settings.running() {
            animator.start();
        }
        animator
    }

    /// Begin (or resume) ticking. Idempotent while running.
    pub fn start(&mut self) {
        self.apply_pending();
        self.running = true;
        if !self.scheduler.is_scheduled() {
            log::debug!(
                "[wave] start interval={}ms rings={}",
                self.config.tick_interval.as_millis(),
                self.rings.len()
            );
            self.scheduler.schedule(self.config.tick_interval);
        }
    }

    /// Freeze the rings where they are and stop the timer.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("[wave] stop after {} ticks", self.ticks);
        }
        self.running = false;
        self.scheduler.cancel();
    }

    /// The host removed the widget: stop and discard the sequence. A later
    /// `start` begins again from a single fresh ring.
    pub fn detach(&mut self) {
        self.stop();
        self.apply_pending();
        self.rings = RingSequence::seeded(&self.config);
        log::debug!("[wave] detached");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One timer firing: paint the current rings, then advance them.
    /// Returns false (and cancels the timer) when the animator is stopped.
    pub fn tick<R: RingSurface + ?Sized>(&mut self, surface: &mut R) -> bool {
        if !self.running {
            self.scheduler.cancel();
            return false;
        }
        self.apply_pending();
        render(&self.rings, &self.config, surface);

        let (next, events) = advance(&self.rings, &self.config);
        self.rings = next;
        self.ticks += 1;
        if events.spawned {
            log::trace!("[wave] tick={} spawned wave, rings={}", self.ticks, self.rings.len());
        }
        if events.evicted > 0 {
            log::trace!("[wave] tick={} evicted {} ring(s)", self.ticks, events.evicted);
        }
        true
    }

    /// Repaint without advancing, for host-initiated redraws. A redraw is a
    /// tick boundary too, so pending settings are applied first and a
    /// resized surface never shows rings from the old geometry.
    pub fn draw<R: RingSurface + ?Sized>(&mut self, surface: &mut R) {
        self.apply_pending();
        render(&self.rings, &self.config, surface);
    }

    fn apply_pending(&mut self) {
        if !std::mem::take(&mut self.dirty) {
            return;
        }
        let next = AnimatorConfig::from(&self.settings);
        if next == self.config {
            return;
        }
        if next.geometry_differs(&self.config) {
            log::debug!(
                "[wave] geometry changed ({}..{} -> {}..{}), reseeding",
                self.config.initial_diameter,
                self.config.max_diameter,
                next.initial_diameter,
                next.max_diameter
            );
            self.rings = RingSequence::seeded(&next);
        }
        let reschedule =
            next.tick_interval != self.config.tick_interval && self.scheduler.is_scheduled();
        self.config = next;
        if reschedule {
            log::debug!(
                "[wave] reschedule interval={}ms",
                self.config.tick_interval.as_millis()
            );
            self.scheduler.schedule(self.config.tick_interval);
        }
    }

    pub fn speed(&self) -> u8 {
        self.settings.speed()
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.settings.set_speed(speed);
        self.dirty = true;
    }

    pub fn ring_count(&self) -> u8 {
        self.settings.ring_count()
    }

    pub fn set_ring_count(&mut self, count: i32) {
        self.settings.set_ring_count(count);
        self.dirty = true;
    }

    pub fn color(&self) -> Color {
        self.settings.color()
    }

    pub fn set_color(&mut self, color: Color) {
        self.settings.set_color(color);
        self.dirty = true;
    }

    pub fn center_width(&self) -> u32 {
        self.settings.center_width()
    }

    pub fn set_center_width(&mut self, width: i32) {
        self.settings.set_center_width(width);
        self.dirty = true;
    }

    /// Content size the widget would like: twice the maximum diameter.
    pub fn preferred_size(&self) -> u32 {
        self.settings.max_diameter() * 2
    }

    pub fn measure(
        &self,
        width: MeasureSpec,
        height: MeasureSpec,
        padding: Padding,
    ) -> (u32, u32) {
        measure(width, height, self.preferred_size(), padding)
    }

    pub fn settings(&self) -> &WaveSettings {
        &self.settings
    }

    /// Configuration in effect for the next tick.
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn rings(&self) -> &RingSequence {
        &self.rings
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use crate::ring::Ring;
    use crate::scheduler::ManualScheduler;
    use std::time::Duration;

    fn animator() -> RingAnimator<ManualScheduler> {
        RingAnimator::new(WaveSettings::default(), ManualScheduler::new())
    }

    #[test]
    fn not_running_until_started() {
        let mut a = animator();
        assert!(!a.is_running());
        assert!(!a.scheduler().is_scheduled());
        a.start();
        a.start();
        assert!(a.is_running());
        assert_eq!(a.scheduler().schedule_calls(), 1);
        assert_eq!(a.scheduler().interval(), Some(Duration::from_millis(60)));
    }

    #[test]
    fn running_setting_autostarts() {
        let mut s = WaveSettings::default();
        s.set_running(true);
        let a = RingAnimator::new(s, ManualScheduler::new());
        assert!(a.is_running());
        assert!(a.scheduler().is_scheduled());
    }

    #[test]
    fn stray_tick_after_stop_cancels_and_leaves_rings() {
        let mut a = animator();
        let mut surface = RecordingSurface::new(346.0, 346.0);
        a.start();
        a.tick(&mut surface);
        a.stop();
        let frozen = a.rings().clone();
        assert!(!a.tick(&mut surface));
        assert_eq!(a.rings(), &frozen);
        assert!(!a.scheduler().is_scheduled());
        assert_eq!(surface.frame_count(), 1);
    }

    #[test]
    fn speed_change_reschedules_at_tick_boundary() {
        let mut a = animator();
        let mut surface = RecordingSurface::default();
        a.start();
        a.set_speed(90);
        assert_eq!(a.speed(), 90);
        assert_eq!(a.scheduler().interval(), Some(Duration::from_millis(60)));
        a.tick(&mut surface);
        assert_eq!(a.scheduler().interval(), Some(Duration::from_millis(10)));
        assert_eq!(a.scheduler().schedule_calls(), 2);
    }

    #[test]
    fn center_width_change_reseeds_geometry() {
        let mut a = animator();
        let mut surface = RecordingSurface::default();
        a.start();
        for _ in 0..10 {
            a.tick(&mut surface);
        }
        assert_eq!(a.rings().as_slice(), &[Ring::new(55, 118)]);
        a.set_center_width(60);
        // still the old geometry until the next boundary
        assert_eq!(a.config().initial_diameter, 45);
        a.tick(&mut surface);
        assert_eq!(surface.last_frame(), vec![(30.0, 128)]);
        assert_eq!(a.rings().as_slice(), &[Ring::new(31, 127)]);
        assert_eq!(a.config().max_diameter, 158);
    }

    #[test]
    fn color_change_keeps_rings() {
        let mut a = animator();
        let mut surface = RecordingSurface::default();
        a.start();
        a.tick(&mut surface);
        a.set_color(Color::WHITE);
        a.tick(&mut surface);
        assert_eq!(a.rings().as_slice(), &[Ring::new(47, 126)]);
        assert_eq!(a.config().color, Color::WHITE);
    }

    #[test]
    fn detach_discards_sequence() {
        let mut a = animator();
        let mut surface = RecordingSurface::default();
        a.start();
        for _ in 0..5 {
            a.tick(&mut surface);
        }
        a.detach();
        assert!(!a.is_running());
        assert!(!a.scheduler().is_scheduled());
        assert_eq!(a.rings().as_slice(), &[Ring::new(45, 128)]);
    }

    #[test]
    fn preferred_size_and_measure() {
        let a = animator();
        assert_eq!(a.preferred_size(), 346);
        assert_eq!(
            a.measure(MeasureSpec::Unspecified, MeasureSpec::Exactly(200), Padding::uniform(8)),
            (362, 200)
        );
    }
}
