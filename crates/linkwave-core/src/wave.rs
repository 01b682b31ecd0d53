use crate::config::AnimatorConfig;
use crate::ring::{Ring, RingSequence};

/// What happened to the sequence during one `advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaveEvents {
    pub spawned: bool,
    pub evicted: usize,
}

/// One animation step over the ring sequence, with no drawing involved.
///
/// 1. every live ring grows by one pixel and loses one step of opacity;
/// 2. when the newest ring sits exactly on the spawn threshold a new wave
///    is appended;
/// 3. rings are dropped from the front while the sequence is at capacity.
///
/// Step 3 removes by position, so with an unlucky configuration a ring
/// that is still visible can be evicted.
pub fn advance(rings: &RingSequence, config: &AnimatorConfig) -> (RingSequence, WaveEvents) {
    let mut next: RingSequence = rings
        .iter()
        .map(|r| r.aged(config.max_diameter))
        .collect();
    let mut events = WaveEvents::default();

    if next
        .last()
        .is_some_and(|r| r.diameter == config.spawn_threshold())
    {
        next.push(Ring::spawn(config));
        events.spawned = true;
    }
    if next.is_empty() {
        next.push(Ring::spawn(config));
    }

    events.evicted = next.evict_overflow(config.max_ring_count).len();
    (next, events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnimatorConfig {
        AnimatorConfig::default()
    }

    #[test]
    fn first_step_grows_single_ring() {
        let cfg = config();
        let (next, ev) = advance(&RingSequence::seeded(&cfg), &cfg);
        assert_eq!(next.as_slice(), &[Ring::new(46, 127)]);
        assert_eq!(ev, WaveEvents::default());
    }

    #[test]
    fn spawns_when_newest_hits_threshold() {
        let cfg = config();
        let threshold = cfg.spawn_threshold();
        let seq: RingSequence = [Ring::new(threshold - 1, 100)].into_iter().collect();
        let (next, ev) = advance(&seq, &cfg);
        assert!(ev.spawned);
        assert_eq!(
            next.as_slice(),
            &[Ring::new(threshold, 99), Ring::new(45, 128)]
        );
    }

    #[test]
    fn only_newest_ring_triggers_spawn() {
        let cfg = config();
        let threshold = cfg.spawn_threshold();
        let seq: RingSequence = [Ring::new(threshold - 1, 100), Ring::new(50, 120)]
            .into_iter()
            .collect();
        let (next, ev) = advance(&seq, &cfg);
        assert!(!ev.spawned);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn frozen_ring_stays_frozen() {
        let cfg = config();
        let stuck = Ring::new(cfg.max_diameter, 0);
        let seq: RingSequence = [stuck, Ring::new(60, 113)].into_iter().collect();
        let (next, _) = advance(&seq, &cfg);
        assert_eq!(next.first(), Some(&stuck));
    }

    #[test]
    fn full_sequence_evicts_front_even_if_visible() {
        let cfg = config();
        let seq: RingSequence = [
            Ring::new(150, 40),
            Ring::new(120, 70),
            Ring::new(90, 100),
            Ring::new(cfg.spawn_threshold() - 1, 128),
        ]
        .into_iter()
        .collect();
        let (next, ev) = advance(&seq, &cfg);
        assert!(ev.spawned);
        assert_eq!(ev.evicted, 1);
        assert_eq!(next.len(), 4);
        assert_eq!(next.first(), Some(&Ring::new(121, 69)));
    }
}
