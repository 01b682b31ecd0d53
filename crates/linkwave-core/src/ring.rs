use crate::config::AnimatorConfig;
use crate::constants::MAX_RING_COUNT;
use smallvec::SmallVec;

/// One expanding circle. `diameter` is the distance from the center in
/// surface pixels; `opacity` is the stroke alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    pub diameter: u32,
    pub opacity: u8,
}

impl Ring {
    pub const fn new(diameter: u32, opacity: u8) -> Self {
        Self { diameter, opacity }
    }

    /// A fresh wave as configured.
    pub fn spawn(config: &AnimatorConfig) -> Self {
        Self::new(config.initial_diameter, config.initial_opacity)
    }

    /// Whether the ring still grows and fades on the next tick.
    #[inline]
    pub fn is_live(&self, max_diameter: u32) -> bool {
        self.opacity > 0 && self.diameter < max_diameter
    }

    /// The ring one tick later. Rings at the edge or fully faded stay put.
    #[inline]
    pub fn aged(self, max_diameter: u32) -> Self {
        if self.is_live(max_diameter) {
            Self::new(self.diameter + 1, self.opacity - 1)
        } else {
            self
        }
    }
}

/// Ordered rings, oldest first. Insertion order is also spatial order.
///
/// Capacity is fixed by the ring count; `evict_overflow` removes from the
/// front only, whatever state those rings are in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RingSequence {
    rings: SmallVec<[Ring; MAX_RING_COUNT as usize]>,
}

impl RingSequence {
    /// A sequence holding the single starting ring.
    pub fn seeded(config: &AnimatorConfig) -> Self {
        let mut seq = Self::default();
        seq.push(Ring::spawn(config));
        seq
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn first(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn last(&self) -> Option<&Ring> {
        self.rings.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ring> + '_ {
        self.rings.iter()
    }

    pub fn as_slice(&self) -> &[Ring] {
        &self.rings
    }

    pub fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Drop front rings while the sequence is at or over `capacity`, but
    /// never the last remaining one. Returns the evicted rings.
    pub fn evict_overflow(&mut self, capacity: usize) -> SmallVec<[Ring; 2]> {
        let mut evicted = SmallVec::new();
        while self.rings.len() >= capacity && self.rings.len() > 1 {
            evicted.push(self.rings.remove(0));
        }
        evicted
    }
}

impl FromIterator<Ring> for RingSequence {
    fn from_iter<T: IntoIterator<Item = Ring>>(iter: T) -> Self {
        Self {
            rings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RingSequence {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}
