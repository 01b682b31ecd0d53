/// Size constraint handed down by the host layout for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSpec {
    Exactly(u32),
    AtMost(u32),
    Unspecified,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub const fn uniform(p: u32) -> Self {
        Self {
            left: p,
            top: p,
            right: p,
            bottom: p,
        }
    }
}

/// Exact constraints win; anything else gets the preferred content size
/// plus padding. `AtMost` is deliberately not honored.
#[inline]
pub fn resolve_size(spec: MeasureSpec, content: u32, padding: u32) -> u32 {
    match spec {
        MeasureSpec::Exactly(n) => n,
        MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => content.saturating_add(padding),
    }
}

/// `(width, height)` for a widget whose content is `content` pixels square.
pub fn measure(
    width: MeasureSpec,
    height: MeasureSpec,
    content: u32,
    padding: Padding,
) -> (u32, u32) {
    (
        resolve_size(width, content, padding.left + padding.right),
        resolve_size(height, content, padding.top + padding.bottom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_wins_otherwise_content_plus_padding() {
        let pad = Padding {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        assert_eq!(
            measure(MeasureSpec::Exactly(50), MeasureSpec::Unspecified, 346, pad),
            (50, 352)
        );
        assert_eq!(
            measure(MeasureSpec::AtMost(10), MeasureSpec::Exactly(7), 346, pad),
            (350, 7)
        );
    }
}
