use std::time::Duration;

/// Fraction of a section that has to be on screen before it reveals.
pub const VISIBLE_THRESHOLD: f64 = 0.1;
/// Browsers may report a ratio a hair under the threshold that triggered them.
const RATIO_SLACK: f64 = 1e-3;

/// One-way "has been seen" flag for a section.
///
/// Once the latch fires it stays fired for the rest of the page load, so each
/// section plays its entrance animation exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(VISIBLE_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection observation. Returns true only for the
    /// observation that fires the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.visible || !intersecting || ratio + RATIO_SLACK < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Staggered reveal timing shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger: Duration,
    pub duration: Duration,
}

impl Stagger {
    pub const HERO: Stagger = Stagger::new(200, 300, 800);
    pub const SECTION: Stagger = Stagger::new(300, 200, 600);
    pub const CARD: Stagger = Stagger::new(300, 200, 500);
    pub const TECH: Stagger = Stagger::new(0, 100, 500);

    pub const fn new(delay_children_ms: u64, stagger_ms: u64, duration_ms: u64) -> Self {
        Self {
            delay_children: Duration::from_millis(delay_children_ms),
            stagger: Duration::from_millis(stagger_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.delay_children + self.stagger * index as u32
    }

    /// Inline style for the `index`th child.
    pub fn style(&self, index: usize) -> String {
        format!(
            "transition-delay: {}ms; transition-duration: {}ms;",
            self.delay_for(index).as_millis(),
            self.duration.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_visible());

        assert!(!latch.observe(true, 0.05));
        assert!(!latch.is_visible());

        assert!(latch.observe(true, 0.1));
        assert!(latch.is_visible());

        // scrolling out and back in never fires again
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 1.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::new(0.5);
        let ratios = [0.2, 0.6, 0.0, 0.3, 0.0, 0.9, 0.0];
        let fired = ratios.iter().filter(|r| latch.observe(**r > 0.0, **r)).count();
        assert_eq!(fired, 1);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latch_tolerates_rounding_at_threshold() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.0999));

        // the same ratio while leaving doesn't count
        let mut leaving = RevealLatch::default();
        assert!(!leaving.observe(false, 0.0999));
        assert!(!leaving.is_visible());
    }

    #[test]
    fn test_stagger_delays() {
        let s = Stagger::SECTION;
        assert_eq!(s.delay_for(0), Duration::from_millis(300));
        assert_eq!(s.delay_for(1), Duration::from_millis(500));
        assert_eq!(s.delay_for(3), Duration::from_millis(900));

        let t = Stagger::TECH;
        assert_eq!(t.delay_for(11), Duration::from_millis(1100));
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(
            Stagger::HERO.style(2),
            "transition-delay: 800ms; transition-duration: 800ms;"
        );
    }
}
