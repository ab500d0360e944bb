/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::About => "👤",
            Self::Skills => "🧩",
            Self::Projects => "💼",
            Self::Contact => "✉️",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Scroll offset past which the nav bar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Viewport line a section has to cross to become active.
pub const ACTIVE_LINE: f64 = 100.0;
const PARALLAX_RATE: f64 = -0.5;

/// Viewport-relative vertical bounds of a section element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn crosses_active_line(&self) -> bool {
        self.top <= ACTIVE_LINE && self.bottom >= ACTIVE_LINE
    }
}

/// Scroll-derived navigation state owned by a single navigation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: SectionId,
    scrolled: bool,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            scrolled: false,
        }
    }
}

impl SectionTracker {
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Applies a scroll update; `bounds` are visited in the order given and
    /// sections missing from the page are simply left out. Returns whether
    /// anything changed.
    pub fn update<I>(&mut self, scroll_y: f64, bounds: I) -> bool
    where
        I: IntoIterator<Item = (SectionId, SectionBounds)>,
    {
        let before = *self;
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some((id, _)) = bounds
            .into_iter()
            .find(|(_, bounds)| bounds.crosses_active_line())
        {
            self.active = id;
        }
        *self != before
    }
}

/// Vertical hero offset in px for the given scroll position.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(scroll_y: f64) -> Vec<(SectionId, SectionBounds)> {
        // five 800px sections stacked from the top of the document
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * 800.0 - scroll_y;
                (*id, SectionBounds { top, bottom: top + 800.0 })
            })
            .collect()
    }

    #[test]
    fn test_starts_at_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn test_scrolled_threshold_is_strict() {
        let mut tracker = SectionTracker::default();
        tracker.update(50.0, layout(50.0));
        assert!(!tracker.is_scrolled());
        assert!(tracker.update(50.5, layout(50.5)));
        assert!(tracker.is_scrolled());
        tracker.update(0.0, layout(0.0));
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.update(800.0, layout(800.0)));
        assert_eq!(tracker.active(), SectionId::About);
        tracker.update(2500.0, layout(2500.0));
        assert_eq!(tracker.active(), SectionId::Projects);
        tracker.update(3300.0, layout(3300.0));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_first_match_wins_on_boundary() {
        // at scroll 700 home ends exactly at the line and about starts there
        let mut tracker = SectionTracker::default();
        tracker.update(700.0, layout(700.0));
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_keeps_previous_when_nothing_matches() {
        let mut tracker = SectionTracker::default();
        tracker.update(1600.0, layout(1600.0));
        assert_eq!(tracker.active(), SectionId::Skills);

        let gap = [
            (SectionId::Home, SectionBounds { top: -900.0, bottom: -100.0 }),
            (SectionId::About, SectionBounds { top: 200.0, bottom: 900.0 }),
        ];
        tracker.update(1600.0, gap);
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut tracker = SectionTracker::default();
        let partial = layout(1700.0)
            .into_iter()
            .filter(|(id, _)| *id != SectionId::Skills)
            .collect::<Vec<_>>();
        assert!(tracker.update(1700.0, partial));
        assert_eq!(tracker.active(), SectionId::Home);
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn test_unchanged_update_reports_false() {
        let mut tracker = SectionTracker::default();
        assert!(!tracker.update(10.0, layout(10.0)));
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(300.0), -150.0);
    }

    #[test]
    fn test_hrefs() {
        let hrefs = SectionId::ALL.map(SectionId::href);
        assert_eq!(hrefs, ["#home", "#about", "#skills", "#projects", "#contact"]);
    }
}
