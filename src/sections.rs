use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll offset (in pixels) past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Intro,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Every section in page order. Earlier entries win when regions overlap.
    pub const ALL: [Section; 5] = [
        Section::Intro,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The DOM id of the `<section>` element rendering this region.
    pub fn id(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Intro => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub height: f64,
}

impl Viewport {
    /// The vertical midpoint of the visible area, in page coordinates.
    pub fn probe_point(&self) -> f64 {
        self.scroll_offset + self.height / 2.0
    }
}

/// Read-only view of where each section is currently laid out.
///
/// Implementations are queried on every scroll event and must not cache
/// geometry between calls. A section without a rendered element reports `None`.
pub trait PageLayout {
    fn section_bounds(&self, section: Section) -> Option<SectionBounds>;
}

/// A page that can also report and move its scroll position.
pub trait ScrollSurface: PageLayout {
    fn viewport(&self) -> Viewport;
    fn scroll_to(&self, top: f64);
}

/// Returns the first section, in page order, whose bounds contain `probe`.
pub fn section_at(probe: f64, layout: &impl PageLayout) -> Option<Section> {
    Section::ALL.into_iter().find(|&section| {
        layout
            .section_bounds(section)
            .is_some_and(|bounds| bounds.contains(probe))
    })
}

/// Scrolls so the top of `section` lines up with the top of the viewport.
/// Does nothing if the section isn't rendered.
pub fn scroll_to_section(surface: &impl ScrollSurface, section: Section) {
    if let Some(bounds) = surface.section_bounds(section) {
        surface.scroll_to(bounds.top);
    }
}

pub fn scroll_to_top(surface: &impl ScrollSurface) {
    surface.scroll_to(0.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationState {
    pub active: Section,
    pub scrolled_past_threshold: bool,
}

impl NavigationState {
    /// Recomputes the active section and threshold flag for the given viewport.
    ///
    /// When no section contains the probe point (e.g. over the footer) the
    /// previous active section is kept. Returns `true` if anything changed.
    pub fn observe(&mut self, viewport: Viewport, layout: &impl PageLayout) -> bool {
        let before = *self;
        if let Some(section) = section_at(viewport.probe_point(), layout) {
            self.active = section;
        }
        self.scrolled_past_threshold = viewport.scroll_offset > SCROLL_TOP_THRESHOLD;
        *self != before
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, collections::HashMap};

    const VIEWPORT_HEIGHT: f64 = 800.0;

    struct FakePage {
        bounds: HashMap<Section, SectionBounds>,
        offset: Cell<f64>,
    }

    impl FakePage {
        // contiguous sections, each `height` tall, followed by a footer
        fn contiguous(height: f64) -> Self {
            let bounds = Section::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    (
                        s,
                        SectionBounds {
                            top: i as f64 * height,
                            height,
                        },
                    )
                })
                .collect();
            Self {
                bounds,
                offset: Cell::new(0.0),
            }
        }

        fn with(pairs: &[(Section, f64, f64)]) -> Self {
            let bounds = pairs
                .iter()
                .map(|&(s, top, height)| (s, SectionBounds { top, height }))
                .collect();
            Self {
                bounds,
                offset: Cell::new(0.0),
            }
        }

        fn at(&self, offset: f64) -> Viewport {
            self.offset.set(offset);
            self.viewport()
        }
    }

    impl PageLayout for FakePage {
        fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
            self.bounds.get(&section).copied()
        }
    }

    impl ScrollSurface for FakePage {
        fn viewport(&self) -> Viewport {
            Viewport {
                scroll_offset: self.offset.get(),
                height: VIEWPORT_HEIGHT,
            }
        }

        fn scroll_to(&self, top: f64) {
            self.offset.set(top);
        }
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
        assert_eq!(
            "footer".parse::<Section>(),
            Err(SectionError::Unknown("footer".to_string()))
        );
        assert_eq!(Section::Intro.label(), "Home");
    }

    #[test]
    fn test_initial_state_is_intro() {
        let page = FakePage::contiguous(1000.0);
        let mut state = NavigationState::default();
        assert_eq!(state.active, Section::Intro);

        state.observe(page.at(0.0), &page);
        assert_eq!(state.active, Section::Intro);
        assert!(!state.scrolled_past_threshold);
    }

    #[test]
    fn test_probe_inside_section_activates_it() {
        let page = FakePage::contiguous(1000.0);
        let mut state = NavigationState::default();

        for (i, section) in Section::ALL.into_iter().enumerate() {
            let top = i as f64 * 1000.0;
            // probe = offset + 400, so offsets top-400 .. top+600 land inside
            for offset in [top - 400.0, top, top + 250.0, top + 599.0] {
                if offset < 0.0 {
                    continue;
                }
                state.observe(page.at(offset), &page);
                assert_eq!(state.active, section, "offset {offset}");
            }
        }
    }

    #[test]
    fn test_section_bottom_edge_is_exclusive() {
        let page = FakePage::contiguous(1000.0);
        let mut state = NavigationState::default();

        // probe lands exactly on the about/skills boundary
        state.observe(page.at(2000.0 - VIEWPORT_HEIGHT / 2.0), &page);
        assert_eq!(state.active, Section::Skills);
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let page = FakePage::with(&[
            (Section::Intro, 0.0, 1000.0),
            (Section::About, 1000.0, 1000.0),
            // gap from 2000 to 2500
            (Section::Skills, 2500.0, 1000.0),
        ]);
        let mut state = NavigationState::default();

        state.observe(page.at(1200.0), &page);
        assert_eq!(state.active, Section::About);

        // probe at 2200 is in the gap
        for _ in 0..3 {
            state.observe(page.at(1800.0), &page);
            assert_eq!(state.active, Section::About);
        }

        // past the last section, e.g. over the footer
        state.observe(page.at(2600.0), &page);
        assert_eq!(state.active, Section::Skills);
        state.observe(page.at(10_000.0), &page);
        assert_eq!(state.active, Section::Skills);
    }

    #[test]
    fn test_overlap_prefers_earlier_section() {
        let page = FakePage::with(&[
            (Section::About, 0.0, 1500.0),
            (Section::Skills, 1000.0, 1000.0),
        ]);
        let mut state = NavigationState::default();

        state.observe(page.at(800.0), &page);
        assert_eq!(state.active, Section::About);
        state.observe(page.at(1200.0), &page);
        assert_eq!(state.active, Section::Skills);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let page = FakePage::with(&[(Section::Contact, 0.0, 1000.0)]);
        let mut state = NavigationState::default();

        state.observe(page.at(0.0), &page);
        assert_eq!(state.active, Section::Contact);
        assert_eq!(section_at(5000.0, &page), None);
    }

    #[test]
    fn test_threshold_boundary() {
        let page = FakePage::contiguous(1000.0);
        let mut state = NavigationState::default();

        for offset in [0.0, 50.0, 99.9, 100.0] {
            state.observe(page.at(offset), &page);
            assert!(!state.scrolled_past_threshold, "offset {offset}");
        }
        for offset in [100.5, 101.0, 4000.0] {
            state.observe(page.at(offset), &page);
            assert!(state.scrolled_past_threshold, "offset {offset}");
        }
    }

    #[test]
    fn test_observe_is_idempotent() {
        let page = FakePage::contiguous(1000.0);
        let mut state = NavigationState::default();

        assert!(state.observe(page.at(3100.0), &page));
        let snapshot = state;
        assert!(!state.observe(page.at(3100.0), &page));
        assert!(!state.observe(page.at(3100.0), &page));
        assert_eq!(state, snapshot);
        assert!(state.is_active(Section::Projects));
    }

    #[test]
    fn test_scroll_to_section_aligns_top() {
        let page = FakePage::contiguous(1000.0);
        scroll_to_section(&page, Section::Projects);
        assert_eq!(page.viewport().scroll_offset, 3000.0);

        let mut state = NavigationState::default();
        state.observe(page.viewport(), &page);
        assert_eq!(state.active, Section::Projects);
        assert!(state.scrolled_past_threshold);

        scroll_to_top(&page);
        assert_eq!(page.viewport().scroll_offset, 0.0);
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let page = FakePage::with(&[(Section::Intro, 0.0, 1000.0)]);
        page.scroll_to(420.0);
        scroll_to_section(&page, Section::Projects);
        assert_eq!(page.viewport().scroll_offset, 420.0);
    }
}
