use gloo_events::EventListener;
use log::debug;
use web_sys::{window, Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Page sections in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Memorial,
    Letters,
    MyHall,
    Reserve,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Memorial,
        Section::Letters,
        Section::MyHall,
        Section::Reserve,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Memorial => "memorial",
            Section::Letters => "letters",
            Section::MyHall => "myHall",
            Section::Reserve => "reserve",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Memorial => "추모관",
            Section::Letters => "편지함",
            Section::MyHall => "나의 추모관",
            Section::Reserve => "사전 예약",
        }
    }
}

/// The section that owns the top of the viewport: the last one, in order,
/// whose start sits at or above `scroll_offset + header_offset + 1`.
/// Falls back to the first section when none has been reached yet.
pub fn compute_active_section<T: Copy>(
    scroll_offset: f64,
    header_offset: f64,
    sections: &[(T, f64)],
) -> Option<T> {
    let line = scroll_offset + header_offset + 1.0;
    sections
        .iter()
        .rev()
        .find(|(_, start)| *start <= line)
        .or_else(|| sections.first())
        .map(|(id, _)| *id)
}

/// Absolute offset to scroll to so that an element whose viewport top is
/// `element_top` ends up just below the sticky header.
pub fn scroll_target(element_top: f64, scroll_offset: f64, header_offset: f64) -> f64 {
    element_top + scroll_offset - header_offset
}

/// Remembers the last reported section so listeners only hear about changes.
#[derive(Debug)]
pub struct ActiveSectionTracker<T> {
    header_offset: f64,
    last: Option<T>,
}

impl<T: Copy + PartialEq> ActiveSectionTracker<T> {
    pub fn new(header_offset: f64) -> Self {
        Self {
            header_offset,
            last: None,
        }
    }

    pub fn current(&self) -> Option<T> {
        self.last
    }

    pub fn update(&mut self, scroll_offset: f64, sections: &[(T, f64)]) -> Option<T> {
        let next = compute_active_section(scroll_offset, self.header_offset, sections)?;
        if self.last == Some(next) {
            return None;
        }
        self.last = Some(next);
        Some(next)
    }
}

/// Ordered section handles, filled in as the section components attach.
#[derive(Clone, PartialEq)]
pub struct SectionRegistry<T> {
    entries: Vec<(T, NodeRef)>,
}

impl<T: Copy + PartialEq> SectionRegistry<T> {
    pub fn new(ids: &[T]) -> Self {
        let mut entries: Vec<(T, NodeRef)> = Vec::with_capacity(ids.len());
        for id in ids {
            if entries.iter().all(|(existing, _)| existing != id) {
                entries.push((*id, NodeRef::default()));
            }
        }
        Self { entries }
    }

    pub fn node_ref(&self, id: T) -> NodeRef {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, node_ref)| node_ref.clone())
            .unwrap_or_default()
    }

    pub fn ids(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Document-relative start of every attached section, in order.
    pub fn offsets(&self, scroll_offset: f64) -> Vec<(T, f64)> {
        self.entries
            .iter()
            .filter_map(|(id, node_ref)| {
                let element = node_ref.cast::<Element>()?;
                let top = element.get_bounding_client_rect().top();
                Some((*id, top + scroll_offset))
            })
            .collect()
    }

    fn element(&self, id: T) -> Option<Element> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .and_then(|(_, node_ref)| node_ref.cast::<Element>())
    }
}

fn current_scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smooth-scrolls so `id` lands just below the sticky header.
/// Unknown or not-yet-attached sections are ignored.
pub fn scroll_to_section<T: Copy + PartialEq>(registry: &SectionRegistry<T>, id: T, header_offset: f64) {
    let Some(window) = window() else {
        return;
    };
    let Some(element) = registry.element(id) else {
        return;
    };

    let rect = element.get_bounding_client_rect();
    let scroll_offset = window.scroll_y().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(rect.top(), scroll_offset, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Tracks the active section while the calling component is mounted.
/// The scroll listener is detached when the component unmounts.
#[hook]
pub fn use_active_section(registry: SectionRegistry<Section>, header_offset: f64) -> Section {
    let active = use_state_eq(|| Section::Memorial);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |registry| {
                let registry = registry.clone();
                let mut tracker = ActiveSectionTracker::new(header_offset);

                let mut recompute = move || {
                    let scroll_offset = current_scroll_offset();
                    let offsets = registry.offsets(scroll_offset);
                    if let Some(section) = tracker.update(scroll_offset, &offsets) {
                        debug!("active section -> {}", section.id());
                        active.set(section);
                    }
                };

                // Initial check
                recompute();

                let listener = window().map(|window| {
                    EventListener::new(&window, "scroll", move |_| recompute())
                });

                move || drop(listener)
            },
            registry,
        );
    }

    *active
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 72.0;

    fn layout() -> Vec<(char, f64)> {
        vec![('A', 0.0), ('B', 500.0), ('C', 1000.0), ('D', 1500.0)]
    }

    #[test]
    fn top_of_page_is_first_section() {
        assert_eq!(compute_active_section(0.0, H, &layout()), Some('A'));
    }

    #[test]
    fn header_band_counts_towards_reaching_a_section() {
        assert_eq!(compute_active_section(426.0, H, &layout()), Some('A'));
        assert_eq!(compute_active_section(427.0, H, &layout()), Some('B'));
        assert_eq!(compute_active_section(574.0, H, &layout()), Some('B'));
    }

    #[test]
    fn last_reached_section_wins() {
        assert_eq!(compute_active_section(1000.0, H, &layout()), Some('C'));
        assert_eq!(compute_active_section(1499.0, H, &layout()), Some('D'));
        assert_eq!(compute_active_section(1600.0, H, &layout()), Some('D'));
    }

    #[test]
    fn falls_back_to_first_when_nothing_reached() {
        let sections = vec![('A', 300.0), ('B', 900.0)];
        assert_eq!(compute_active_section(0.0, H, &sections), Some('A'));
    }

    #[test]
    fn empty_layout_has_no_active_section() {
        let sections: Vec<(char, f64)> = Vec::new();
        assert_eq!(compute_active_section(250.0, H, &sections), None);
    }

    #[test]
    fn never_moves_backwards_while_scrolling_down() {
        let sections = layout();
        let order = |id: char| sections.iter().position(|(s, _)| *s == id).unwrap();
        let mut previous = 0;
        let mut offset = 0.0;
        while offset < 2500.0 {
            let idx = order(compute_active_section(offset, H, &sections).unwrap());
            assert!(idx >= previous, "moved back at offset {}", offset);
            previous = idx;
            offset += 17.0;
        }
    }

    #[test]
    fn tracker_reports_only_changes() {
        let mut tracker = ActiveSectionTracker::new(H);
        let sections = layout();
        assert_eq!(tracker.update(0.0, &sections), Some('A'));
        assert_eq!(tracker.update(0.0, &sections), None);
        assert_eq!(tracker.update(10.0, &sections), None);
        assert_eq!(tracker.update(600.0, &sections), Some('B'));
        assert_eq!(tracker.update(600.0, &sections), None);
        assert_eq!(tracker.current(), Some('B'));
        assert_eq!(tracker.update(0.0, &sections), Some('A'));
    }

    #[test]
    fn tracker_ignores_empty_layout() {
        let mut tracker: ActiveSectionTracker<char> = ActiveSectionTracker::new(H);
        assert_eq!(tracker.update(100.0, &[]), None);
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn scroll_target_leaves_room_for_header() {
        assert_eq!(scroll_target(250.0, 1000.0, H), 1178.0);
        assert_eq!(scroll_target(-300.0, 1000.0, H), 628.0);
    }

    #[test]
    fn registry_keeps_first_of_duplicate_ids() {
        let registry = SectionRegistry::new(&[Section::Letters, Section::Memorial, Section::Letters]);
        let ids: Vec<Section> = registry.ids().collect();
        assert_eq!(ids, vec![Section::Letters, Section::Memorial]);
    }

    #[test]
    fn section_ids_follow_tab_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["memorial", "letters", "myHall", "reserve"]);
    }
}
