//! Metrics tab group
//!
//! Single-select among a fixed row of tabs. Only the marker moves; swapping
//! the metrics shown under the tabs is left to the host page.

use tracing::debug;

use crate::dom::Element;

pub struct TabGroup<E> {
    tabs: Vec<E>,
    active: Option<usize>,
    active_class: String,
}

impl<E: Element> TabGroup<E> {
    /// Seeds the selection from the first tab already marked in markup.
    pub fn new(tabs: Vec<E>, active_class: impl Into<String>) -> Self {
        let active_class = active_class.into();
        let active = tabs.iter().position(|t| t.has_class(&active_class));
        Self {
            tabs,
            active,
            active_class,
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn tabs(&self) -> &[E] {
        &self.tabs
    }

    /// Activate the tab at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        for tab in &self.tabs {
            tab.remove_class(&self.active_class);
        }
        self.tabs[index].add_class(&self.active_class);
        self.active = Some(index);
        debug!(index, "tab selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    fn tabs(n: usize) -> Vec<FakeElement> {
        (0..n).map(|_| FakeElement::new("button").with_class("tab")).collect()
    }

    fn marked(group: &TabGroup<FakeElement>) -> Vec<usize> {
        group
            .tabs()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.has_class("active"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn seeds_from_markup() {
        let row = tabs(3);
        row[1].add_class("active");
        let group = TabGroup::new(row, "active");
        assert_eq!(group.active(), Some(1));
    }

    #[test]
    fn no_initial_selection() {
        let group = TabGroup::new(tabs(2), "active");
        assert_eq!(group.active(), None);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn select_moves_marker() {
        let row = tabs(4);
        row[0].add_class("active");
        let mut group = TabGroup::new(row, "active");

        group.select(2);
        assert_eq!(marked(&group), vec![2]);
        group.select(2);
        assert_eq!(marked(&group), vec![2]);
        group.select(3);
        assert_eq!(marked(&group), vec![3]);
        assert_eq!(group.active(), Some(3));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut group = TabGroup::new(tabs(2), "active");
        group.select(0);
        group.select(5);
        assert_eq!(group.active(), Some(0));
        assert_eq!(marked(&group), vec![0]);
    }

    #[test]
    fn empty_group() {
        let mut group = TabGroup::<FakeElement>::new(Vec::new(), "active");
        assert!(group.is_empty());
        group.select(0);
        assert_eq!(group.active(), None);
    }
}
