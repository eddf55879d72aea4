//! # Embed Paginator
//!
//! Page-flipping state machine for embed pages. Navigation wraps, a select
//! row jumps straight to a page, and only the invoking user may drive the
//! controls. Live paginators are kept in a store keyed by message id until
//! they are stopped.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.3.0
//!
//! ## Changelog
//! - 1.1.0: Select-menu page jumps
//! - 1.0.0: Button navigation

use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use serenity::builder::CreateEmbed;
use serenity::model::id::UserId;

use super::view::{ButtonSpec, SelectOptionSpec, SelectSpec, ViewSpec};

pub const PAGER_FIRST: &str = "pager_first";
pub const PAGER_PREV: &str = "pager_prev";
pub const PAGER_NEXT: &str = "pager_next";
pub const PAGER_LAST: &str = "pager_last";
pub const PAGER_STOP: &str = "pager_stop";
pub const PAGER_SELECT: &str = "pager_select";

/// Select-row entry describing one page
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub title: String,
    pub description: Option<String>,
}

/// One live paginator: pages, position, and ownership
pub struct Paginator {
    owner: UserId,
    pages: Vec<CreateEmbed>,
    entries: Option<Vec<PageEntry>>,
    current: usize,
}

impl Paginator {
    /// Button-only paginator
    pub fn buttons(owner: UserId, pages: Vec<CreateEmbed>) -> Self {
        Self {
            owner,
            pages,
            entries: None,
            current: 0,
        }
    }

    /// Paginator with a select row for direct page jumps
    pub fn with_select(owner: UserId, pages: Vec<(CreateEmbed, PageEntry)>) -> Self {
        let (pages, entries): (Vec<CreateEmbed>, Vec<PageEntry>) = pages.into_iter().unzip();
        Self {
            owner,
            pages,
            entries: Some(entries),
            current: 0,
        }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// The embed for the current page
    pub fn page(&self) -> CreateEmbed {
        self.pages
            .get(self.current)
            .cloned()
            .unwrap_or_default()
    }

    pub fn first_page(&mut self) {
        self.current = 0;
    }

    pub fn last_page(&mut self) {
        self.current = self.pages.len().saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        if !self.pages.is_empty() {
            self.current = (self.current + 1) % self.pages.len();
        }
    }

    pub fn previous_page(&mut self) {
        if !self.pages.is_empty() {
            self.current = (self.current + self.pages.len() - 1) % self.pages.len();
        }
    }

    /// Jump directly to a page; out-of-range indexes are ignored
    pub fn jump_to(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    /// Apply one control interaction by custom id
    ///
    /// Returns false for the stop control, which ends the paginator.
    pub fn apply(&mut self, custom_id: &str, values: &[String]) -> bool {
        match custom_id {
            PAGER_FIRST => self.first_page(),
            PAGER_PREV => self.previous_page(),
            PAGER_NEXT => self.next_page(),
            PAGER_LAST => self.last_page(),
            PAGER_SELECT => {
                if let Some(index) = values.first().and_then(|v| v.parse::<usize>().ok()) {
                    self.jump_to(index);
                }
            }
            PAGER_STOP => return false,
            _ => {}
        }
        true
    }

    /// The control rows for the current state
    pub fn controls(&self) -> ViewSpec {
        let mut view = ViewSpec::new().button_row(vec![
            ButtonSpec::new(PAGER_FIRST).emoji('⏪'),
            ButtonSpec::new(PAGER_PREV).emoji('◀'),
            ButtonSpec::new(PAGER_NEXT).emoji('▶'),
            ButtonSpec::new(PAGER_LAST).emoji('⏩'),
            ButtonSpec::new(PAGER_STOP).emoji('🗑'),
        ]);
        if let Some(entries) = &self.entries {
            let mut select = SelectSpec::new(PAGER_SELECT).placeholder("Jump to a page");
            for (index, entry) in entries.iter().enumerate() {
                let mut option = SelectOptionSpec::new(&entry.title, &index.to_string());
                if let Some(description) = &entry.description {
                    option = option.description(description);
                }
                select = select.option(option);
            }
            view = view.select_row(select);
        }
        view
    }

    /// Controls with everything disabled, for a stopped paginator
    pub fn disabled_controls(&self) -> ViewSpec {
        self.controls().disabled()
    }
}

/// Live paginators, keyed by the message that carries them
#[derive(Default)]
pub struct PaginatorStore {
    active: DashMap<u64, Paginator>,
}

impl PaginatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, message_id: u64, paginator: Paginator) {
        self.active.insert(message_id, paginator);
    }

    pub fn get_mut(&self, message_id: u64) -> Option<RefMut<'_, u64, Paginator>> {
        self.active.get_mut(&message_id)
    }

    pub fn remove(&self, message_id: u64) -> Option<Paginator> {
        self.active.remove(&message_id).map(|(_, paginator)| paginator)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed(title: &str) -> CreateEmbed {
        let mut embed = CreateEmbed::default();
        embed.title(title);
        embed
    }

    fn pager(pages: usize) -> Paginator {
        Paginator::buttons(
            UserId(42),
            (0..pages).map(|i| embed(&format!("page {i}"))).collect(),
        )
    }

    #[test]
    fn test_navigation_wraps_both_directions() {
        let mut pager = pager(3);
        assert_eq!(pager.current_page(), 0);
        pager.previous_page();
        assert_eq!(pager.current_page(), 2);
        pager.next_page();
        assert_eq!(pager.current_page(), 0);
        pager.next_page();
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_first_and_last() {
        let mut pager = pager(5);
        pager.last_page();
        assert_eq!(pager.current_page(), 4);
        pager.first_page();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_jump_ignores_out_of_range() {
        let mut pager = pager(3);
        pager.jump_to(2);
        assert_eq!(pager.current_page(), 2);
        pager.jump_to(9);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_apply_routes_custom_ids() {
        let mut pager = pager(4);
        assert!(pager.apply(PAGER_NEXT, &[]));
        assert_eq!(pager.current_page(), 1);
        assert!(pager.apply(PAGER_SELECT, &["3".to_string()]));
        assert_eq!(pager.current_page(), 3);
        assert!(!pager.apply(PAGER_STOP, &[]));
    }

    #[test]
    fn test_controls_include_select_row_only_with_entries() {
        let plain = pager(2);
        assert_eq!(plain.controls().rows().len(), 1);

        let select = Paginator::with_select(
            UserId(42),
            vec![
                (embed("a"), PageEntry { title: "A".into(), description: None }),
                (embed("b"), PageEntry { title: "B".into(), description: Some("second".into()) }),
            ],
        );
        assert_eq!(select.controls().rows().len(), 2);
    }

    #[test]
    fn test_store_insert_mutate_remove() {
        let store = PaginatorStore::new();
        store.insert(7, pager(3));
        assert_eq!(store.len(), 1);
        {
            let mut live = store.get_mut(7).unwrap();
            live.next_page();
            assert_eq!(live.current_page(), 1);
        }
        assert!(store.remove(7).is_some());
        assert!(store.is_empty());
        assert!(store.get_mut(7).is_none());
    }
}
