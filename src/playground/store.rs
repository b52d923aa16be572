// src/playground/store.rs — The live, editable item list

use std::collections::HashSet;

use super::color;
use super::types::Item;
use crate::infra::config::SeedItem;

/// Ordered list of items the user is editing.
///
/// Tracks which items had their text edited since the last scored
/// submission; submitting is only possible when at least one has.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    edited: HashSet<String>,
    /// Bumped on every text edit.
    revision: u64,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `seed`. Seeded items count as edited so the
    /// first compare is available right away.
    pub fn seeded(seed: &[SeedItem]) -> Self {
        let items: Vec<Item> = seed
            .iter()
            .map(|s| Item::new(new_id(), s.color.clone(), s.text.clone()))
            .collect();
        let edited = items.iter().map(|i| i.id.clone()).collect();
        Self {
            items,
            edited,
            revision: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn is_edited(&self, id: &str) -> bool {
        self.edited.contains(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_submit(&self) -> bool {
        !self.items.is_empty() && !self.edited.is_empty()
    }

    /// Append an empty item with a random color. Returns its id.
    pub fn add(&mut self) -> String {
        let item = Item::new(new_id(), color::random_color(), "");
        let id = item.id.clone();
        tracing::debug!(id = %id, color = %item.color, "item added");
        self.items.push(item);
        id
    }

    pub fn edit_text(&mut self, id: &str, text: impl Into<String>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.text = text.into();
            self.edited.insert(id.to_string());
            self.revision += 1;
        }
    }

    pub fn edit_color(&mut self, id: &str, color: impl Into<String>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.color = color.into();
        }
    }

    /// Move `id` to `new_index` (clamped to the end of the list).
    /// Returns the index the item ended up at.
    pub fn reorder(&mut self, id: &str, new_index: usize) -> Option<usize> {
        let from = self.position(id)?;
        let item = self.items.remove(from);
        let to = new_index.min(self.items.len());
        self.items.insert(to, item);
        Some(to)
    }

    /// Drop blank items and hand back what is left for scoring.
    ///
    /// `None` when there is nothing to submit: the list is empty or no text
    /// changed since the last scored submission. The edited marks stay until
    /// `mark_scored`, so a failed or rejected request can be retried.
    pub fn submit(&mut self) -> Option<Vec<Item>> {
        if !self.can_submit() {
            return None;
        }
        let before = self.items.len();
        self.items.retain(|i| !i.is_blank());
        if self.items.len() != before {
            tracing::debug!(dropped = before - self.items.len(), "blank items removed");
        }
        Some(self.items.clone())
    }

    /// Record that the list as of `revision` was scored. Text edited after
    /// that revision keeps its mark.
    pub fn mark_scored(&mut self, revision: u64) {
        if revision == self.revision {
            self.edited.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(texts: &[&str]) -> ItemStore {
        let seed: Vec<SeedItem> = texts
            .iter()
            .map(|t| SeedItem {
                text: t.to_string(),
                color: "#123456".into(),
            })
            .collect();
        ItemStore::seeded(&seed)
    }

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_empty_item() {
        let mut store = store_with(&["a", "b"]);
        let id = store.add();
        assert_eq!(store.len(), 3);
        let item = store.get(&id).unwrap();
        assert_eq!(item.text, "");
        assert!(color::is_valid(&item.color));
        assert_eq!(store.position(&id), Some(2));
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut store = ItemStore::new();
        let ids: HashSet<String> = (0..50).map(|_| store.add()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_added_item_is_not_an_edit() {
        let mut store = ItemStore::new();
        store.add();
        assert!(!store.can_submit());
        assert_eq!(store.submit(), None);
    }

    #[test]
    fn test_edit_text_in_place() {
        let mut store = store_with(&["a", "b", "c"]);
        let id = store.items()[1].id.clone();
        store.edit_text(&id, "bee");
        assert_eq!(texts(store.items()), vec!["a", "bee", "c"]);
        assert!(store.is_edited(&id));
    }

    #[test]
    fn test_edit_color_does_not_enable_submit() {
        let mut store = store_with(&["a", "b"]);
        store.submit().unwrap();
        store.mark_scored(store.revision());
        let id = store.items()[0].id.clone();
        store.edit_color(&id, "orange");
        assert_eq!(store.items()[0].color, "orange");
        assert!(!store.can_submit());
    }

    #[test]
    fn test_edit_unknown_id_is_ignored() {
        let mut store = store_with(&["a"]);
        store.submit().unwrap();
        store.mark_scored(store.revision());
        store.edit_text("nope", "x");
        store.edit_color("nope", "red");
        assert_eq!(texts(store.items()), vec!["a"]);
        assert!(!store.can_submit());
    }

    #[test]
    fn test_reorder_moves_item() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let id = store.items()[0].id.clone();
        assert_eq!(store.reorder(&id, 2), Some(2));
        assert_eq!(texts(store.items()), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_preserves_multiset() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let mut before: Vec<Item> = store.items().to_vec();
        let id = store.items()[3].id.clone();
        store.reorder(&id, 0);
        let mut after: Vec<Item> = store.items().to_vec();
        before.sort_by(|x, y| x.id.cmp(&y.id));
        after.sort_by(|x, y| x.id.cmp(&y.id));
        assert_eq!(before, after);
        assert_eq!(store.items()[0].text, "d");
    }

    #[test]
    fn test_reorder_clamps_index() {
        let mut store = store_with(&["a", "b", "c"]);
        let id = store.items()[0].id.clone();
        assert_eq!(store.reorder(&id, 99), Some(2));
        assert_eq!(texts(store.items()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_unknown_id() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.reorder("missing", 0), None);
    }

    #[test]
    fn test_submit_filters_blank_items() {
        let mut store = store_with(&["a", "", "b"]);
        let snapshot = store.submit().unwrap();
        assert_eq!(texts(&snapshot), vec!["a", "b"]);
        assert_eq!(texts(store.items()), vec!["a", "b"]);
    }

    #[test]
    fn test_submit_filters_whitespace_only() {
        let mut store = store_with(&["a", "   ", "\t"]);
        let snapshot = store.submit().unwrap();
        assert_eq!(texts(&snapshot), vec!["a"]);
    }

    #[test]
    fn test_unscored_submit_can_be_retried() {
        let mut store = store_with(&["a", "", "b"]);
        let first = store.submit().unwrap();
        let again = store.submit().unwrap();
        assert_eq!(first, again);
        assert!(store.can_submit());
    }

    #[test]
    fn test_edit_after_submit_survives_mark_scored() {
        let mut store = store_with(&["a", "b"]);
        let rev = store.revision();
        store.submit().unwrap();
        let id = store.items()[1].id.clone();
        store.edit_text(&id, "bee");

        store.mark_scored(rev);
        assert!(store.can_submit());
        assert!(store.is_edited(&id));

        store.mark_scored(store.revision());
        assert!(!store.can_submit());
    }

    #[test]
    fn test_submit_empty_list_is_noop() {
        let mut store = ItemStore::new();
        assert_eq!(store.submit(), None);
    }

    #[test]
    fn test_submit_twice_without_edit_is_noop() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.submit().is_some());
        store.mark_scored(store.revision());
        assert_eq!(store.submit(), None);

        let id = store.items()[0].id.clone();
        store.edit_text(&id, "aa");
        let snapshot = store.submit().unwrap();
        assert_eq!(texts(&snapshot), vec!["aa", "b"]);
    }

    #[test]
    fn test_seeded_store_is_submittable() {
        let store = store_with(&["a", "b"]);
        assert!(store.can_submit());
        assert!(store.items().iter().all(|i| store.is_edited(&i.id)));
    }
}
