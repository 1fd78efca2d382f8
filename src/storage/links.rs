//! Link store: one layer of directed links in file order.

use serde::{Deserialize, Serialize};

use super::SlotError;
use crate::input::RecordError;
use crate::model::ToLink;

/// 1-indexed list of links. Slot 0 is the sentinel and starts empty; the
/// distance pass may patch it with the default link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLinkStore")]
pub struct LinkStore {
    slots: Vec<Option<ToLink>>,
    max_links: usize,
}

#[derive(Deserialize)]
struct RawLinkStore {
    slots: Vec<Option<ToLink>>,
    max_links: usize,
}

impl TryFrom<RawLinkStore> for LinkStore {
    type Error = SlotError;

    fn try_from(raw: RawLinkStore) -> Result<Self, SlotError> {
        match raw.slots.first() {
            None => return Err(SlotError::MissingSentinel),
            Some(Some(link)) if *link != ToLink::default() => return Err(SlotError::OccupiedSentinel),
            Some(_) => {}
        }
        let count = raw.slots.len() - 1;
        if count > raw.max_links {
            return Err(SlotError::OverCapacity { count, max: raw.max_links });
        }
        Ok(Self { slots: raw.slots, max_links: raw.max_links })
    }
}

impl LinkStore {
    pub fn new(max_links: usize) -> Self {
        Self { slots: vec![None], max_links }
    }

    /// Number of links, sentinel excluded.
    pub fn count(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Append a link and return its 1-based index.
    pub fn push(&mut self, link: ToLink) -> Result<usize, RecordError> {
        if self.count() >= self.max_links {
            return Err(RecordError::LinkCapacity { max: self.max_links });
        }
        self.slots.push(Some(link));
        Ok(self.count())
    }

    pub fn get(&self, index: usize) -> Option<&ToLink> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ToLink> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Put `link` into slot `index`, which must already exist.
    pub fn patch(&mut self, index: usize, link: ToLink) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(link);
        }
    }

    /// Occupied slots `1..=count` with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ToLink)> {
        self.slots
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(i, slot)| slot.as_ref().map(|link| (i, link)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut ToLink)> {
        self.slots
            .iter_mut()
            .enumerate()
            .skip(1)
            .filter_map(|(i, slot)| slot.as_mut().map(|link| (i, link)))
    }

    /// Links in the half-open index range, skipping empty slots.
    pub fn range(&self, range: std::ops::Range<usize>) -> impl Iterator<Item = &ToLink> {
        self.slots
            .get(range)
            .unwrap_or_default()
            .iter()
            .flatten()
    }

    /// Raw slots, sentinel included.
    pub fn slots(&self) -> &[Option<ToLink>] {
        &self.slots
    }

    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }
}
