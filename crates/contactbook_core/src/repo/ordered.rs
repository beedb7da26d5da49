//! Insertion-ordered, id-unique record list shared by both collections.

use std::collections::BTreeSet;

/// Record addressed by a numeric id.
pub(crate) trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for crate::model::contact::Contact {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for crate::model::meeting::Meeting {
    fn key(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub(crate) struct OrderedRecords<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedRecords<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> OrderedRecords<T> {
    /// Next free id: one above the current maximum, starting at 1.
    ///
    /// Once `u32::MAX` is taken, falls back to the lowest unused id.
    /// `None` when every id is taken.
    pub(crate) fn next_id(&self) -> Option<u32> {
        let Some(max) = self.items.iter().map(Keyed::key).max() else {
            return Some(1);
        };
        if let Some(next) = max.checked_add(1) {
            return Some(next);
        }
        let taken: BTreeSet<u32> = self.items.iter().map(Keyed::key).collect();
        (1..=u32::MAX).find(|id| !taken.contains(id))
    }

    /// Appends `item`. Returns it back when its id is taken.
    pub(crate) fn insert(&mut self, item: T) -> Result<u32, T> {
        let key = item.key();
        if self.position_of(key).is_some() {
            return Err(item);
        }
        self.items.push(item);
        Ok(key)
    }

    /// Swaps the record with the same id in place. Returns it back when absent.
    pub(crate) fn replace(&mut self, item: T) -> Result<T, T> {
        match self.position_of(item.key()) {
            Some(index) => Ok(std::mem::replace(&mut self.items[index], item)),
            None => Err(item),
        }
    }

    pub(crate) fn remove(&mut self, key: u32) -> Option<T> {
        self.position_of(key).map(|index| self.items.remove(index))
    }

    pub(crate) fn get(&self, key: u32) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub(crate) fn get_mut(&mut self, key: u32) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    pub(crate) fn at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub(crate) fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(*item))
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn position_of(&self, key: u32) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }
}
