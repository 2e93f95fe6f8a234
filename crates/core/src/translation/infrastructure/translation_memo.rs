use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::shared::constants::DEFAULT_TRANSLATION_CACHE_CAPACITY;
use crate::translation::domain::cache_key::CacheKey;

/// Bounded translation cache with least-recently-used eviction.
///
/// Entries live in a slot arena; recency is a doubly-linked list threaded
/// through slot indices (`head` = least recent, `tail` = most recent) and a
/// hash index maps keys to slots. All state sits behind one mutex, so the
/// size seen by any caller never exceeds the capacity.
pub struct TranslationMemo {
    state: Mutex<LruState>,
}

struct Entry {
    key: CacheKey,
    value: String,
    prev: Option<usize>,
    next: Option<usize>,
}

struct LruState {
    capacity: usize,
    index: HashMap<CacheKey, usize>,
    slots: Vec<Option<Entry>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl TranslationMemo {
    pub fn new(capacity: usize) -> Result<Self, &'static str> {
        if capacity < 1 {
            return Err("capacity must be >= 1");
        }
        Ok(Self {
            state: Mutex::new(LruState::new(capacity)),
        })
    }

    /// Returns the cached translation and marks it most recently used.
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let mut state = self.lock();
        let slot = *state.index.get(key)?;
        state.move_to_tail(slot);
        state.entry(slot).map(|e| e.value.clone())
    }

    /// Inserts or refreshes a translation, evicting the least recently used
    /// entries when a new key would exceed the capacity.
    pub fn set(&self, key: CacheKey, value: String) {
        let mut state = self.lock();
        if let Some(&slot) = state.index.get(&key) {
            if let Some(entry) = state.slots[slot].as_mut() {
                entry.value = value;
            }
            state.move_to_tail(slot);
            return;
        }

        while state.index.len() >= state.capacity {
            if !state.evict_head() {
                break;
            }
        }
        state.push_tail(key, value);
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        let capacity = state.capacity;
        *state = LruState::new(capacity);
    }

    pub fn size(&self) -> usize {
        self.lock().index.len()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    fn lock(&self) -> MutexGuard<'_, LruState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for TranslationMemo {
    fn default() -> Self {
        Self {
            state: Mutex::new(LruState::new(DEFAULT_TRANSLATION_CACHE_CAPACITY)),
        }
    }
}

impl LruState {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::new(),
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    fn entry(&self, slot: usize) -> Option<&Entry> {
        self.slots.get(slot).and_then(|e| e.as_ref())
    }

    fn links(&self, slot: usize) -> (Option<usize>, Option<usize>) {
        self.entry(slot).map_or((None, None), |e| (e.prev, e.next))
    }

    fn set_prev(&mut self, slot: usize, prev: Option<usize>) {
        if let Some(e) = self.slots[slot].as_mut() {
            e.prev = prev;
        }
    }

    fn set_next(&mut self, slot: usize, next: Option<usize>) {
        if let Some(e) = self.slots[slot].as_mut() {
            e.next = next;
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = self.links(slot);
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
        self.set_prev(slot, None);
        self.set_next(slot, None);
    }

    fn link_tail(&mut self, slot: usize) {
        self.set_prev(slot, self.tail);
        self.set_next(slot, None);
        match self.tail {
            Some(t) => self.set_next(t, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    fn move_to_tail(&mut self, slot: usize) {
        if self.tail == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.link_tail(slot);
    }

    fn push_tail(&mut self, key: CacheKey, value: String) {
        let entry = Entry {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.link_tail(slot);
    }

    /// Removes the least recently used entry. Returns false when empty.
    fn evict_head(&mut self) -> bool {
        let Some(slot) = self.head else {
            return false;
        };
        self.unlink(slot);
        if let Some(evicted) = self.slots[slot].take() {
            log::trace!("Evicting translation of '{}'", evicted.key.text);
            self.index.remove(&evicted.key);
        }
        self.free.push(slot);
        true
    }
}
