use crate::core::helpers::lock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Single-slot record of the navigation currently being dispatched.
#[derive(Debug, Default)]
pub struct InFlight {
    slot: Mutex<Option<u64>>,
    next_id: AtomicU64,
}

impl InFlight {
    /// Claims the slot, or `None` while another navigation holds it.
    pub fn acquire(&self) -> Option<NavigationToken<'_>> {
        let mut slot = lock(&self.slot);
        if slot.is_some() {
            return None;
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        *slot = Some(id);
        Some(NavigationToken { id, owner: self })
    }

    pub fn is_held(&self) -> bool {
        lock(&self.slot).is_some()
    }

    pub fn current(&self) -> Option<u64> {
        *lock(&self.slot)
    }
}

/// Held for the whole dispatch; dropping it frees the slot, whether the
/// dispatch finished, failed or its future was dropped.
#[derive(Debug)]
pub struct NavigationToken<'a> {
    id: u64,
    owner: &'a InFlight,
}

impl NavigationToken<'_> {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for NavigationToken<'_> {
    fn drop(&mut self) {
        let mut slot = lock(&self.owner.slot);
        if *slot == Some(self.id) {
            *slot = None;
        }
    }
}
