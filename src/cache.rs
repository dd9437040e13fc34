use std::sync::{Mutex, PoisonError};

/// Single-slot store for the most recent upstream payload.
///
/// The slot starts empty and is overwritten wholesale on every successful
/// fetch; readers always see either the empty initial state or one complete
/// payload, never a partial write. The lock is only held for the copy in or
/// out, never across a network call.
#[derive(Debug, Default)]
pub struct ResponseSlot {
    content: Mutex<Vec<u8>>,
}

impl ResponseSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot contents. Last write wins.
    pub fn store(&self, payload: Vec<u8>) {
        let mut content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        *content = payload;
    }

    /// Returns a copy of the current contents; empty until the first store.
    pub fn load(&self) -> Vec<u8> {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let slot = ResponseSlot::new();
        assert!(slot.load().is_empty());
    }

    #[test]
    fn last_write_wins() {
        let slot = ResponseSlot::new();
        slot.store(b"first".to_vec());
        slot.store(b"second".to_vec());
        assert_eq!(slot.load(), b"second");
    }

    #[test]
    fn load_does_not_consume() {
        let slot = ResponseSlot::new();
        slot.store(b"payload".to_vec());
        assert_eq!(slot.load(), b"payload");
        assert_eq!(slot.load(), b"payload");
    }
}
