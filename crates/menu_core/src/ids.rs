use shared::domain::ItemId;

/// Hands out item ids. Every id returned by one source is distinct from all
/// earlier ones.
pub trait IdSource {
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    // `None` once `u64::MAX` has been handed out.
    next: Option<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    /// # Panics
    ///
    /// After `u64::MAX` has been issued; reusing an id would break uniqueness.
    fn next_id(&mut self) -> ItemId {
        let Some(current) = self.next else {
            panic!("item id space exhausted");
        };
        self.next = current.checked_add(1);
        ItemId(current)
    }
}
