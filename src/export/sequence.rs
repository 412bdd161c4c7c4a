use crate::types::DetailsId;

/// Line-item identifiers for one run, counting from 1 across all transactions.
#[derive(Debug)]
pub struct DetailsIdSequence {
    next: DetailsId
}

impl DetailsIdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> DetailsId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for DetailsIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
