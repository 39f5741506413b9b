use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use log::error;

/// Mints document identifiers from a monotonically increasing counter.
///
/// Values are never reused: a replaced document keeps its identifier and the
/// counter only moves forward. The generator is not synchronized; the store
/// only touches it while holding its write lock.
#[derive(Debug)]
pub(crate) struct SequentialIdGenerator {
    next: u64,
    exhausted: bool,
}

impl SequentialIdGenerator {
    pub(crate) fn new(initial: u64) -> Self {
        SequentialIdGenerator {
            next: initial,
            exhausted: false,
        }
    }

    /// Returns the next identifier in decimal form and advances the counter.
    pub(crate) fn next_id(&mut self) -> DocStoreResult<String> {
        if self.exhausted {
            error!("Identifier space exhausted after {}", u64::MAX);
            return Err(DocStoreError::new(
                "No identifiers left to assign",
                ErrorKind::InvalidId,
            ));
        }

        let id = self.next;
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        Ok(id.to_string())
    }

    /// The value the next call to `next_id` will hand out.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<u64> {
        (!self.exhausted).then_some(self.next)
    }
}
