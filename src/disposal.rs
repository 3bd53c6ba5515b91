//! Teardown policy for payloads still held by a structure being freed.

use core::fmt;

/// What `free` does with each payload it still holds.
///
/// `Release` hands every remaining payload to the closure, exactly once.
/// `Transfer` declares that payload ownership has already moved to another
/// structure and only the wrappers are being torn down; finding a payload
/// during a `Transfer` teardown is a contract violation and panics.
pub enum Disposal<'a, T> {
    Release(&'a mut dyn FnMut(T)),
    Transfer,
}

impl<'a, T> Disposal<'a, T> {
    /// Dispose of a single payload according to the policy.
    #[inline]
    pub(crate) fn dispose(&mut self, payload: T) {
        match self {
            Disposal::Release(f) => f(payload),
            Disposal::Transfer => {
                drop(payload);
                panic!("payload still present during ownership-transfer teardown");
            }
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Disposal::Transfer)
    }
}

impl<'a, T> fmt::Debug for Disposal<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposal::Release(_) => f.write_str("Release(..)"),
            Disposal::Transfer => f.write_str("Transfer"),
        }
    }
}
