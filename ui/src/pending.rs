//! Deferred invite token storage.
//!
//! A single durable key holds at most one token, written when an
//! unauthenticated visitor opens an invite link and consumed (read + cleared
//! in one step) by the reconciliation flow after login. Consuming before
//! attempting redemption guarantees at most one automatic attempt per storage
//! cycle, whatever the attempt's outcome.
//!
//! On the web build this is `localStorage`; elsewhere a process-local cell
//! stands in, which is also what the tests exercise.

pub const PENDING_INVITE_KEY: &str = "pendingInviteToken";

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;

    thread_local! {
        static PENDING: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub fn set(value: &str) {
        PENDING.with(|cell| *cell.borrow_mut() = Some(value.to_string()));
    }

    pub fn take() -> Option<String> {
        PENDING.with(|cell| cell.borrow_mut().take())
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::PENDING_INVITE_KEY;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn set(value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(PENDING_INVITE_KEY, value);
        }
    }

    pub fn take() -> Option<String> {
        let storage = storage()?;
        let value = storage.get_item(PENDING_INVITE_KEY).ok().flatten()?;
        let _ = storage.remove_item(PENDING_INVITE_KEY);
        Some(value)
    }
}

/// Park a token for redemption after login.
pub fn store_pending(token: &str) {
    if token.is_empty() {
        return;
    }
    backend::set(token);
}

/// Read and clear the parked token. Idempotent: a second call without a new
/// `store_pending` returns `None`.
pub fn take_pending() -> Option<String> {
    backend::take().filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_once_semantics() {
        store_pending("abc123");
        assert_eq!(take_pending(), Some("abc123".to_string()));
        // One read-and-clear cycle: nothing left for a second pass.
        assert_eq!(take_pending(), None);
    }

    #[test]
    fn last_write_wins() {
        store_pending("first");
        store_pending("second");
        assert_eq!(take_pending(), Some("second".to_string()));
        assert_eq!(take_pending(), None);
    }

    #[test]
    fn empty_tokens_are_ignored() {
        store_pending("");
        assert_eq!(take_pending(), None);
    }
}
