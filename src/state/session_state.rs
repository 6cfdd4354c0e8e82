// ============================================================================
// SESSION STATE - who is logged in
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;

/// Lifecycle of a session within one page load. `Initializing` means the
/// stored token (if any) has not been verified yet; consumers must treat
/// it as "not yet known", never as "logged out".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Anonymous,
    Authenticated,
}

/// Single source of truth for the authenticated identity. Shared by every
/// view through `Rc`; all mutation happens on the UI thread.
#[derive(Clone)]
pub struct SessionState {
    user: Rc<RefCell<Option<User>>>,
    loading: Rc<RefCell<bool>>,
    fetch_in_flight: Rc<RefCell<bool>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(true)),
            fetch_in_flight: Rc::new(RefCell::new(false)),
        }
    }

    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    pub fn is_superadmin(&self) -> bool {
        self.user
            .borrow()
            .as_ref()
            .map(|u| u.is_superadmin)
            .unwrap_or(false)
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn phase(&self) -> SessionPhase {
        if *self.loading.borrow() {
            SessionPhase::Initializing
        } else if self.user.borrow().is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Claim the identity fetch. Returns false when one is already
    /// running, so `fetch_current_user` never races itself.
    pub fn try_begin_fetch(&self) -> bool {
        let mut in_flight = self.fetch_in_flight.borrow_mut();
        if *in_flight {
            return false;
        }
        *in_flight = true;
        true
    }

    pub fn finish_fetch(&self) {
        *self.fetch_in_flight.borrow_mut() = false;
    }

    /// Drop the identity and mark the session resolved. Idempotent.
    pub fn clear(&self) {
        *self.user.borrow_mut() = None;
        *self.loading.borrow_mut() = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(is_superadmin: bool) -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            is_superadmin,
            is_active: true,
            role: "admin".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            last_login: None,
        }
    }

    #[test]
    fn starts_initializing_and_resolves_anonymous() {
        let session = SessionState::new();
        assert_eq!(session.phase(), SessionPhase::Initializing);
        session.set_loading(false);
        assert_eq!(session.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn an_identity_makes_the_session_authenticated() {
        let session = SessionState::new();
        session.set_user(Some(user(false)));
        session.set_loading(false);
        assert_eq!(session.phase(), SessionPhase::Authenticated);
        assert!(!session.is_superadmin());
        session.set_user(Some(user(true)));
        assert!(session.is_superadmin());
    }

    #[test]
    fn clear_is_idempotent() {
        let session = SessionState::new();
        session.set_user(Some(user(false)));
        session.set_loading(false);
        session.clear();
        session.clear();
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(session.get_user().is_none());
    }

    #[test]
    fn only_one_fetch_runs_at_a_time() {
        let session = SessionState::new();
        assert!(session.try_begin_fetch());
        assert!(!session.try_begin_fetch());
        session.finish_fetch();
        assert!(session.try_begin_fetch());
    }
}
