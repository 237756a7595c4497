//! Access gate: a single shared key unblocks the whole interface.
//!
//! There is no attempt counting, lockout or delay. A wrong key is always
//! recoverable and the user may retry indefinitely.

use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{info, warn};

/// The access key that unblocks the dashboard (case-sensitive).
pub const ACCESS_KEY: &str = "user23456";

/// Inline message shown under the login form after a failed attempt.
pub const INVALID_KEY_MESSAGE: &str = "Incorrect key. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{}", INVALID_KEY_MESSAGE)]
    InvalidKey,
}

/// Authorization state of the running session.
///
/// Starts unauthenticated and can only be flipped by [`AccessGate::attempt_login`].
/// There is no logout.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Checks candidate keys against the fixed access key.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: &'static str,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self { secret: ACCESS_KEY }
    }
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim the candidate and compare it with the access key.
    ///
    /// On success the session becomes authenticated for good. On failure the
    /// session is left untouched.
    pub fn attempt_login(&self, session: &mut Session, candidate: &str) -> Result<(), AuthError> {
        if constant_time_compare(candidate.trim(), self.secret) {
            session.authenticated = true;
            info!("Access key accepted, dashboard unlocked");
            Ok(())
        } else {
            warn!("Rejected access key attempt");
            Err(AuthError::InvalidKey)
        }
    }
}

/// Constant-time string comparison so the key cannot be probed by timing.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Login overlay form: the typed key plus the last error, if any.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    input: String,
    error: Option<&'static str>,
}

impl LoginForm {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Replace the typed text. Any keystroke clears a stale error.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.error = None;
    }

    /// Submit the typed text to the gate.
    pub fn submit(&mut self, gate: &AccessGate, session: &mut Session) -> Result<(), AuthError> {
        match gate.attempt_login(session, &self.input) {
            Ok(()) => {
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(INVALID_KEY_MESSAGE);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== attempt_login Tests ====================

    #[test]
    fn test_exact_key_authenticates() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        assert!(gate.attempt_login(&mut session, "user23456").is_ok());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        assert!(gate.attempt_login(&mut session, " user23456 ").is_ok());
        assert!(session.is_authenticated());

        let mut session = Session::new();
        assert!(gate.attempt_login(&mut session, "\tuser23456\n").is_ok());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        let result = gate.attempt_login(&mut session, "anything-else");
        assert_eq!(result, Err(AuthError::InvalidKey));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        assert!(gate.attempt_login(&mut session, "USER23456").is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_inner_whitespace_is_not_trimmed() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        assert!(gate.attempt_login(&mut session, "user 23456").is_err());
    }

    #[test]
    fn test_no_lockout_after_many_failures() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        for _ in 0..100 {
            assert!(gate.attempt_login(&mut session, "nope").is_err());
        }
        assert!(gate.attempt_login(&mut session, "user23456").is_ok());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_failure_after_success_keeps_session() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        gate.attempt_login(&mut session, "user23456").unwrap();
        assert!(gate.attempt_login(&mut session, "wrong").is_err());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_auth_error_message() {
        assert_eq!(AuthError::InvalidKey.to_string(), "Incorrect key. Try again.");
    }

    // ==================== constant_time_compare Tests ====================

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("user23456", "user23456"));
        assert!(!constant_time_compare("user23456", "user23457"));
        assert!(!constant_time_compare("user23456", "user2345"));
        assert!(!constant_time_compare("", "user23456"));
    }

    // ==================== LoginForm Tests ====================

    #[test]
    fn test_form_records_error_on_failure() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        let mut form = LoginForm::default();
        form.set_input("bad");
        assert!(form.submit(&gate, &mut session).is_err());
        assert_eq!(form.error(), Some("Incorrect key. Try again."));
    }

    #[test]
    fn test_form_error_cleared_on_next_keystroke() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        let mut form = LoginForm::default();
        form.set_input("bad");
        let _ = form.submit(&gate, &mut session);
        form.set_input("u");
        assert_eq!(form.error(), None);
        assert_eq!(form.input(), "u");
    }

    #[test]
    fn test_form_success_clears_error() {
        let gate = AccessGate::new();
        let mut session = Session::new();
        let mut form = LoginForm::default();
        form.set_input("bad");
        let _ = form.submit(&gate, &mut session);
        form.set_input(" user23456");
        assert!(form.submit(&gate, &mut session).is_ok());
        assert_eq!(form.error(), None);
        assert!(session.is_authenticated());
    }
}
