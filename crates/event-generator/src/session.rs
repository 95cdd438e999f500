//! Simulated session identity.

use uuid::Uuid;

/// One simulated user's identity, stable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Synthetic numeric user identifier.
    pub user_id: u64,
    /// Unique session token.
    pub user_session: String,
}

impl Session {
    /// Generate a fresh session identity.
    ///
    /// The numeric user id is a v4 UUID folded into nine decimal digits;
    /// the session token is a full v4 UUID string.
    pub fn generate() -> Session {
        let user_id = (Uuid::new_v4().as_u128() % 1_000_000_000) as u64;
        Session {
            user_id,
            user_session: Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_fits_nine_digits() {
        for _ in 0..1000 {
            let session = Session::generate();
            assert!(session.user_id < 1_000_000_000);
        }
    }

    #[test]
    fn test_session_tokens_are_unique() {
        let a = Session::generate();
        let b = Session::generate();
        assert_ne!(a.user_session, b.user_session);
    }

    #[test]
    fn test_session_token_is_uuid() {
        let session = Session::generate();
        uuid::Uuid::parse_str(&session.user_session).expect("session token should be a UUID");
    }
}
