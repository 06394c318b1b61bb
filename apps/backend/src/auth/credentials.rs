//! Static credential store backing the login endpoint.

use std::collections::HashMap;

/// Immutable username -> password mapping, built once at startup and injected
/// through `AppState`.
///
/// Passwords are compared in plain text. That matches the demo data set this
/// service ships with; anything beyond a demo would store salted hashes.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// The demo accounts. Also used by the test suites.
    pub fn seeded() -> Self {
        let mut users = HashMap::new();
        users.insert("admin".to_string(), "password".to_string());
        users.insert("user".to_string(), "userpass".to_string());
        Self::new(users)
    }

    /// Returns true only if the username is present and the password matches
    /// exactly. An unknown username is a plain `false`, never an error.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }
}

#[cfg(test)]
mod tests {
    use super::CredentialStore;

    #[test]
    fn seeded_pairs_verify() {
        let store = CredentialStore::seeded();
        assert!(store.verify("admin", "password"));
        assert!(store.verify("user", "userpass"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = CredentialStore::seeded();
        assert!(!store.verify("admin", "wrong"));
        assert!(!store.verify("admin", ""));
    }

    #[test]
    fn unknown_username_is_rejected_without_error() {
        let store = CredentialStore::seeded();
        assert!(!store.verify("nobody", "password"));
        assert!(!store.verify("", ""));
    }

    #[test]
    fn passwords_are_not_interchangeable_between_users() {
        let store = CredentialStore::seeded();
        assert!(!store.verify("admin", "userpass"));
        assert!(!store.verify("user", "password"));
    }
}
