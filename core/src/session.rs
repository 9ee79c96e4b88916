use log::{info, warn};
use serde_json::Value;

use crate::{config::Config, error::Result, storage::KeyValueStore};

/// Client-held copy of the signed in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub email: String,
    pub profile: Value,
}

pub struct SessionStore<S> {
    store: S,
    email_key: String,
    profile_key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            email_key: config.session_email_key.clone(),
            profile_key: config.session_profile_key.clone(),
        }
    }

    /// Overwrites any previous session. When the profile cannot be written
    /// the email is removed again, so no email is left next to another
    /// user's profile.
    pub fn save(&self, session: &Session) -> Result<()> {
        let profile = serde_json::to_string(&session.profile)?;
        self.store.set_item(&self.email_key, &session.email)?;

        if let Err(e) = self.store.set_item(&self.profile_key, &profile) {
            if let Err(cleanup) = self.store.remove_item(&self.email_key) {
                warn!("could not discard partial session: {cleanup}");
            }
            return Err(e);
        }
        info!("session stored for {}", session.email);

        Ok(())
    }

    /// the stored session, if both parts are present and readable
    pub fn current(&self) -> Option<Session> {
        let email = self.store.get_item(&self.email_key).ok()??;
        let profile = self.store.get_item(&self.profile_key).ok()??;

        Some(Session {
            email,
            profile: serde_json::from_str(&profile).ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, storage::MemoryStore};
    use serde_json::json;

    /// rejects writes to a single key, everything else goes to `inner`
    struct RejectingKey {
        inner: MemoryStore,
        key: &'static str,
    }

    impl KeyValueStore for RejectingKey {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            if key == self.key {
                return Err(Error::Storage("quota exceeded".to_string()));
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone(), &Config::default());

        for email in ["ana@example.com", "luis@example.com"] {
            sessions
                .save(&Session {
                    email: email.to_string(),
                    profile: json!({ "email": email }),
                })
                .unwrap();
        }

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get_item("userEmail").unwrap().as_deref(),
            Some("luis@example.com")
        );
        assert_eq!(
            sessions.current().map(|s| s.profile),
            Some(json!({ "email": "luis@example.com" }))
        );
    }

    #[test]
    fn incomplete_session_is_absent() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone(), &Config::default());
        assert_eq!(sessions.current(), None);

        store.set_item("userEmail", "ana@example.com").unwrap();
        store.set_item("userData", "{broken").unwrap();
        assert_eq!(sessions.current(), None);
    }

    #[test]
    fn failed_profile_write_discards_email() {
        let store = MemoryStore::new();
        let config = Config::default();
        SessionStore::new(store.clone(), &config)
            .save(&Session {
                email: "ana@example.com".to_string(),
                profile: json!({ "username": "ana" }),
            })
            .unwrap();

        let sessions = SessionStore::new(
            RejectingKey {
                inner: store.clone(),
                key: "userData",
            },
            &config,
        );
        let result = sessions.save(&Session {
            email: "luis@example.com".to_string(),
            profile: json!({ "username": "luis" }),
        });

        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(store.get_item("userEmail").unwrap(), None);
        assert_eq!(sessions.current(), None);
    }
}
