//! Login form flow.
//!
//! The service identifies the user by the `X-User-Email` header alone: the
//! password is required by the form but never sent, so a successful login
//! only proves that the account exists. This is a known weakness of the
//! authentication service and is kept as is.

use log::{info, warn};
use serde_json::Value;

use crate::{
    api::AuthApi,
    config::Config,
    session::{Session, SessionStore},
    storage::KeyValueStore,
    types::{FormOutcome, Redirect, Status, SubmitControl},
};

pub const MISSING_FIELDS: &str = "Ingresa tu correo y contraseña.";
pub const INVALID_CREDENTIALS: &str = "Usuario no encontrado o credenciales inválidas.";
pub const LOGIN_FAILED: &str = "Error al iniciar sesión.";
pub const LOGGED_IN: &str = "Inicio de sesión exitoso. Redirigiendo…";

pub fn submit_control() -> SubmitControl {
    SubmitControl::new("Iniciar sesión", "Ingresando…")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Validated login form. The password is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl LoginInput {
    pub fn validate(self) -> Result<Credentials, Status> {
        let email = self.email.trim();

        if email.is_empty() || self.password.is_empty() {
            return Err(Status::error(MISSING_FIELDS));
        }

        Ok(Credentials {
            email: email.to_string(),
            password: self.password,
        })
    }
}

pub struct LoginFlow<A, S> {
    api: A,
    sessions: SessionStore<S>,
    redirect: Redirect,
}

impl<A: AuthApi, S: KeyValueStore> LoginFlow<A, S> {
    pub fn new(api: A, sessions: SessionStore<S>, config: &Config) -> Self {
        Self {
            api,
            sessions,
            redirect: config.login_redirect.clone(),
        }
    }

    /// One request to the service; on success the session is stored and a
    /// redirect to the profile page is requested.
    pub async fn authenticate(&self, credentials: Credentials) -> FormOutcome {
        let response = match self.api.current_user(&credentials.email).await {
            Ok(response) => response,
            Err(e) => {
                warn!("login request failed: {e}");
                return FormOutcome::failed(Status::error(LOGIN_FAILED));
            }
        };

        if !response.is_success() {
            info!("login refused with status {}", response.status);
            return FormOutcome::failed(Status::error(INVALID_CREDENTIALS));
        }

        let profile: Value = match serde_json::from_str(&response.body) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("unreadable user profile: {e}");
                return FormOutcome::failed(Status::error(LOGIN_FAILED));
            }
        };

        let session = Session {
            email: credentials.email,
            profile,
        };

        if let Err(e) = self.sessions.save(&session) {
            warn!("could not store session: {e}");
            return FormOutcome::failed(Status::error(LOGIN_FAILED));
        }

        FormOutcome::succeeded(Status::success(LOGGED_IN), self.redirect.clone())
    }

    pub async fn submit(&self, input: LoginInput) -> FormOutcome {
        match input.validate() {
            Ok(credentials) => self.authenticate(credentials).await,
            Err(status) => FormOutcome::failed(status),
        }
    }
}
