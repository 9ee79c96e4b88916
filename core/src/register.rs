use log::{info, warn};

use crate::{
    api::{server_error_message, AuthApi, Registration},
    config::Config,
    types::{FormOutcome, Redirect, Status, SubmitControl},
};

pub const MISSING_FIELDS: &str = "Por favor, completa todos los campos.";
pub const REGISTRATION_FAILED: &str = "Error al registrar usuario.";
pub const UNEXPECTED_FAILURE: &str = "Error inesperado al registrar.";
pub const REGISTERED: &str = "Registro exitoso. Redirigiendo al inicio de sesión...";

pub fn submit_control() -> SubmitControl {
    SubmitControl::new("Registrarse", "Registrando...")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    /// username and email are trimmed, the password is kept verbatim
    pub fn validate(self) -> Result<Registration, Status> {
        let username = self.username.trim();
        let email = self.email.trim();

        if username.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(Status::error(MISSING_FIELDS));
        }

        Ok(Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password,
        })
    }
}

pub struct RegisterFlow<A> {
    api: A,
    redirect: Redirect,
}

impl<A: AuthApi> RegisterFlow<A> {
    pub fn new(api: A, config: &Config) -> Self {
        Self {
            api,
            redirect: config.register_redirect.clone(),
        }
    }

    pub async fn register(&self, registration: Registration) -> FormOutcome {
        let response = match self.api.register(&registration).await {
            Ok(response) => response,
            Err(e) => {
                warn!("registration request failed: {e}");
                return FormOutcome::failed(Status::error(UNEXPECTED_FAILURE));
            }
        };

        if !response.is_success() {
            info!("registration refused with status {}", response.status);
            let message = server_error_message(&response.body)
                .unwrap_or_else(|| REGISTRATION_FAILED.to_string());

            return FormOutcome::failed(Status::error(message));
        }

        info!("registered {}", registration.email);
        FormOutcome::succeeded(Status::success(REGISTERED), self.redirect.clone())
    }

    pub async fn submit(&self, input: RegistrationInput) -> FormOutcome {
        match input.validate() {
            Ok(registration) => self.register(registration).await,
            Err(status) => FormOutcome::failed(status),
        }
    }
}
