use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub const USER_EMAIL_HEADER: &str = "X-User-Email";
pub const CURRENT_USER_PATH: &str = "users/me";
pub const REGISTER_PATH: &str = "auth/register";

/// Status code and raw body of an API reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The remote authentication service. Implementations return `Err` only when
/// no response was received; error statuses come back as an [`ApiResponse`].
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET users/me` identifying the user by the `X-User-Email` header
    async fn current_user(&self, email: &str) -> Result<ApiResponse>;

    /// `POST auth/register` with the registration as JSON
    async fn register(&self, registration: &Registration) -> Result<ApiResponse>;
}

/// Error text from a JSON error body: `detail`, then `message`.
///
/// FastAPI validation failures carry `detail` as a list of objects, their
/// `msg` fields are joined.
pub fn server_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    detail_text(value.get("detail")).or_else(|| non_empty(value.get("message")))
}

fn detail_text(detail: Option<&Value>) -> Option<String> {
    match detail? {
        Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>();

            (!messages.is_empty()).then(|| messages.join("; "))
        }
        other => non_empty(Some(other)),
    }
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
