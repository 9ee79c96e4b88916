use gloo_net::http::{Request, Response};
use lacebolla_core::{
    api::{ApiResponse, AuthApi, Registration, CURRENT_USER_PATH, REGISTER_PATH, USER_EMAIL_HEADER},
    Config, Error, Result,
};

/// The authentication service reached with `fetch`.
pub struct HttpAuthApi {
    current_user_url: String,
    register_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &Config) -> Self {
        Self {
            current_user_url: config.api_url(CURRENT_USER_PATH),
            register_url: config.api_url(REGISTER_PATH),
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn current_user(&self, email: &str) -> Result<ApiResponse> {
        let response = Request::get(&self.current_user_url)
            .header(USER_EMAIL_HEADER, email)
            .send()
            .await
            .map_err(http_error)?;

        into_api_response(response).await
    }

    async fn register(&self, registration: &Registration) -> Result<ApiResponse> {
        let response = Request::post(&self.register_url)
            .json(registration)
            .map_err(http_error)?
            .send()
            .await
            .map_err(http_error)?;

        into_api_response(response).await
    }
}

async fn into_api_response(response: Response) -> Result<ApiResponse> {
    let status = response.status();
    let body = response.text().await.map_err(http_error)?;

    Ok(ApiResponse { status, body })
}

fn http_error(e: gloo_net::Error) -> Error {
    Error::Http(e.to_string())
}
