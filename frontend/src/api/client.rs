use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{ApiError, ApiErrorKind, ErrorBody},
    config::{self, Endpoints},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    endpoints: Endpoints,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            endpoints: Endpoints::default(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            endpoints: Endpoints::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<RequestBuilder, ApiError> {
        let base_url = self.resolved_base_url().await;
        log::debug!("{} {}", method, path);
        let builder = self.client.request(method, join_url(&base_url, path));
        match token {
            Some(token) => Ok(builder.header(AUTHORIZATION, bearer_header(token)?)),
            None => Ok(builder),
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|err| {
            if err.is_builder() {
                ApiError::api(format!("Solicitud inválida: {err}"))
            } else {
                log::warn!("request failed without response: {err}");
                ApiError::network(format!("Error de conexión: {err}"))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::network(format!("Error de conexión: {err}")))?;

        if status.is_success() {
            parse_success(&body)
        } else {
            let error = error_from_body(status.as_u16(), &body);
            log::warn!("request rejected with {}: {}", status, error.message);
            Err(error)
        }
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, token).await?.json(body);
        self.send(builder).await
    }

    pub async fn post_form<F, T>(&self, path: &str, fields: &F) -> Result<T, ApiError>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, None).await?.form(fields);
        self.send(builder).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path, token).await?;
        self.send(builder).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path, token).await?.json(body);
        self.send(builder).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::DELETE, path, token).await?;
        self.send(builder).await
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn bearer_header(token: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&format!("Bearer {}", token.trim()))
        .map_err(|_| ApiError::auth("Token de sesión inválido"))
}

pub(crate) fn parse_success<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw)
        .map_err(|err| ApiError::api(format!("Respuesta inválida del servidor: {err}")))
}

/// Turns a non-success response into an [`ApiError`]. `detail` becomes the
/// message, `errors` the details; an unreadable body falls back to a generic
/// message carrying the status code.
pub(crate) fn error_from_body(status: u16, body: &str) -> ApiError {
    let kind = if status == 401 || status == 403 {
        ApiErrorKind::Auth
    } else {
        ApiErrorKind::Api
    };
    let generic = format!("Error desconocido (HTTP {status})");

    let (message, details) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            let detail = parsed.detail_messages();
            let message = if detail.is_empty() {
                parsed
                    .error
                    .clone()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or(generic)
            } else {
                detail.join("; ")
            };
            (message, parsed.error_messages())
        }
        Err(_) => (generic, Vec::new()),
    };

    let error = match kind {
        ApiErrorKind::Auth => ApiError::auth(message),
        _ => ApiError::api(message),
    };
    error.with_details(details).with_status(Some(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://hotel.test/", "/api/reservas"),
            "http://hotel.test/api/reservas"
        );
        assert_eq!(
            join_url("http://hotel.test", "usuarios/crear"),
            "http://hotel.test/usuarios/crear"
        );
    }

    #[test]
    fn bearer_header_rejects_control_characters() {
        assert!(bearer_header("abc.def").is_ok());
        assert!(bearer_header("abc\ndef").unwrap_err().is_auth());
    }

    #[test]
    fn error_from_body_uses_detail_and_errors() {
        let error = error_from_body(
            400,
            r#"{"detail":"Datos inválidos","errors":["DNI duplicado","Email duplicado"]}"#,
        );
        assert_eq!(error.kind, ApiErrorKind::Api);
        assert_eq!(error.status, Some(400));
        assert_eq!(
            error.user_message(),
            "Datos inválidos\nDNI duplicado\nEmail duplicado"
        );
    }

    #[test]
    fn error_from_body_maps_auth_statuses() {
        assert!(error_from_body(401, r#"{"detail":"Token Inválido"}"#).is_auth());
        assert!(error_from_body(403, "").is_auth());
        assert!(!error_from_body(500, "").is_auth());
    }

    #[test]
    fn error_from_body_falls_back_on_unreadable_body() {
        let error = error_from_body(502, "<html>Bad gateway</html>");
        assert_eq!(error.message, "Error desconocido (HTTP 502)");
        assert!(error.details.is_empty());
    }

    #[test]
    fn error_from_body_accepts_error_key() {
        let error = error_from_body(400, r#"{"error":"Fechas no disponibles"}"#);
        assert_eq!(error.message, "Fechas no disponibles");
    }

    #[test]
    fn parse_success_treats_empty_body_as_null() {
        let value: serde_json::Value = parse_success("").unwrap();
        assert!(value.is_null());
        let result: Result<Vec<i32>, _> = parse_success("{oops");
        assert_eq!(result.unwrap_err().kind, ApiErrorKind::Api);
    }
}
