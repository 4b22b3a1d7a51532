use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub cuil_cuit: String,
    pub email: String,
    pub telefono: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("nombre", &self.nombre)
            .field("apellido", &self.apellido)
            .field("dni", &self.dni)
            .field("cuil_cuit", &self.cuil_cuit)
            .field("email", &self.email)
            .field("telefono", &self.telefono)
            .field("password", &"***")
            .finish()
    }
}

/// Body returned by the account creation endpoint. Some backend versions
/// hand out a session token here, others only echo the created user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl RegistrationResponse {
    pub fn session_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or(self.access_token.as_deref())
            .filter(|token| !token.trim().is_empty())
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialCheck {
    pub dni: String,
    pub password: String,
}

impl fmt::Debug for CredentialCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialCheck")
            .field("dni", &self.dni)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialCheckResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub dni: Option<String>,
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReservationStatus {
    Pendiente,
    Confirmado,
    Cancelada,
    Finalizada,
    #[serde(other)]
    Desconocido,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pendiente => "Pendiente",
            ReservationStatus::Confirmado => "Confirmada",
            ReservationStatus::Cancelada => "Cancelada",
            ReservationStatus::Finalizada => "Finalizada",
            ReservationStatus::Desconocido => "Sin estado",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewReservation {
    pub fecha_check_in: NaiveDate,
    pub fecha_check_out: NaiveDate,
    pub cantidad_habitaciones: u8,
}

/// A reservation as the backend reports it. The list endpoint renames the
/// columns (`fecha_entrada`, `fecha_salida`, `huespedes`), so both spellings
/// are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: i64,
    #[serde(alias = "fecha_entrada", deserialize_with = "flexible_date")]
    pub fecha_check_in: NaiveDate,
    #[serde(alias = "fecha_salida", deserialize_with = "flexible_date")]
    pub fecha_check_out: NaiveDate,
    #[serde(alias = "huespedes")]
    pub cantidad_habitaciones: u32,
    #[serde(default)]
    pub estado: Option<ReservationStatus>,
    #[serde(default, deserialize_with = "flexible_amount")]
    pub precio_total: Option<f64>,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        (self.fecha_check_out - self.fecha_check_in).num_days()
    }
}

// Accepts `2026-03-05` as well as `2026-03-05T00:00:00`.
fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

// Decimal columns arrive as strings from the backend.
fn flexible_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {text}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid amount: {other}"
        ))),
    }
}

/// Error body shape produced by the backend: `detail` is either a string
/// or a list of `{ "msg": ... }` objects, `errors` an optional list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn detail_messages(&self) -> Vec<String> {
        match &self.detail {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
            Some(other) => value_text(other).into_iter().collect(),
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .as_ref()
            .map(|items| items.iter().filter_map(value_text).collect())
            .unwrap_or_default()
    }
}

fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("msg").or_else(|| map.get("message")) {
            Some(Value::String(text)) => text.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    /// Rejected locally before any request was made.
    Validation,
    /// 401/403 from the backend, or no session token at all.
    Auth,
    /// Any other non-success response.
    Api,
    /// The request never completed.
    Network,
    /// A required DOM mount point was not found.
    MissingElement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.user_message()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.user_message().into_view()
    }
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            status: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, msg)
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Auth, msg)
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Api, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, msg)
    }

    pub fn missing_element(id: &str) -> Self {
        Self::new(
            ApiErrorKind::MissingElement,
            format!("Elemento del DOM no encontrado: #{id}"),
        )
    }

    pub fn with_status(mut self, status: Option<u16>) -> Self {
        self.status = status;
        self
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Prepends a context label, e.g. "Error al eliminar usuario: ...".
    pub fn prefixed(mut self, context: &str) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }

    pub fn is_auth(&self) -> bool {
        self.kind == ApiErrorKind::Auth
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Validation => "VALIDATION_ERROR",
            ApiErrorKind::Auth => "AUTH_ERROR",
            ApiErrorKind::Api => "API_ERROR",
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::MissingElement => "MISSING_ELEMENT",
        }
    }

    /// Message and details joined into the single text shown to the user.
    pub fn user_message(&self) -> String {
        if self.details.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{}", self.message, self.details.join("\n"))
        }
    }
}
