use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
const FALLBACK_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Page paths the flows navigate between.
pub mod routes {
    pub const HOME: &str = "/";
    pub const ACCOUNT: &str = "/crear_usuario";
    pub const RESERVATIONS: &str = "/crear_reserva";
    pub const ADMIN_USERS: &str = "/gestion_usuarios";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub token_storage_key: Option<String>,
}

/// Backend endpoint paths, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub register: String,
    pub token: String,
    pub login: String,
    pub reservations: String,
    pub users: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            register: "/usuarios/crear".into(),
            token: "/autenticar_creacion_usuario/login".into(),
            login: "/api/login".into(),
            reservations: "/api/reservas".into(),
            users: "/api/usuarios".into(),
        }
    }
}

impl Endpoints {
    pub fn user(&self, id: i64) -> String {
        format!("{}/{}", self.users.trim_end_matches('/'), id)
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TOKEN_STORAGE_KEY: OnceLock<String> = OnceLock::new();

pub fn token_storage_key() -> String {
    TOKEN_STORAGE_KEY
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TOKEN_STORAGE_KEY.to_string())
}

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Optional global objects: window.__HOSPEDAJE_ENV / window.__HOSPEDAJE_CONFIG
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let lookup = |keys: [&str; 2]| {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    };
    Some(RuntimeConfig {
        api_base_url: lookup(["API_BASE_URL", "api_base_url"]),
        token_storage_key: lookup(["TOKEN_STORAGE_KEY", "token_storage_key"]),
    })
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    ["__HOSPEDAJE_ENV", "__HOSPEDAJE_CONFIG"]
        .iter()
        .filter_map(|name| read_global(name))
        .find(|cfg| cfg.api_base_url.is_some() || cfg.token_storage_key.is_some())
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = page_origin()?;
    let resp = reqwest::get(format!("{origin}/config.json")).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Records a loaded config. Returns the API base URL in effect, if any.
pub fn apply_runtime_config(cfg: &RuntimeConfig) -> Option<String> {
    if let Some(key) = cfg.token_storage_key.as_deref().map(str::trim) {
        if !key.is_empty() {
            let _ = TOKEN_STORAGE_KEY.set(key.to_string());
        }
    }
    let url = cfg.api_base_url.as_deref().and_then(normalize_base_url)?;
    Some(API_BASE_URL.get_or_init(|| url).clone())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(url) = snapshot_from_globals().as_ref().and_then(apply_runtime_config) {
        return url;
    }
    if let Some(url) = fetch_runtime_config().await.as_ref().and_then(apply_runtime_config) {
        return url;
    }
    let fallback = page_origin()
        .and_then(|origin| normalize_base_url(&origin))
        .unwrap_or_else(|| FALLBACK_API_BASE_URL.to_string());
    log::debug!("API base URL falls back to {fallback}");
    API_BASE_URL.get_or_init(|| fallback).clone()
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
