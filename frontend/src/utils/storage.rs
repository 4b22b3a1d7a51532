use crate::api::ApiError;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::api("No hay objeto window disponible"))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .map_err(|_| ApiError::api("localStorage no disponible"))?
        .ok_or_else(|| ApiError::api("localStorage no disponible"))
}

pub fn read_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn write_item(key: &str, value: &str) -> Result<(), ApiError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| ApiError::api("No se pudo guardar la sesión en el navegador"))
}

pub fn remove_item(key: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
