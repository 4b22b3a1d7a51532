#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::{ApiClient, Reservation, ReservationStatus, UserSummary};
    use crate::state::{auth::AuthState, session::SessionTokenStore};
    use chrono::NaiveDate;
    use leptos::*;

    /// Context every page expects: client, in-memory token store, auth pair.
    pub fn provide_session(state: AuthState) -> SessionTokenStore {
        let store = SessionTokenStore::in_memory();
        if state.is_authenticated {
            let _ = store.set("test-token");
        }
        provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9"));
        provide_context(store.clone());
        provide_context(create_signal(state));
        store
    }

    pub fn provide_auth(is_authenticated: bool) -> SessionTokenStore {
        provide_session(AuthState {
            is_authenticated,
            ..AuthState::default()
        })
    }

    pub fn user(id: i64, nombre: &str, apellido: &str) -> UserSummary {
        UserSummary {
            id,
            nombre: nombre.into(),
            apellido: apellido.into(),
            email: format!("{}@example.com", nombre.to_lowercase()),
            dni: None,
        }
    }

    pub fn reservation(id: i64, check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> Reservation {
        let date = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Reservation {
            id,
            fecha_check_in: date(check_in),
            fecha_check_out: date(check_out),
            cantidad_habitaciones: 2,
            estado: Some(ReservationStatus::Pendiente),
            precio_total: None,
            contacto: None,
            fecha_creacion: None,
        }
    }
}
