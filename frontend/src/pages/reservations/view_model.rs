use crate::{
    api::Reservation,
    components::forms::{use_form, FormHandle},
    config::routes,
    controllers::{load_reservations, FormController, ReservationFlow},
    state::{
        auth::{use_api_client, use_auth, use_session_store},
        session::SessionCheck,
    },
    utils::dom,
    validation::{fields, FormFields},
};
use leptos::*;

pub fn blank_reservation() -> FormFields {
    FormFields::new().with(fields::ROOMS, "1")
}

#[derive(Clone, Copy)]
pub struct ReservationsViewModel {
    pub form: FormHandle,
    pub reload: RwSignal<u32>,
    pub reservations: Resource<u32, Result<Vec<Reservation>, SessionCheck>>,
}

pub fn use_reservations_view_model() -> ReservationsViewModel {
    let (_auth, set_auth) = use_auth();
    let client = use_api_client();
    let store = use_session_store();
    let reload = create_rw_signal(0u32);

    let store_for_list = store.clone();
    let client_for_list = client.clone();
    let reservations = create_local_resource(
        move || reload.get(),
        move |_| {
            let client = client_for_list.clone();
            let store = store_for_list.clone();
            async move { load_reservations(&client, &store).await }
        },
    );

    create_effect(move |_| {
        if let Some(Err(SessionCheck::LoginRequired)) = reservations.get() {
            set_auth.update(|state| state.is_authenticated = false);
            dom::navigate(routes::ACCOUNT);
        }
    });

    let form_cell = create_rw_signal(None::<FormHandle>);
    let on_completed = Callback::new(move |_| {
        if let Some(form) = form_cell.get_untracked() {
            form.fields.set(blank_reservation());
        }
        reload.update(|value| *value = value.wrapping_add(1));
    });
    let form = use_form(
        FormController::new(ReservationFlow::new(client, store.clone()), store),
        blank_reservation(),
        Some(on_completed),
    );
    form_cell.set(Some(form));

    ReservationsViewModel {
        form,
        reload,
        reservations,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{helpers::provide_session, ssr::with_runtime};

    #[test]
    fn reservation_form_starts_with_one_room() {
        with_runtime(|| {
            provide_session(AuthState {
                is_authenticated: true,
                ..AuthState::default()
            });
            let vm = use_reservations_view_model();
            assert_eq!(vm.form.fields.get_untracked().get(fields::ROOMS), "1");
            assert_eq!(vm.reload.get_untracked(), 0);
        });
    }
}
