use crate::{
    components::{error::InlineErrorMessage, layout::{Layout, LoadingSpinner}},
    pages::reservations::{
        components::{form::ReservationForm, list::ReservationList},
        view_model::use_reservations_view_model,
    },
    state::session::SessionCheck,
};
use leptos::*;

#[component]
pub fn ReservationsPanel() -> impl IntoView {
    let vm = use_reservations_view_model();
    let reservations = vm.reservations;
    let load_error = Signal::derive(move || match reservations.get() {
        Some(Err(SessionCheck::Unverified(err))) => Some(err),
        _ => None,
    });

    view! {
        <Layout>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 px-4">
                <ReservationForm form=vm.form />
                <div class="bg-white shadow rounded-lg p-6 space-y-4">
                    <h2 class="text-lg font-medium text-gray-900">{"Mis reservas"}</h2>
                    <InlineErrorMessage error=load_error />
                    <Suspense fallback=|| view! { <LoadingSpinner /> }>
                        {move || match reservations.get() {
                            Some(Ok(list)) => view! { <ReservationList reservations=list /> }.into_view(),
                            _ => ().into_view(),
                        }}
                    </Suspense>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::ssr::render_in_session;

    #[test]
    fn reservations_page_renders_form() {
        let html = render_in_session(
            AuthState {
                is_authenticated: true,
                ..AuthState::default()
            },
            || view! { <ReservationsPanel /> },
        );
        assert!(html.contains("reservaForm"));
        assert!(html.contains("Mis reservas"));
    }
}
