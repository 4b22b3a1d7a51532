use crate::{
    components::layout::Layout,
    config::routes,
    state::{
        auth::{use_api_client, use_auth, use_session_store, verify_session},
        session::SessionCheck,
    },
    utils::dom,
};
use leptos::*;

/// Where the "Reservar" call to action leads. A session that could not be
/// verified keeps its token, so the reservation page gets to show the error.
pub fn cta_target(check: &SessionCheck) -> &'static str {
    match check {
        SessionCheck::Valid | SessionCheck::Unverified(_) => routes::RESERVATIONS,
        SessionCheck::LoginRequired => routes::ACCOUNT,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (_auth, set_auth) = use_auth();
    let store = use_session_store();
    let client = use_api_client();
    let probe = create_action(move |_: &()| {
        let store = store.clone();
        let client = client.clone();
        async move {
            let check = verify_session(&store, &client, set_auth).await;
            dom::navigate(cta_target(&check));
        }
    });
    let probing = probe.pending();

    view! {
        <Layout>
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Hospedaje"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Reservá tu estadía en pocos pasos"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <button
                                id="cta-reservar"
                                type="button"
                                class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50 lg:py-4 lg:text-lg lg:px-10"
                                disabled=move || probing.get()
                                on:click=move |_| probe.dispatch(())
                            >
                                "Reservar"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
