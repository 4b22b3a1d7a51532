use crate::{
    api::{ApiClient, ApiError},
    config::routes,
    state::session::{SessionCheck, SessionTokenStore},
    utils::dom,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// A session probe has settled since the page loaded.
    pub checked: bool,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// Provides the API client, the token store and the auth signal pair to
/// every page below it.
#[component]
pub fn SessionProvider(
    #[prop(optional)] client: Option<ApiClient>,
    #[prop(optional)] store: Option<SessionTokenStore>,
    children: Children,
) -> impl IntoView {
    let client = client.unwrap_or_default();
    let store = store.unwrap_or_else(SessionTokenStore::browser);
    let (auth_state, set_auth_state) = create_signal(AuthState {
        is_authenticated: store.is_present(),
        ..AuthState::default()
    });

    provide_context(client);
    provide_context(store);
    provide_context::<AuthContext>((auth_state, set_auth_state));
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}

pub fn use_session_store() -> SessionTokenStore {
    use_context::<SessionTokenStore>().unwrap_or_else(SessionTokenStore::browser)
}

/// Probes the session and mirrors the result into the auth signal.
pub async fn verify_session(
    store: &SessionTokenStore,
    client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> SessionCheck {
    set_auth_state.update(|state| state.loading = true);
    let probe = client.endpoints().reservations.clone();
    let check = store.require_valid(client, &probe).await;

    set_auth_state.update(|state| {
        state.loading = false;
        state.checked = true;
        match &check {
            SessionCheck::Valid => {
                state.is_authenticated = true;
                state.error = None;
            }
            SessionCheck::LoginRequired => {
                state.is_authenticated = false;
                state.error = None;
            }
            SessionCheck::Unverified(err) => state.error = Some(err.clone()),
        }
    });
    check
}

pub fn logout(store: &SessionTokenStore, set_auth_state: WriteSignal<AuthState>) {
    store.clear();
    set_auth_state.update(|state| {
        state.is_authenticated = false;
        state.loading = false;
        state.error = None;
    });
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let store = use_session_store();

    create_action(move |_: &()| {
        logout(&store, set_auth);
        dom::navigate(routes::ACCOUNT);
        async {}
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn verify_session_tracks_valid_and_rejected_tokens() {
        let server = MockServer::start_async().await;
        let mut ok = server.mock(|when, then| {
            when.method(GET)
                .path("/api/reservas")
                .header("Authorization", "Bearer good");
            then.status(200).json_body(serde_json::json!([]));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let client = ApiClient::new_with_base_url(server.base_url());
        let store = SessionTokenStore::in_memory();
        store.set("good").unwrap();

        assert!(!state.get().checked);
        let check = verify_session(&store, &client, set_state).await;
        assert_eq!(check, SessionCheck::Valid);
        assert!(state.get().checked);
        assert!(state.get().is_authenticated);
        assert!(!state.get().loading);

        ok.delete_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reservas");
            then.status(403)
                .json_body(serde_json::json!({"detail": "Not authenticated"}));
        });

        let check = verify_session(&store, &client, set_state).await;
        assert_eq!(check, SessionCheck::LoginRequired);
        assert!(!state.get().is_authenticated);
        assert!(!store.is_present());
        runtime.dispose();
    }
}
