use crate::{
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    config::routes,
    state::{
        auth::{use_api_client, use_auth, use_session_store, verify_session},
        session::SessionCheck,
    },
    utils::dom,
};
use leptos::*;

/// Renders its children only for a signed-in visitor, and only once the
/// stored token has been revalidated. A rejected or missing token sends the
/// visitor to the account page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let store = use_session_store();
    let client = use_api_client();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_checked = create_memo(move |_| auth.get().checked);
    let is_loading = create_memo(move |_| auth.get().loading);
    let probe_error = Signal::derive(move || auth.get().error);

    create_effect(move |_| {
        let store = store.clone();
        let client = client.clone();
        spawn_local(async move {
            if verify_session(&store, &client, set_auth).await == SessionCheck::LoginRequired {
                dom::navigate(routes::ACCOUNT);
            }
        });
    });

    view! {
        <InlineErrorMessage error=probe_error />
        <Show
            when=move || {
                should_render_children(is_authenticated.get(), is_checked.get(), is_loading.get())
            }
            fallback=move || {
                if is_loading.get() || (is_authenticated.get() && !is_checked.get()) {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_checked: bool, is_loading: bool) -> bool {
    is_authenticated && is_checked && !is_loading
}
