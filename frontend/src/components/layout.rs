use crate::{
    config::routes,
    state::auth::{self, use_auth},
};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=routes::HOME class="text-xl font-semibold text-fg">
                        "Hospedaje"
                    </a>
                    <nav class="flex space-x-4">
                        <a href=routes::RESERVATIONS class=NAV_LINK>"Reservas"</a>
                        <a href=routes::ADMIN_USERS class=NAV_LINK>"Usuarios"</a>
                        <Show
                            when=move || auth.get().is_authenticated
                            fallback=|| view! {
                                <a href=routes::ACCOUNT class=NAV_LINK>"Ingresar"</a>
                            }
                        >
                            <button
                                id="logout"
                                on:click=on_logout
                                class=format!("{NAV_LINK} disabled:opacity-50")
                                disabled=move || logout_pending.get()
                            >
                                "Cerrar sesión"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm whitespace-pre-line">{move || message.get()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{move || message.get()}</p>
                </div>
            </div>
        </div>
    }
}
