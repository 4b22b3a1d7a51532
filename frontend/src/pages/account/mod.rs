use leptos::*;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::AccountPanel;

#[component]
pub fn AccountPage() -> impl IntoView {
    view! { <AccountPanel /> }
}
