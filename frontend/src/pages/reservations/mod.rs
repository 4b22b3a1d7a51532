use leptos::*;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::ReservationsPanel;

#[component]
pub fn ReservationsPage() -> impl IntoView {
    view! { <ReservationsPanel /> }
}
