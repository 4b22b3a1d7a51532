use crate::{
    api::Reservation,
    components::empty_state::EmptyState,
    utils::time::format_long_date,
};
use leptos::*;

/// "Reserva del 2 de noviembre de 2026 al 5 de noviembre de 2026 - 2 habitaciones"
pub fn reservation_summary(reservation: &Reservation) -> String {
    format!(
        "Reserva del {} al {} - {} habitaciones",
        format_long_date(reservation.fecha_check_in),
        format_long_date(reservation.fecha_check_out),
        reservation.cantidad_habitaciones
    )
}

fn reservation_extras(reservation: &Reservation) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(estado) = reservation.estado {
        parts.push(format!("Estado: {}", estado.label()));
    }
    if let Some(precio) = reservation.precio_total {
        parts.push(format!("Total: ${precio:.2}"));
    }
    (!parts.is_empty()).then(|| parts.join(" · "))
}

#[component]
pub fn ReservationList(reservations: Vec<Reservation>) -> impl IntoView {
    if reservations.is_empty() {
        return view! { <EmptyState title="No tienes reservas aún." /> }.into_view();
    }

    view! {
        <ul id="reservas" class="divide-y divide-gray-200">
            {reservations
                .iter()
                .map(|reservation| {
                    let summary = reservation_summary(reservation);
                    let extras = reservation_extras(reservation);
                    view! {
                        <li class="py-3">
                            <p class="text-sm text-gray-900">{summary}</p>
                            {extras.map(|text| view! { <p class="text-xs text-gray-500">{text}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
