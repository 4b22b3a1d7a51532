use crate::{
    components::{
        forms::{FormHandle, SubmitButton, TextField},
        messages::MessageBanner,
    },
    utils::time,
    validation::{fields, MAX_ROOMS},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ReservationForm(form: FormHandle) -> impl IntoView {
    let values = form.fields;
    let today = time::today().format("%Y-%m-%d").to_string();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.dispatch();
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-gray-900">{"Nueva reserva"}</h2>
                <p class="text-sm text-gray-600">{"Elegí las fechas de tu estadía."}</p>
            </div>
            <MessageBanner messages=form.messages />
            <form id="reservaForm" class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="field-fecha_check_in" class="block text-sm font-medium text-gray-700">{"Fecha de entrada"}</label>
                    <input
                        id="field-fecha_check_in"
                        type="date"
                        min=today
                        class="mt-1 w-full border rounded px-2 py-1"
                        required
                        prop:value=move || values.with(|f| f.get(fields::CHECK_IN).to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            values.update(|f| f.set(fields::CHECK_IN, value));
                        }
                    />
                </div>
                <TextField fields=values name=fields::CHECK_OUT label="Fecha de salida" input_type="date" required=true />
                <div>
                    <label for="field-cantidad_habitaciones" class="block text-sm font-medium text-gray-700">{"Habitaciones"}</label>
                    <select
                        id="field-cantidad_habitaciones"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || values.with(|f| f.get(fields::ROOMS).to_string())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            values.update(|f| f.set(fields::ROOMS, value));
                        }
                    >
                        {(1..=MAX_ROOMS).map(|n| view! { <option value=n.to_string()>{n}</option> }).collect_view()}
                    </select>
                </div>
                <SubmitButton label="Reservar" pending=form.pending() />
            </form>
        </div>
    }
}
