use crate::{
    components::{
        forms::{FormHandle, SubmitButton, TextField},
        messages::MessageBanner,
    },
    validation::fields,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(form: FormHandle) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.dispatch();
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-gray-900">{"Iniciar sesión"}</h2>
                <p class="text-sm text-gray-600">{"Ingresa con tu DNI y contraseña."}</p>
            </div>
            <MessageBanner messages=form.messages />
            <form id="loginForm" class="space-y-4" on:submit=on_submit>
                <TextField fields=form.fields name=fields::DNI label="DNI" required=true />
                <TextField fields=form.fields name=fields::PASSWORD label="Contraseña" input_type="password" required=true />
                <SubmitButton label="Ingresar" pending=form.pending() />
            </form>
        </div>
    }
}
