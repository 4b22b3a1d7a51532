use crate::{
    components::{
        forms::{FormHandle, SubmitButton, TextField},
        messages::MessageBanner,
    },
    validation::fields,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegistrationForm(form: FormHandle) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.dispatch();
    };
    let values = form.fields;

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-gray-900">{"Crear usuario"}</h2>
                <p class="text-sm text-gray-600">{"Completa tus datos para registrarte."}</p>
            </div>
            <MessageBanner messages=form.messages />
            <form id="registroForm" class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                <TextField fields=values name=fields::NOMBRE label="Nombre" required=true />
                <TextField fields=values name=fields::APELLIDO label="Apellido" required=true />
                <TextField fields=values name=fields::DNI label="DNI" placeholder="12345678" required=true />
                <TextField fields=values name=fields::CUIL_CUIT label="CUIL/CUIT" placeholder="20-12345678-3" required=true />
                <TextField fields=values name=fields::EMAIL label="Email" input_type="email" required=true />
                <TextField fields=values name=fields::TELEFONO label="Teléfono" input_type="tel" required=true />
                <TextField fields=values name=fields::PASSWORD label="Contraseña" input_type="password" required=true />
                <TextField fields=values name=fields::CONFIRM_PASSWORD label="Confirmar contraseña" input_type="password" required=true />
                <div class="md:col-span-2">
                    <SubmitButton label="Crear usuario" pending=form.pending() />
                </div>
            </form>
        </div>
    }
}
