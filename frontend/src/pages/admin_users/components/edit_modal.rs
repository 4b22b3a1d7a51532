use crate::{
    api::UserSummary,
    components::{
        forms::{FormHandle, SubmitButton, TextField},
        messages::MessageBanner,
    },
    validation::fields,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditUserModal(
    editing: RwSignal<Option<UserSummary>>,
    form: FormHandle,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.dispatch();
    };
    let title = move || {
        editing
            .get()
            .map(|user| format!("Editar usuario #{}", user.id))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || editing.get().is_some()>
            <div id="editModal" class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Cerrar"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <MessageBanner messages=form.messages />
                    <form id="editUserForm" class="space-y-4" on:submit=on_submit>
                        <input type="hidden" name=fields::ID prop:value=move || form.fields.with(|f| f.get(fields::ID).to_string()) />
                        <TextField fields=form.fields name=fields::NOMBRE label="Nombre" required=true />
                        <TextField fields=form.fields name=fields::APELLIDO label="Apellido" required=true />
                        <TextField fields=form.fields name=fields::EMAIL label="Email" input_type="email" required=true />
                        <div class="flex justify-end gap-2">
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                                on:click=move |_| on_close.call(())
                            >
                                {"Cancelar"}
                            </button>
                            <SubmitButton label="Guardar" pending=form.pending() />
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
