use crate::{
    components::messages::MessageState,
    controllers::{FormController, FormFlow, SubmitOutcome},
    utils::dom,
    validation::FormFields,
};
use leptos::*;

/// Signals a page needs to drive one form through its controller.
#[derive(Clone, Copy)]
pub struct FormHandle {
    pub fields: RwSignal<FormFields>,
    pub messages: RwSignal<MessageState>,
    pub submit: Action<FormFields, SubmitOutcome>,
}

impl FormHandle {
    pub fn pending(&self) -> Signal<bool> {
        self.submit.pending().into()
    }

    pub fn dispatch(&self) {
        if self.submit.pending().get_untracked() {
            return;
        }
        self.messages.update(MessageState::clear);
        self.submit.dispatch(self.fields.get_untracked());
    }
}

/// Wires a controller to the page: each outcome updates the inline message,
/// raises the blocking alert, runs `on_completed` and follows the redirect.
pub fn use_form<F: FormFlow + 'static>(
    controller: FormController<F>,
    initial: FormFields,
    on_completed: Option<Callback<()>>,
) -> FormHandle {
    let fields = create_rw_signal(initial);
    let messages = create_rw_signal(MessageState::default());
    let submit = create_action(move |input: &FormFields| {
        let controller = controller.clone();
        let input = input.clone();
        async move { controller.submit(&input).await }
    });

    create_effect(move |_| {
        let Some(outcome) = submit.value().get() else {
            return;
        };
        if outcome == SubmitOutcome::Busy {
            return;
        }
        messages.update(|state| state.apply(&outcome));
        if let Some(text) = messages.with_untracked(|state| state.current().map(str::to_string)) {
            dom::notify(&text);
        }
        if outcome.is_completed() {
            if let Some(callback) = on_completed {
                callback.call(());
            }
        }
        if let Some(target) = outcome.redirect() {
            dom::navigate(target);
        }
    });

    FormHandle {
        fields,
        messages,
        submit,
    }
}

/// Labelled input bound to one entry of a [`FormFields`] signal.
#[component]
pub fn TextField(
    fields: RwSignal<FormFields>,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = format!("field-{name}");
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                id=id
                name=name
                type=input_type
                class="mt-1 w-full border rounded px-2 py-1"
                placeholder=placeholder.unwrap_or_default()
                required=required
                prop:value=move || fields.with(|f| f.get(name).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| f.set(name, value));
                }
            />
        </div>
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
            disabled=move || pending.get()
        >
            {move || if pending.get() { "Enviando...".to_string() } else { label.clone() }}
        </button>
    }
}
