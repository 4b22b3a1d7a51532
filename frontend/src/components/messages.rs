use crate::{
    components::layout::{ErrorMessage, SuccessMessage},
    controllers::SubmitOutcome,
};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    /// Inline text for a submit outcome. `Busy` leaves the state as it is.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Busy => {}
            SubmitOutcome::Invalid(err) => self.set_error(err.message.clone()),
            SubmitOutcome::Failed(err) | SubmitOutcome::LoginRequired(err) => {
                self.set_error(err.user_message())
            }
            SubmitOutcome::Completed(done) => self.set_success(done.notice.clone()),
        }
    }

    /// The text that also goes to the blocking alert.
    pub fn current(&self) -> Option<&str> {
        self.error.as_deref().or(self.success.as_deref())
    }
}

#[component]
pub fn MessageBanner(messages: RwSignal<MessageState>) -> impl IntoView {
    view! {
        <Show when=move || messages.get().error.is_some()>
            <ErrorMessage message=Signal::derive(move || {
                messages.get().error.unwrap_or_default()
            }) />
        </Show>
        <Show when=move || messages.get().success.is_some()>
            <SuccessMessage message=Signal::derive(move || {
                messages.get().success.unwrap_or_default()
            }) />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::ApiError,
        controllers::Completion,
        validation::ValidationError,
    };
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn message_state_transitions() {
        let mut state = MessageState::default();
        state.set_success("ok");
        assert_eq!(state.success.as_deref(), Some("ok"));
        assert!(state.error.is_none());
        state.set_error("ng");
        assert_eq!(state.error.as_deref(), Some("ng"));
        assert!(state.success.is_none());
        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[wasm_bindgen_test]
    fn outcomes_map_to_messages() {
        let mut state = MessageState::default();
        state.apply(&SubmitOutcome::Invalid(ValidationError {
            field: "dni",
            message: "DNI inválido".into(),
        }));
        assert_eq!(state.current(), Some("DNI inválido"));

        state.apply(&SubmitOutcome::Busy);
        assert_eq!(state.current(), Some("DNI inválido"));

        state.apply(&SubmitOutcome::Failed(
            ApiError::api("Datos inválidos").with_details(vec!["DNI duplicado".into()]),
        ));
        assert_eq!(state.current(), Some("Datos inválidos\nDNI duplicado"));

        state.apply(&SubmitOutcome::Completed(Completion::stay("Reserva enviada")));
        assert_eq!(state.success.as_deref(), Some("Reserva enviada"));
        assert!(state.error.is_none());
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test]
    fn banner_follows_consecutive_errors() {
        use wasm_bindgen::JsCast;

        let document = web_sys::window().unwrap().document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let messages = create_rw_signal(MessageState::default());
        messages.update(|state| state.set_error("Error al eliminar usuario"));
        leptos::mount_to(host.clone(), move || view! { <MessageBanner messages=messages /> });
        assert!(host.inner_text().contains("Error al eliminar usuario"));

        messages.update(|state| state.set_error("Error al cargar usuarios"));
        let text = host.inner_text();
        assert!(text.contains("Error al cargar usuarios"));
        assert!(!text.contains("Error al eliminar usuario"));
    }
}
