use crate::{
    components::forms::{use_form, FormHandle},
    controllers::{FormController, LoginFlow, RegistrationFlow},
    state::auth::{use_api_client, use_session_store},
    validation::FormFields,
};

#[derive(Clone, Copy)]
pub struct AccountViewModel {
    pub registration: FormHandle,
    pub login: FormHandle,
}

pub fn use_account_view_model() -> AccountViewModel {
    let client = use_api_client();
    let store = use_session_store();

    let registration = use_form(
        FormController::new(
            RegistrationFlow::new(client.clone(), store.clone()),
            store.clone(),
        ),
        FormFields::new(),
        None,
    );
    let login = use_form(
        FormController::new(LoginFlow::new(client, store.clone()), store),
        FormFields::new(),
        None,
    );

    AccountViewModel {
        registration,
        login,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{helpers::provide_session, ssr::with_runtime};
    use leptos::*;

    #[test]
    fn account_view_model_defaults_empty() {
        with_runtime(|| {
            provide_session(AuthState::default());
            let vm = use_account_view_model();
            assert_eq!(vm.registration.fields.get_untracked(), FormFields::new());
            assert!(vm.login.messages.get_untracked().error.is_none());
        });
    }
}
