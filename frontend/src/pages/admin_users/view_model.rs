use crate::{
    api::UserSummary,
    components::{
        forms::{use_form, FormHandle},
        messages::MessageState,
    },
    controllers::{FormController, UserAdmin, UserEditFlow},
    state::auth::{use_api_client, use_session_store},
    utils::dom,
    validation::{fields, FormFields},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<UserSummary>),
    Failed(String),
}

impl ListState {
    pub fn users(&self) -> Vec<UserSummary> {
        match self {
            ListState::Loaded(users) => users.clone(),
            _ => Vec::new(),
        }
    }
}

/// Modal fields for one user; the id travels as a hidden field.
pub fn edit_fields(user: &UserSummary) -> FormFields {
    FormFields::new()
        .with(fields::ID, user.id.to_string())
        .with(fields::NOMBRE, user.nombre.clone())
        .with(fields::APELLIDO, user.apellido.clone())
        .with(fields::EMAIL, user.email.clone())
}

#[derive(Clone)]
pub struct AdminUsersViewModel {
    pub admin: UserAdmin,
    pub list: RwSignal<ListState>,
    pub messages: RwSignal<MessageState>,
    pub editing: RwSignal<Option<UserSummary>>,
    pub pending_delete: RwSignal<Option<UserSummary>>,
    pub deleting: RwSignal<bool>,
    pub edit_form: FormHandle,
}

impl AdminUsersViewModel {
    pub fn reload(&self) {
        let admin = self.admin.clone();
        let list = self.list;
        list.set(ListState::Loading);
        spawn_local(async move {
            match admin.load().await {
                Ok(users) => list.set(ListState::Loaded(users)),
                Err(err) => {
                    log::error!("{err}");
                    list.set(ListState::Failed(err.user_message()));
                }
            }
        });
    }

    pub fn open_editor(&self, user: UserSummary) {
        self.edit_form.messages.update(MessageState::clear);
        self.edit_form.fields.set(edit_fields(&user));
        self.editing.set(Some(user));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(user) = self.pending_delete.get_untracked() else {
            return;
        };
        if self.deleting.get_untracked() {
            return;
        }
        let admin = self.admin.clone();
        let list = self.list;
        let messages = self.messages;
        let pending_delete = self.pending_delete;
        let deleting = self.deleting;
        deleting.set(true);
        spawn_local(async move {
            match admin.delete(user.id).await {
                Ok(deletion) => {
                    dom::notify(&deletion.message);
                    match deletion.users {
                        Ok(users) => {
                            list.set(ListState::Loaded(users));
                            messages.update(|state| state.set_success(deletion.message));
                        }
                        Err(err) => {
                            log::error!("{err}");
                            let text = err.user_message();
                            list.set(ListState::Failed(text.clone()));
                            messages.update(|state| {
                                state.success = Some(deletion.message);
                                state.error = Some(text);
                            });
                        }
                    }
                }
                Err(err) => {
                    let text = err.user_message();
                    dom::notify(&text);
                    messages.update(|state| state.set_error(text));
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let client = use_api_client();
    let store = use_session_store();
    let admin = UserAdmin::new(client.clone(), store.clone());

    let list = create_rw_signal(ListState::Loading);
    let messages = create_rw_signal(MessageState::default());
    let editing = create_rw_signal(None::<UserSummary>);
    let pending_delete = create_rw_signal(None::<UserSummary>);
    let deleting = create_rw_signal(false);
    let reload_requested = create_rw_signal(0u32);

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        reload_requested.update(|value| *value = value.wrapping_add(1));
    });
    let edit_form = use_form(
        FormController::new(UserEditFlow::new(client, store.clone()), store),
        FormFields::new(),
        Some(on_saved),
    );

    let vm = AdminUsersViewModel {
        admin,
        list,
        messages,
        editing,
        pending_delete,
        deleting,
        edit_form,
    };

    let vm_for_load = vm.clone();
    create_effect(move |_| {
        let _ = reload_requested.get();
        vm_for_load.reload();
    });

    vm
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{
        helpers::{provide_session, user},
        ssr::with_runtime,
    };

    #[test]
    fn opening_the_editor_fills_the_modal() {
        with_runtime(|| {
            provide_session(AuthState::default());
            let vm = use_admin_users_view_model();
            assert_eq!(vm.list.get_untracked(), ListState::Loading);

            vm.open_editor(user(3, "Carla", "Ruiz"));
            assert_eq!(vm.edit_form.fields.get_untracked().get(fields::NOMBRE), "Carla");
            assert_eq!(vm.editing.get_untracked().map(|u| u.id), Some(3));

            vm.close_editor();
            assert!(vm.editing.get_untracked().is_none());
        });
    }
}
