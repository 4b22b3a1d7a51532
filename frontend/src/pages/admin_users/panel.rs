use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        messages::MessageBanner,
    },
    pages::admin_users::{
        components::{edit_modal::EditUserModal, table::UserTable},
        view_model::{use_admin_users_view_model, ListState},
    },
};
use leptos::*;

#[component]
pub fn AdminUsersPanel() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let list = vm.list;
    let pending_delete = vm.pending_delete;

    let on_edit = Callback::new({
        let vm = vm.clone();
        move |user| vm.open_editor(user)
    });
    let on_delete = Callback::new(move |user| pending_delete.set(Some(user)));
    let on_close = Callback::new({
        let vm = vm.clone();
        move |_| vm.close_editor()
    });
    let on_confirm = Callback::new({
        let vm = vm.clone();
        move |_| vm.confirm_delete()
    });
    let on_cancel = Callback::new(move |_| pending_delete.set(None));
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|user| format!("¿Eliminar al usuario {}?", user.full_name()))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="bg-white shadow rounded-lg p-6 space-y-4 mx-4">
                <h2 class="text-lg font-medium text-gray-900">{"Gestión de usuarios"}</h2>
                <MessageBanner messages=vm.messages />
                {move || match list.get() {
                    ListState::Loading => view! { <LoadingSpinner /> }.into_view(),
                    ListState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                    ListState::Loaded(users) => view! {
                        <UserTable users=users on_edit=on_edit on_delete=on_delete />
                    }
                    .into_view(),
                }}
            </div>
            <EditUserModal editing=vm.editing form=vm.edit_form on_close=on_close />
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Eliminar usuario"
                message=delete_message
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_disabled=vm.deleting
                destructive=true
            />
        </Layout>
    }
}
