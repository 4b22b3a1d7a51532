use crate::{api::UserSummary, components::empty_state::EmptyState};
use leptos::*;

#[component]
pub fn UserTable(
    users: Vec<UserSummary>,
    on_edit: Callback<UserSummary>,
    on_delete: Callback<UserSummary>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead>
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"ID"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Nombre"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Email"}</th>
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody id="users-table-body" class="bg-white divide-y divide-gray-200">
                    {if users.is_empty() {
                        view! {
                            <tr>
                                <td colspan="4" class="px-6 py-4">
                                    <EmptyState title="No hay usuarios registrados" />
                                </td>
                            </tr>
                        }
                        .into_view()
                    } else {
                        users
                            .into_iter()
                            .map(|user| {
                                let for_edit = user.clone();
                                let for_delete = user.clone();
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 text-sm text-gray-900">{user.id}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{user.full_name()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{user.email.clone()}</td>
                                        <td class="px-6 py-4 text-right space-x-2">
                                            <button
                                                type="button"
                                                class="text-action-primary-bg hover:underline text-sm"
                                                on:click=move |_| on_edit.call(for_edit.clone())
                                            >
                                                {"Editar"}
                                            </button>
                                            <button
                                                type="button"
                                                class="text-action-danger-bg hover:underline text-sm"
                                                on:click=move |_| on_delete.call(for_delete.clone())
                                            >
                                                {"Eliminar"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
