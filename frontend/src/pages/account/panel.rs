use crate::{
    components::layout::Layout,
    pages::account::{
        components::{login_form::LoginForm, registration_form::RegistrationForm},
        view_model::use_account_view_model,
    },
};
use leptos::*;

#[component]
pub fn AccountPanel() -> impl IntoView {
    let vm = use_account_view_model();

    view! {
        <Layout>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 px-4">
                <RegistrationForm form=vm.registration />
                <LoginForm form=vm.login />
            </div>
        </Layout>
    }
}
