use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireSession,
    config::routes,
    pages::{
        account::AccountPage, admin_users::AdminUsersPage, home::HomePage,
        reservations::ReservationsPage,
    },
    state::auth::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    routes::HOME,
    routes::ACCOUNT,
    routes::RESERVATIONS,
    routes::ADMIN_USERS,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[routes::RESERVATIONS];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[routes::HOME, routes::ACCOUNT, routes::ADMIN_USERS];

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Hospedaje"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=routes::HOME view=HomePage/>
                    <Route path=routes::ACCOUNT view=AccountPage/>
                    <Route path=routes::RESERVATIONS view=ProtectedReservations/>
                    <Route path=routes::ADMIN_USERS view=AdminUsersPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedReservations() -> impl IntoView {
    view! { <RequireSession><ReservationsPage/></RequireSession> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_and_public_routes_cover_every_route() {
        let mut combined: Vec<&str> = PROTECTED_ROUTE_PATHS
            .iter()
            .chain(PUBLIC_ROUTE_PATHS.iter())
            .copied()
            .collect();
        combined.sort_unstable();
        let mut all = ROUTE_PATHS.to_vec();
        all.sort_unstable();
        assert_eq!(combined, all);
    }

    #[test]
    fn reservation_page_is_the_only_protected_route() {
        assert_eq!(PROTECTED_ROUTE_PATHS, &["/crear_reserva"]);
    }
}
