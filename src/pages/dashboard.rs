//! Role dashboards. Rendered only behind `ProtectedRoute`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::Role;

/// Dashboard heading for `role`.
pub fn dashboard_title(role: Role) -> String {
    format!("{} Dashboard (Coming Soon)", role.label())
}

#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">{dashboard_title(role)}</h1>
        </div>
    }
}
