//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session store once, publishes it through
//! [`SessionContext`], and wires the routes. Protected dashboards sit behind
//! [`ProtectedRoute`]; everything else is public.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{RegisterRequest, Role};
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    property_detail::PropertyDetailPage, register::RegisterPage, search::SearchPage,
};
use crate::services::session::{AuthOutcome, SessionStore};
use crate::state::session::Session;
use crate::util::storage::BrowserStorage;

/// Session store as wired in the browser.
pub type BrowserSessionStore = SessionStore<ApiClient, BrowserStorage>;

/// Copyable handle to the session store plus a reactive mirror of its state.
///
/// Every mutation goes through the store and then republishes the store's
/// snapshot, so components only ever observe states the store produced.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<Arc<BrowserSessionStore>, LocalStorage>,
    state: RwSignal<Session>,
}

impl SessionContext {
    pub fn new(store: BrowserSessionStore) -> Self {
        let state = RwSignal::new(store.snapshot());
        Self { store: StoredValue::new_local(Arc::new(store)), state }
    }

    /// Reactive session state. Read-only by convention.
    pub fn state(self) -> RwSignal<Session> {
        self.state
    }

    /// Tracked read of the current session.
    pub fn get(self) -> Session {
        self.state.get()
    }

    /// API client carrying the current bearer token.
    pub fn api(self) -> ApiClient {
        self.store().authorized_api()
    }

    pub async fn initialize(self) {
        let store = self.store();
        store.initialize().await;
        self.publish(&store);
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(self, email: String, password: String) -> AuthOutcome {
        let store = self.store();
        let outcome = store.login(&email, &password).await;
        self.publish(&store);
        outcome
    }

    /// # Errors
    ///
    /// See [`SessionStore::register`].
    pub async fn register(self, request: RegisterRequest) -> AuthOutcome {
        let store = self.store();
        let outcome = store.register(&request).await;
        self.publish(&store);
        outcome
    }

    /// # Errors
    ///
    /// See [`SessionStore::refresh`].
    pub async fn refresh(self) -> AuthOutcome {
        let store = self.store();
        let outcome = store.refresh().await;
        self.publish(&store);
        outcome
    }

    /// Authenticated resource call with refresh-and-retry on 401.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::authorized`].
    pub async fn authorized<T, F, Fut>(self, call: F) -> Result<T, ApiError>
    where
        F: Fn(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let store = self.store();
        let outcome = store.authorized(call).await;
        self.publish(&store);
        outcome
    }

    pub async fn logout(self) {
        let store = self.store();
        store.logout().await;
        self.publish(&store);
    }

    fn store(self) -> Arc<BrowserSessionStore> {
        self.store.get_value()
    }

    fn publish(self, store: &BrowserSessionStore) {
        self.state.set(store.snapshot());
    }
}

/// Session handle provided by [`App`].
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Build the session store for `config`, provide it, and start rehydration.
pub fn provide_session(config: &ClientConfig) -> SessionContext {
    let session = SessionContext::new(SessionStore::new(ApiClient::from_config(config), BrowserStorage));
    provide_context(session);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(session.initialize());

    session
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env().unwrap_or_else(|error| {
        log::error!("invalid client configuration, using defaults: {error}");
        ClientConfig::default()
    });
    provide_session(&config);
    provide_context(config);

    view! {
        <Title text="RentIt"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("search") view=SearchPage/>
                        <Route path=(StaticSegment("property"), ParamSegment("id")) view=PropertyDetailPage/>
                        <Route
                            path=(StaticSegment("tenant"), StaticSegment("dashboard"))
                            view=|| view! {
                                <ProtectedRoute roles=vec![Role::Tenant]>
                                    <DashboardPage role=Role::Tenant/>
                                </ProtectedRoute>
                            }
                        />
                        <Route
                            path=(StaticSegment("owner"), StaticSegment("dashboard"))
                            view=|| view! {
                                <ProtectedRoute roles=vec![Role::Owner]>
                                    <DashboardPage role=Role::Owner/>
                                </ProtectedRoute>
                            }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("dashboard"))
                            view=|| view! {
                                <ProtectedRoute roles=vec![Role::Admin]>
                                    <DashboardPage role=Role::Admin/>
                                </ProtectedRoute>
                            }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
