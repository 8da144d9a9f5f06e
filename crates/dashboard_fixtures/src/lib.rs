//! Seeded, isolated stores for exercising dashboard components in tests.
//!
//! Every entry point builds a new store, and a new history unless one is supplied, so tests never
//! observe each other's dispatches or navigation.

use std::{collections::BTreeMap, rc::Rc};

use dashboard_state::{
    configure_store, past_fifteen_minutes, AppState, EphemeralState, LocalStorage, MemoryHistory,
    MemoryRouter, Organization, OrgsState, PersistedState, RemoteDataState, ResourcesState,
    RootState, Store, StoreProvider, Theme, TimeZone, UserSettingsState, VariablesState,
    STATE_VERSION,
};
use leptos::*;

/// Dashboard id the fixture seeds a time range for.
pub const FIXTURE_DASHBOARD_ID: &str = "0349ecda531ea000";
/// Id of the only organization in the fixture.
pub const FIXTURE_ORG_ID: &str = "orgid";

/// Builds the canonical fixture snapshot. Each call returns fresh records.
pub fn local_state() -> LocalStorage {
    let org = Organization {
        id: FIXTURE_ORG_ID.to_string(),
        name: "org".to_string(),
    };

    LocalStorage {
        version: STATE_VERSION.to_string(),
        app: AppState {
            ephemeral: Rc::new(EphemeralState {
                in_presentation_mode: false,
            }),
            persisted: Rc::new(PersistedState {
                theme: Theme::Dark,
                auto_refresh: 0,
                show_template_control_bar: false,
                time_zone: TimeZone::Local,
            }),
        },
        ranges: BTreeMap::from([(FIXTURE_DASHBOARD_ID.to_string(), past_fifteen_minutes())]),
        auto_refresh: BTreeMap::new(),
        user_settings: UserSettingsState::default(),
        resources: ResourcesState {
            orgs: OrgsState {
                by_id: BTreeMap::from([(org.id.clone(), org.clone())]),
                all_ids: vec![org.id.clone()],
                org: Some(org),
                status: RemoteDataState::Done,
            },
            variables: VariablesState::default(),
        },
    }
}

/// Default transform for the builders: leaves the seeded state as it is.
pub fn identity(state: RootState) -> RootState {
    state
}

#[derive(Debug, Clone)]
/// Where a router-aware harness starts.
pub struct RouteOptions {
    /// Route of the history created when `history` is `None`.
    pub route: String,
    /// History to use instead of a fresh one.
    pub history: Option<MemoryHistory>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            route: "/".to_string(),
            history: None,
        }
    }
}

impl RouteOptions {
    pub fn at(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            history: None,
        }
    }

    pub fn with_history(history: MemoryHistory) -> Self {
        Self {
            history: Some(history),
            ..Self::default()
        }
    }

    fn into_history(self) -> MemoryHistory {
        match self.history {
            Some(history) => history,
            None => MemoryHistory::at(&self.route),
        }
    }
}

/// Materializes the fixture through a throwaway [`configure_store`] against `history`.
pub fn seed_state(history: &MemoryHistory) -> RootState {
    let seed_store = configure_store(local_state(), history.clone());
    let seed_state = seed_store.get_state();
    seed_store.dispose();
    seed_state
}

/// Builds a store whose initial state is exactly `transform` applied to the materialized fixture.
///
/// The transform sees the fixture after store normalization, not the raw snapshot, and its
/// result is not normalized again.
pub fn build_store<F>(transform: F, history: MemoryHistory) -> Store
where
    F: FnOnce(RootState) -> RootState,
{
    let seed_state = seed_state(&history);
    configure_store(transform(seed_state), history)
}

/// A harness view together with the store and history behind it.
pub struct Rendered {
    pub view: View,
    pub store: Store,
    pub history: MemoryHistory,
}

/// A harness view wrapped in navigation context only.
pub struct RouterRendered {
    pub view: View,
    pub history: MemoryHistory,
}

/// Renders `ui` under a [`StoreProvider`] backed by a freshly seeded store.
pub fn render_with_store<U, V, F>(ui: U, transform: F) -> Rendered
where
    U: FnOnce() -> V + 'static,
    V: IntoView,
    F: FnOnce(RootState) -> RootState,
{
    let history = MemoryHistory::default();
    let store = build_store(transform, history.clone());
    let view = view! {
        <StoreProvider store=store.clone()>
            {ui()}
        </StoreProvider>
    }
    .into_view();

    Rendered {
        view,
        store,
        history,
    }
}

/// Renders `ui` under a [`StoreProvider`] and a [`MemoryRouter`] sharing one history.
pub fn render_with_store_and_router<U, V, F>(
    ui: U,
    transform: F,
    options: RouteOptions,
) -> Rendered
where
    U: FnOnce() -> V + 'static,
    V: IntoView,
    F: FnOnce(RootState) -> RootState,
{
    let history = options.into_history();
    let store = build_store(transform, history.clone());
    let router_history = history.clone();
    let view = view! {
        <StoreProvider store=store.clone()>
            <MemoryRouter history=router_history.clone()>
                {ui()}
            </MemoryRouter>
        </StoreProvider>
    }
    .into_view();

    Rendered {
        view,
        store,
        history,
    }
}

/// Renders `ui` under a [`MemoryRouter`] without a store.
pub fn render_with_router<U, V>(ui: U, options: RouteOptions) -> RouterRendered
where
    U: FnOnce() -> V + 'static,
    V: IntoView,
{
    let history = options.into_history();
    let view = view! {
        <MemoryRouter history=history.clone()>
            {ui()}
        </MemoryRouter>
    }
    .into_view();

    RouterRendered { view, history }
}
