//! Signal-backed store construction.
//!
//! [`configure_store`] is the single construction path. A persisted [`LocalStorage`] snapshot is
//! materialized against the history on the way in. A [`RootState`] is taken as the store's initial
//! state verbatim, so a state read back from one store seeds another unchanged.

use leptos::{
    create_rw_signal, logging, ReadSignal, RwSignal, SignalDispose, SignalGetUntracked, SignalSet,
};

use crate::{
    history::MemoryHistory,
    model::{Location, RootState, RouterState, STATE_VERSION},
    persistence::LocalStorage,
    reducer::{reduce_root, Action},
};

#[derive(Clone)]
/// A reactive state container bound to a navigation history.
pub struct Store {
    state: RwSignal<RootState>,
    history: MemoryHistory,
}

impl Store {
    /// Returns a snapshot of the current state.
    pub fn get_state(&self) -> RootState {
        self.state.get_untracked()
    }

    /// Read-only reactive view of the state for components.
    pub fn state(&self) -> ReadSignal<RootState> {
        self.state.read_only()
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    /// Runs `action` through [`reduce_root`] and publishes the result if it differs.
    pub fn dispatch(&self, action: Action) {
        let current = self.state.get_untracked();
        let next = reduce_root(Some(current.clone()), &action);
        if next != current {
            self.state.set(next);
        }
    }

    /// Pushes `route` onto the history and mirrors it into the state.
    pub fn navigate(&self, route: &str) {
        if self.is_current_route(route) {
            logging::debug_warn!("navigation to {route} leaves the location unchanged");
        }
        self.history.push(route);
        self.sync_location();
    }

    /// Replaces the current history entry with `route` and mirrors it into the state.
    pub fn redirect(&self, route: &str) {
        self.history.replace(route);
        self.sync_location();
    }

    /// Returns `true` when both handles refer to the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.state == other.state
    }

    /// Releases the state signal. The history is left to its other handles.
    pub fn dispose(self) {
        self.state.dispose();
    }

    fn is_current_route(&self, route: &str) -> bool {
        self.history.location() == Location::parse(route)
    }

    fn sync_location(&self) {
        self.dispatch(location_changed(&self.history));
    }
}

/// Initial state accepted by [`configure_store`].
pub trait PreloadedState {
    /// Produces the store's initial state for `history`.
    fn into_root_state(self, history: &MemoryHistory) -> RootState;
}

impl PreloadedState for RootState {
    fn into_root_state(self, _history: &MemoryHistory) -> RootState {
        self
    }
}

impl PreloadedState for LocalStorage {
    /// Runs the bootstrap action through the reducers, mirrors the history's current location
    /// into the `router` branch, stamps [`STATE_VERSION`], and selects a current organization
    /// when none is set.
    fn into_root_state(self, history: &MemoryHistory) -> RootState {
        let state = reduce_root(Some(RootState::from(self)), &Action::Init);
        let mut state = reduce_root(Some(state), &location_changed(history));
        state.version = STATE_VERSION.to_string();
        state.resources.orgs = state.resources.orgs.with_current_org();
        state
    }
}

/// Builds a store bound to `history` whose state is `initial`, materialized when it is a
/// persisted snapshot.
pub fn configure_store(initial: impl PreloadedState, history: MemoryHistory) -> Store {
    let state = initial.into_root_state(&history);
    Store {
        state: create_rw_signal(state),
        history,
    }
}

fn location_changed(history: &MemoryHistory) -> Action {
    Action::LocationChanged {
        location: history.location(),
        action: history.action(),
    }
}

impl From<LocalStorage> for RootState {
    fn from(snapshot: LocalStorage) -> Self {
        Self {
            version: snapshot.version,
            app: snapshot.app,
            ranges: snapshot.ranges,
            auto_refresh: snapshot.auto_refresh,
            user_settings: snapshot.user_settings,
            resources: snapshot.resources,
            router: RouterState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{NavigationKind, Organization, Theme},
        persistence::persisted_local_storage,
    };

    fn org() -> Organization {
        Organization {
            id: "orgid".to_string(),
            name: "org".to_string(),
        }
    }

    fn snapshot() -> LocalStorage {
        persisted_local_storage(&RootState::default())
    }

    #[test]
    fn snapshot_is_materialized_against_history_location() {
        let _ = leptos::create_runtime();
        let history = MemoryHistory::at("/orgs/orgid/dashboards");

        let store = configure_store(snapshot(), history.clone());

        let state = store.get_state();
        assert_eq!(state.router.location, history.location());
        assert_eq!(state.router.action, NavigationKind::Pop);
        assert!(store.history().ptr_eq(&history));
    }

    #[test]
    fn snapshot_is_stamped_with_version_and_current_org() {
        let _ = leptos::create_runtime();
        let mut initial = snapshot();
        initial.version = "1.0.0".to_string();
        initial.resources.orgs.by_id = BTreeMap::from([("orgid".to_string(), org())]);
        initial.resources.orgs.all_ids = vec!["orgid".to_string()];

        let state = configure_store(initial, MemoryHistory::default()).get_state();

        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(state.resources.orgs.org, Some(org()));
    }

    #[test]
    fn root_state_is_kept_verbatim() {
        let _ = leptos::create_runtime();
        let mut initial = RootState::default();
        initial.version = "1.0.0".to_string();
        initial.resources.orgs.by_id = BTreeMap::from([("orgid".to_string(), org())]);
        initial.resources.orgs.all_ids = vec!["orgid".to_string()];
        initial.router = RouterState {
            location: Location::parse("/orgs/orgid"),
            action: NavigationKind::Push,
        };

        let store = configure_store(initial.clone(), MemoryHistory::at("/"));

        assert_eq!(store.get_state(), initial);
        assert_eq!(store.get_state().resources.orgs.org, None);
    }

    #[test]
    fn configure_store_keeps_preferences() {
        let _ = leptos::create_runtime();
        let initial = reduce_root(None, &Action::set_theme(Theme::Light));
        let persisted = initial.app.persisted.clone();

        let state = configure_store(initial, MemoryHistory::default()).get_state();

        assert!(std::rc::Rc::ptr_eq(&state.app.persisted, &persisted));
    }

    #[test]
    fn dispatch_publishes_reduced_state() {
        let _ = leptos::create_runtime();
        let store = configure_store(RootState::default(), MemoryHistory::default());

        store.dispatch(Action::EnablePresentationMode);
        store.dispatch(Action::set_auto_refresh(15_000));

        let state = store.get_state();
        assert!(state.app.ephemeral.in_presentation_mode);
        assert_eq!(state.app.persisted.auto_refresh, 15_000);
        assert_eq!(store.state().get_untracked(), state);
    }

    #[test]
    fn navigate_and_redirect_keep_router_in_step_with_history() {
        let _ = leptos::create_runtime();
        let store = configure_store(RootState::default(), MemoryHistory::default());

        store.navigate("/orgs/orgid");
        assert_eq!(store.get_state().router.location.pathname, "/orgs/orgid");
        assert_eq!(store.get_state().router.action, NavigationKind::Push);
        assert_eq!(store.history().len(), 2);

        store.redirect("/orgs/orgid/load-data");
        assert_eq!(
            store.get_state().router.location,
            store.history().location()
        );
        assert_eq!(store.get_state().router.action, NavigationKind::Replace);
        assert_eq!(store.history().len(), 2);
    }

    #[test]
    fn relative_route_matches_its_anchored_location() {
        let _ = leptos::create_runtime();
        let store = configure_store(RootState::default(), MemoryHistory::at("/orgs"));

        assert!(store.is_current_route("orgs"));
        assert!(store.is_current_route("/orgs"));
        assert!(!store.is_current_route("/orgs?tab=members"));
    }

    #[test]
    fn dispose_releases_the_state_signal() {
        let _ = leptos::create_runtime();
        let store = configure_store(RootState::default(), MemoryHistory::default());
        let state = store.state();
        let history = store.history().clone();

        store.dispose();

        assert!(state.try_get_untracked().is_none());
        assert_eq!(history.location(), Location::default());
    }

    #[test]
    fn separately_configured_stores_are_distinct() {
        let _ = leptos::create_runtime();
        let first = configure_store(RootState::default(), MemoryHistory::default());
        let second = configure_store(RootState::default(), MemoryHistory::default());

        assert!(!first.ptr_eq(&second));
        assert!(first.ptr_eq(&first.clone()));
    }
}
