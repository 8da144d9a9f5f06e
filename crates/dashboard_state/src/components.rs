//! Context providers that expose the store and the navigation history to descendant components.

use leptos::*;

use crate::{history::MemoryHistory, model::Location, store::Store};

#[derive(Clone)]
/// Leptos context carrying the navigation history for route-aware components.
pub struct RouterContext {
    /// History driving the current location.
    pub history: MemoryHistory,
}

#[component]
/// Provides a [`Store`] to descendant components.
pub fn StoreProvider(
    /// Store shared with every descendant.
    store: Store,
    children: Children,
) -> impl IntoView {
    provide_context(store);

    children().into_view()
}

#[component]
/// Provides a [`RouterContext`] backed by an in-memory history.
pub fn MemoryRouter(
    /// History shared with every descendant.
    history: MemoryHistory,
    children: Children,
) -> impl IntoView {
    provide_context(RouterContext { history });

    children().into_view()
}

/// Returns the [`Store`] provided by the nearest [`StoreProvider`].
///
/// # Panics
///
/// Panics if called outside [`StoreProvider`].
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store not provided")
}

/// Returns the history provided by the nearest [`MemoryRouter`].
///
/// # Panics
///
/// Panics if called outside [`MemoryRouter`].
pub fn use_history() -> MemoryHistory {
    use_context::<RouterContext>()
        .expect("RouterContext not provided")
        .history
}

/// Returns the current location of the nearest [`MemoryRouter`].
///
/// # Panics
///
/// Panics if called outside [`MemoryRouter`].
pub fn use_location() -> Location {
    use_history().location()
}
