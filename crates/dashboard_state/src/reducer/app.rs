//! Presentation preferences branch: presentation mode, theme, auto-refresh, and time zone.

use std::rc::Rc;

use crate::{
    model::{AppState, EphemeralState, PersistedState},
    reducer::Action,
};

/// Applies an [`Action`] to the preferences branch.
///
/// `None` stands for a branch that has not been initialized yet and is replaced by
/// [`AppState::initial`]. Unrecognized actions hand back the same allocations they were given.
/// Payloads are taken as-is.
pub fn reduce_app(state: Option<AppState>, action: &Action) -> AppState {
    let state = state.unwrap_or_else(AppState::initial);
    AppState {
        ephemeral: reduce_ephemeral(state.ephemeral, action),
        persisted: reduce_persisted(state.persisted, action),
    }
}

fn reduce_ephemeral(state: Rc<EphemeralState>, action: &Action) -> Rc<EphemeralState> {
    match action {
        Action::EnablePresentationMode => Rc::new(EphemeralState {
            in_presentation_mode: true,
        }),
        Action::DisablePresentationMode => Rc::new(EphemeralState {
            in_presentation_mode: false,
        }),
        _ => state,
    }
}

fn reduce_persisted(state: Rc<PersistedState>, action: &Action) -> Rc<PersistedState> {
    match action {
        Action::SetTheme { theme } => Rc::new(PersistedState {
            theme: *theme,
            ..*state
        }),
        Action::SetAutoRefresh { milliseconds } => Rc::new(PersistedState {
            auto_refresh: *milliseconds,
            ..*state
        }),
        Action::SetTimeZone { time_zone } => Rc::new(PersistedState {
            time_zone: *time_zone,
            ..*state
        }),
        _ => state,
    }
}
