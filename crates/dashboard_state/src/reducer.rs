//! Actions and the root transition function for the dashboard client state.
//!
//! Every branch reducer receives every action and hands back its input untouched for anything it
//! does not recognize. [`reduce_root`] is the combinator: it calls each branch reducer on its own
//! field and reassembles the tree.

mod app;
mod ranges;
mod router;

use serde::{Deserialize, Serialize};

pub use app::reduce_app;
pub use ranges::{reduce_auto_refresh, reduce_ranges};
pub use router::reduce_router;

use crate::{
    model::{Location, NavigationKind, RootState, Theme, TimeZone},
    time_range::TimeRange,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
/// Actions accepted by [`reduce_root`].
pub enum Action {
    /// Store bootstrap marker. No branch reacts to it.
    Init,
    /// Hide dashboard chrome.
    EnablePresentationMode,
    /// Restore dashboard chrome.
    DisablePresentationMode,
    /// Switch the color theme.
    SetTheme {
        /// Theme to apply.
        theme: Theme,
    },
    /// Set the global auto-refresh interval.
    SetAutoRefresh {
        /// Interval in milliseconds, `0` disables refreshing.
        milliseconds: u64,
    },
    /// Choose how timestamps are rendered.
    SetTimeZone {
        /// Zone used for display.
        time_zone: TimeZone,
    },
    /// Store the selected time range for a dashboard.
    SetDashboardTimeRange {
        /// Dashboard the range belongs to.
        dashboard_id: String,
        /// Selected range.
        time_range: TimeRange,
    },
    /// Forget the stored time range for a dashboard.
    DeleteTimeRange {
        /// Dashboard whose range is dropped.
        dashboard_id: String,
    },
    /// Override the auto-refresh interval for one dashboard.
    SetDashboardAutoRefresh {
        /// Dashboard being configured.
        dashboard_id: String,
        /// Interval in milliseconds.
        milliseconds: u64,
    },
    /// Drop a dashboard's auto-refresh override.
    ResetDashboardAutoRefresh {
        /// Dashboard being reset.
        dashboard_id: String,
    },
    /// The navigation history moved.
    LocationChanged {
        /// New current location.
        location: Location,
        /// How the history got there.
        action: NavigationKind,
    },
}

impl Action {
    pub fn set_theme(theme: Theme) -> Self {
        Self::SetTheme { theme }
    }

    pub fn set_auto_refresh(milliseconds: u64) -> Self {
        Self::SetAutoRefresh { milliseconds }
    }

    pub fn set_time_zone(time_zone: TimeZone) -> Self {
        Self::SetTimeZone { time_zone }
    }
}

/// Applies an [`Action`] to the whole state tree.
///
/// A missing state is replaced by [`RootState::default`] before the action is applied.
pub fn reduce_root(state: Option<RootState>, action: &Action) -> RootState {
    let state = state.unwrap_or_default();
    RootState {
        version: state.version,
        app: reduce_app(Some(state.app), action),
        ranges: reduce_ranges(state.ranges, action),
        auto_refresh: reduce_auto_refresh(state.auto_refresh, action),
        user_settings: state.user_settings,
        resources: state.resources,
        router: reduce_router(state.router, action),
    }
}
