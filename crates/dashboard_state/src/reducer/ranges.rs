//! Per-dashboard time range and auto-refresh branches.

use std::collections::BTreeMap;

use crate::{
    model::{AutoRefresh, AutoRefreshStatus},
    reducer::Action,
    time_range::TimeRange,
};

pub fn reduce_ranges(
    mut state: BTreeMap<String, TimeRange>,
    action: &Action,
) -> BTreeMap<String, TimeRange> {
    match action {
        Action::SetDashboardTimeRange {
            dashboard_id,
            time_range,
        } => {
            state.insert(dashboard_id.clone(), time_range.clone());
        }
        Action::DeleteTimeRange { dashboard_id } => {
            state.remove(dashboard_id);
        }
        _ => {}
    }
    state
}

pub fn reduce_auto_refresh(
    mut state: BTreeMap<String, AutoRefresh>,
    action: &Action,
) -> BTreeMap<String, AutoRefresh> {
    match action {
        Action::SetDashboardAutoRefresh {
            dashboard_id,
            milliseconds,
        } => {
            let status = if *milliseconds > 0 {
                AutoRefreshStatus::Active
            } else {
                AutoRefreshStatus::Paused
            };
            state.insert(
                dashboard_id.clone(),
                AutoRefresh {
                    status,
                    interval: *milliseconds,
                },
            );
        }
        Action::ResetDashboardAutoRefresh { dashboard_id } => {
            state.remove(dashboard_id);
        }
        _ => {}
    }
    state
}
