use std::{collections::BTreeMap, rc::Rc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::time_range::TimeRange;

pub const STATE_VERSION: &str = "2.0.0";
pub const AUTOREFRESH_DEFAULT_INTERVAL: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeZone {
    #[default]
    Local,
    #[serde(rename = "UTC")]
    Utc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemeralState {
    pub in_presentation_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub theme: Theme,
    pub auto_refresh: u64,
    pub show_template_control_bar: bool,
    pub time_zone: TimeZone,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            auto_refresh: AUTOREFRESH_DEFAULT_INTERVAL,
            show_template_control_bar: false,
            time_zone: TimeZone::Local,
        }
    }
}

/// Presentation preferences for the dashboard shell.
///
/// The two halves are reduced independently and shared by reference between successive states,
/// so a transition that only touches `persisted` hands back the same `ephemeral` allocation.
/// The ephemeral half is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(skip)]
    pub ephemeral: Rc<EphemeralState>,
    pub persisted: Rc<PersistedState>,
}

impl AppState {
    /// Builds a fresh default state. Every call allocates new records.
    pub fn initial() -> Self {
        Self {
            ephemeral: Rc::new(EphemeralState::default()),
            persisted: Rc::new(PersistedState::default()),
        }
    }

    /// Returns `true` when both halves are the same allocations as `other`'s.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ephemeral, &other.ephemeral)
            && Rc::ptr_eq(&self.persisted, &other.persisted)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RemoteDataState {
    #[default]
    NotStarted,
    Loading,
    Done,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRefreshStatus {
    Active,
    #[default]
    Paused,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AutoRefresh {
    pub status: AutoRefreshStatus,
    pub interval: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsState {
    pub show_variables_controls: bool,
}

impl Default for UserSettingsState {
    fn default() -> Self {
        Self {
            show_variables_controls: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgsState {
    #[serde(rename = "byID")]
    pub by_id: BTreeMap<String, Organization>,
    #[serde(rename = "allIDs")]
    pub all_ids: Vec<String>,
    pub org: Option<Organization>,
    pub status: RemoteDataState,
}

impl OrgsState {
    /// Selects the first known organization when no current one is set.
    pub fn with_current_org(mut self) -> Self {
        if self.org.is_none() {
            self.org = self
                .all_ids
                .iter()
                .find_map(|id| self.by_id.get(id))
                .cloned();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesState {
    #[serde(rename = "byID")]
    pub by_id: BTreeMap<String, Value>,
    #[serde(rename = "allIDs")]
    pub all_ids: Vec<String>,
    pub status: RemoteDataState,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourcesState {
    pub orgs: OrgsState,
    pub variables: VariablesState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    /// Splits a route such as `/orgs/a?lower=now()#top` into its parts.
    ///
    /// A missing or relative pathname is anchored at `/`.
    pub fn parse(route: &str) -> Self {
        let (rest, hash) = match route.find('#') {
            Some(idx) => (&route[..idx], &route[idx..]),
            None => (route, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        let pathname = if pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{pathname}")
        };
        Self {
            pathname,
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn path(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::parse("/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavigationKind {
    #[default]
    Pop,
    Push,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouterState {
    pub location: Location,
    pub action: NavigationKind,
}

/// The whole client state tree, one field per reducer branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootState {
    #[serde(rename = "VERSION")]
    pub version: String,
    pub app: AppState,
    pub ranges: BTreeMap<String, TimeRange>,
    pub auto_refresh: BTreeMap<String, AutoRefresh>,
    pub user_settings: UserSettingsState,
    pub resources: ResourcesState,
    pub router: RouterState,
}

impl Default for RootState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION.to_string(),
            app: AppState::initial(),
            ranges: BTreeMap::new(),
            auto_refresh: BTreeMap::new(),
            user_settings: UserSettingsState::default(),
            resources: ResourcesState::default(),
            router: RouterState::default(),
        }
    }
}
