//! Selection and (de)serialization of the state that survives a reload.
//!
//! Only the shape lives here. Reading and writing a storage backend is left to the host.

use std::{collections::BTreeMap, rc::Rc};

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    model::{
        AppState, AutoRefresh, EphemeralState, ResourcesState, RootState, UserSettingsState,
        STATE_VERSION,
    },
    time_range::TimeRange,
};

pub const LOCAL_STORAGE_KEY: &str = "state";

/// Persisted snapshot of the client state, also used as the test fixture shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStorage {
    #[serde(rename = "VERSION")]
    pub version: String,
    pub app: AppState,
    pub ranges: BTreeMap<String, TimeRange>,
    pub auto_refresh: BTreeMap<String, AutoRefresh>,
    pub user_settings: UserSettingsState,
    pub resources: ResourcesState,
}

#[derive(Debug, Error)]
/// Errors raised while converting a persisted snapshot.
pub enum PersistenceError {
    /// The snapshot could not be encoded.
    #[error("failed to serialize local state: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The raw payload is not a valid snapshot.
    #[error("failed to parse local state: {0}")]
    Parse(#[source] serde_json::Error),
    /// The snapshot was written by a different state schema.
    #[error("local state version {found} does not match {expected}")]
    VersionMismatch {
        /// Version this build understands.
        expected: &'static str,
        /// Version found in the payload.
        found: String,
    },
}

/// Selects the parts of `state` that should outlive the session.
///
/// The router branch is dropped and the ephemeral preferences are reset. The persisted
/// preferences are shared with `state`.
pub fn persisted_local_storage(state: &RootState) -> LocalStorage {
    LocalStorage {
        version: state.version.clone(),
        app: AppState {
            ephemeral: Rc::new(EphemeralState::default()),
            persisted: Rc::clone(&state.app.persisted),
        },
        ranges: state.ranges.clone(),
        auto_refresh: state.auto_refresh.clone(),
        user_settings: state.user_settings.clone(),
        resources: state.resources.clone(),
    }
}

pub fn serialize_local_storage(snapshot: &LocalStorage) -> Result<String, PersistenceError> {
    serde_json::to_string(snapshot).map_err(PersistenceError::Serialize)
}

/// Parses a snapshot written by [`serialize_local_storage`].
///
/// # Errors
///
/// Returns [`PersistenceError::Parse`] for malformed payloads and
/// [`PersistenceError::VersionMismatch`] when the snapshot schema differs from
/// [`STATE_VERSION`].
pub fn parse_local_storage(raw: &str) -> Result<LocalStorage, PersistenceError> {
    let snapshot: LocalStorage = serde_json::from_str(raw).map_err(PersistenceError::Parse)?;
    if snapshot.version != STATE_VERSION {
        return Err(PersistenceError::VersionMismatch {
            expected: STATE_VERSION,
            found: snapshot.version,
        });
    }
    Ok(snapshot)
}

/// Loads a snapshot if one is present and readable.
pub fn load_local_storage(raw: Option<&str>) -> Option<LocalStorage> {
    match parse_local_storage(raw?) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            logging::warn!("discarding {LOCAL_STORAGE_KEY} snapshot: {err}");
            None
        }
    }
}
