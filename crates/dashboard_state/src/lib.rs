pub mod components;
pub mod history;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod store;
pub mod time_range;

pub use components::{
    use_history, use_location, use_store, MemoryRouter, RouterContext, StoreProvider,
};
pub use history::MemoryHistory;
pub use model::*;
pub use persistence::{
    load_local_storage, parse_local_storage, persisted_local_storage, serialize_local_storage,
    LocalStorage, PersistenceError,
};
pub use reducer::{reduce_app, reduce_root, Action};
pub use store::{configure_store, PreloadedState, Store};
pub use time_range::{past_fifteen_minutes, past_hour, TimeRange, TimeRangeKind};
