//! Mirror of the navigation history kept inside the state tree.

use crate::{model::RouterState, reducer::Action};

pub fn reduce_router(state: RouterState, action: &Action) -> RouterState {
    match action {
        Action::LocationChanged {
            location,
            action: kind,
        } => RouterState {
            location: location.clone(),
            action: *kind,
        },
        _ => state,
    }
}
