//! JSON resource API.
//!
//! Every catalog kind gets the same four routes, served by the generic
//! handlers in [`records`]:
//!
//! | Method | Path              | Success                     |
//! |--------|-------------------|-----------------------------|
//! | POST   | `/{kind}s`        | 200, created record         |
//! | GET    | `/{kind}s/{id}`   | 200, stored record          |
//! | PUT    | `/{kind}s/{id}`   | 200, replaced record        |
//! | DELETE | `/{kind}s/{id}`   | 200, deletion acknowledgment |

#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;
use serde::de::DeserializeOwned;

use homecat_app::ports::Registry;
use homecat_domain::device::Device;
use homecat_domain::house::House;
use homecat_domain::record::Record;
use homecat_domain::room::Room;
use homecat_domain::user::User;

use crate::state::{AppState, ServiceProvider};

/// Build the resource routes for all four catalog kinds.
pub fn routes<UR, DR, RR, HR>() -> Router<AppState<UR, DR, RR, HR>>
where
    UR: Registry<User> + Send + Sync + 'static,
    DR: Registry<Device> + Send + Sync + 'static,
    RR: Registry<Room> + Send + Sync + 'static,
    HR: Registry<House> + Send + Sync + 'static,
{
    Router::new()
        .merge(resource::<User, _>("/users"))
        .merge(resource::<Device, _>("/devices"))
        .merge(resource::<Room, _>("/rooms"))
        .merge(resource::<House, _>("/houses"))
}

/// Routes for one record kind mounted at `path`.
fn resource<R, S>(path: &str) -> Router<S>
where
    R: Record + Serialize + DeserializeOwned,
    S: ServiceProvider<R> + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(path, post(records::create::<R, S>))
        .route(
            &format!("{path}/{{id}}"),
            get(records::get::<R, S>)
                .put(records::update::<R, S>)
                .delete(records::delete::<R, S>),
        )
}
