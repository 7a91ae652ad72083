//! CRUD routes, one module per entity type.

mod invitation;
mod inventory;
mod payment;
mod product;
mod store;
mod supply_request;
mod user;

use actix_web::web;
use serde::{Deserialize, Deserializer};

/// For PUT bodies on nullable columns: pairs with `#[serde(default)]` so an
/// absent key is `None` (leave unchanged) while an explicit `null` is
/// `Some(None)` (clear the column). Plain `Option` cannot tell the two apart.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(user::configure_routes)
        .configure(invitation::configure_routes)
        .configure(product::configure_routes)
        .configure(store::configure_routes)
        .configure(inventory::configure_routes)
        .configure(supply_request::configure_routes)
        .configure(payment::configure_routes);
}
