//! Data access, one repository per entity type.
//!
//! Every repository exposes the same five operations over an explicitly
//! passed connection: `find_all`, `find_by_id`, `create`, `update`,
//! `delete`. Constraint violations surface as classified
//! [`StorageError`](crate::error::StorageError) variants; no repository
//! performs entity-specific business logic.

pub mod invitation;
pub mod inventory;
pub mod payment;
pub mod product;
pub mod store;
pub mod supply_request;
pub mod user;

pub use invitation::InvitationRepository;
pub use inventory::InventoryRepository;
pub use payment::PaymentRepository;
pub use product::ProductRepository;
pub use store::StoreRepository;
pub use supply_request::SupplyRequestRepository;
pub use user::UserRepository;
