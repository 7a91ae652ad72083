//! Record-keeping service for a small retail/supply operation.
//!
//! Seven entity types (users, invitations, products, stores, inventory,
//! supply requests, supplier payments) stored relationally and exposed as
//! JSON CRUD endpoints. The store is the single source of truth and the
//! single serialization point: uniqueness and referential integrity live in
//! the schema, not in handler code.

pub mod entity;
pub mod error;
pub mod repository;
pub mod web;
