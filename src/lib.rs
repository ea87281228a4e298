//! Escola - school management backend.
//!
//! Actix Web service covering accounts, enrollment, grading, attendance,
//! disciplinary records, room reservations and the guardian portal.
//!
//! # Architecture
//! - `access`: role-based record scoping
//! - `cache`: cache layer (Moka/Redis)
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication and authorization middleware
//! - `models`: data model definitions
//! - `routes`: API route layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: utility functions

pub mod access;
pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
