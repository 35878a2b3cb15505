//! # User API Server Library
//!
//! HTTP service exposing CRUD operations on a single `user` entity
//! backed by PostgreSQL, with per-request trace identifier
//! propagation.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `db`: Connection pool and startup schema
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: CORS, trace id, and content-type middleware
//! - `models`: The user record and its SQL operations
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

/// Service name used in operational log lines.
pub const SERVICE_NAME: &str = "user-api";
