//! # API crate — REST client for the Plast-Proba backend
//!
//! Everything the frontends know about the remote API lives here: the shared
//! [`ApiClient`], the wire models, and one module of endpoint wrappers per
//! entity. No business logic — permissions, invite validation, and progress
//! computation are all server-side; this crate only moves JSON.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | JSON client with cookie credentials and base-URL config |
//! | [`error`] | [`ApiError`] taxonomy, `{data:{message}}` payload decoding |
//! | [`models`] | Wire models (`User`/`Role`, `Group`, `Kurin`, invites, probas) |
//! | [`auth`] | `GET /users/me`, `GET /auth/logout`, OAuth entry URL |
//! | [`invites`] | Generate / join / accept invite operations |
//! | [`groups`], [`kurins`], [`users`] | Entity CRUD and listings |
//! | [`probas`] | Progress fetch + normalization, item sign-off, notes |
//!
//! Sessions are cookie-based. The client never inspects invite tokens; they
//! are opaque path segments.

pub mod auth;
pub mod client;
pub mod error;
pub mod groups;
pub mod invites;
pub mod kurins;
pub mod models;
pub mod probas;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{Role, User};
