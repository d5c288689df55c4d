//! Admin authentication feature.
//!
//! Self-contained email/password login backed by the admins table with
//! argon2id hashing and HS256 bearer tokens.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Admin login |
//! | GET | `/api/auth/me` | Yes | Authenticated admin identity |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
