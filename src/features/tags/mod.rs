//! Tag browsing and management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/tags` | No | List tags |
//! | GET | `/api/tags/{slug}` | No | Single tag |
//! | POST | `/api/admin/tags` | Yes | Create |
//! | PUT | `/api/admin/tags/{id}` | Yes | Rename |
//! | DELETE | `/api/admin/tags/{id}` | Yes | Delete |
//! | PUT | `/api/admin/tags/{id}/translations` | Yes | Replace name overrides |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TagService;
