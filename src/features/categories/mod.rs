//! Category browsing and management.
//!
//! Categories form a two-level hierarchy: root categories with optional
//! sub-categories, built on read from the flat table by
//! [`dtos::HierarchicalCategoryDto::build_forest`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | Flat list or `?tree=true` forest |
//! | GET | `/api/categories/{slug}` | No | Single category |
//! | POST | `/api/admin/categories` | Yes | Create |
//! | PUT | `/api/admin/categories/{id}` | Yes | Update |
//! | DELETE | `/api/admin/categories/{id}` | Yes | Delete (detaches children) |
//! | PUT | `/api/admin/categories/{id}/translations` | Yes | Replace name overrides |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
