//! Spaces API client
//!
//! The operations layer: six functions, each one remote call, each
//! normalizing the response into a flat record.
//!
//! # Operations
//!
//! - `list_spaces` - list the catalog with optional author/search filters
//! - `space_info` - fetch one space's details
//! - `restart_space` / `pause_space` - lifecycle actions (token required)
//! - `space_runtime` - fetch live runtime state
//! - `list_user_spaces` - all spaces of one user

mod spaces;
mod types;

pub use spaces::SpacesClient;
pub use types::{RuntimeStatus, SpaceDetail, SpaceSummary};
