//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own lookups and orchestration so route handlers can stay
//! focused on protocol translation.

pub mod horse;
pub mod pedigree;
