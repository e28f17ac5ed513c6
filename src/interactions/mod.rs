//! Central router for component interactions. The main handler delegates
//! here based on the component's custom_id family.

pub mod game_handler;
pub mod ids;
