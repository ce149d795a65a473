//! Command implementations

pub mod constitution;
pub mod personality;
pub mod reference;
