//! Accounts domain layer: entities, validation, category cache

pub mod category_cache;
pub mod entities;
pub mod validation;
