pub mod cursor;
pub mod entities;
pub mod error;
pub mod state;
pub mod validation;
