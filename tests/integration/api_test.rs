//! API integration tests
//!
//! Drive the composed router end to end against in-memory stores, and the
//! PostgreSQL stores directly when a test database is configured.

#![allow(dead_code)]

mod accounts;
mod campaigns;
mod common;
mod discovery;
mod postgres;
