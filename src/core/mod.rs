//! Core domain types shared by storage, authorization and the HTTP layer

pub mod models;
