//! Personal portfolio single-page application.
//!
//! The crate is split into a framework-free core (records, store client, loader, contact and
//! analytics services, view state) and the Dioxus components under [`client`] that render it.

#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod state;
pub mod store;
