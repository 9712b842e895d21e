//! Data core for the clinic website.
//!
//! # Overview
//! Reads procedures, blog posts and testimonials from a hosted data service
//! and writes consultation requests to it. Pages are driven by small
//! controllers that own their view state and receive the data service as an
//! injected `&dyn DataStore`.
//!
//! # Design
//! - `DataClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`. `HttpStore` pairs it with a
//!   `Transport` to do the round-trip.
//! - `MemoryStore` implements the same `DataStore` trait in memory, with
//!   failure injection, for tests and local runs.
//! - Read failures degrade to empty or not-found views and are logged with
//!   `tracing`; write failures surface as a notification.
//! - Record types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod links;
pub mod memory;
pub mod query;
pub mod store;
pub mod types;

pub use client::DataClient;
pub use error::{ApiError, FormError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use memory::MemoryStore;
pub use query::{Collection, Direction, ListOptions};
pub use store::{create_record, list_records, DataStore, HttpStore};
pub use types::{BlogPost, ConsultationRequest, ConsultationStatus, Procedure, Record, Slugged, Testimonial};
