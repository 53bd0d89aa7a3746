//! Core client for the ISO New England web services API.
//!
//! This crate contains:
//! - Endpoint descriptors pairing a path template with a record path
//! - Strict `YYYYMMDD` date validation
//! - A blocking HTTP client with basic-auth credentials
//! - Dataset retrievers binding a client to one endpoint
//! - A generic nested-JSON-to-table flattener
//!
//! The usual pipeline: construct a [`Client`], bind a retriever to it, call
//! its retrieval operation, then hand the raw document and the retriever's
//! record path to [`flatten`] to obtain a [`Table`].

pub mod client;
pub mod date;
pub mod endpoint;
pub mod error;
pub mod flatten;
pub mod retriever;
pub mod transport;

pub use client::{Client, Credentials, RawDocument, ResponseFormat, DEFAULT_BASE_URL};
pub use endpoint::{ApiEndpoint, DAILY_FUEL_MIX};
pub use error::Error;
pub use flatten::{flatten, Table};
pub use retriever::{FuelMixRetriever, Retriever};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
