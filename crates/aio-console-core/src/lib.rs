//! # aio-console-core
//!
//! Core types and utilities for calling the Developer Console management API.
//!
//! This crate provides the error type, configuration, request shaping and the
//! HTTP executor that the `aio-console` facade builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and operation error codes
//! - [`config`] - Environments and client configuration
//! - [`endpoint`] - Endpoint path templates and rendering
//! - [`query`] - Query parameter builder
//! - [`request`] - Request options assembly
//! - [`interceptor`] - Auth header injection and response normalization
//! - [`response`] - The normalized response envelope
//! - [`upload`] - File uploads and multipart forms
//! - [`client`] - HTTP client configuration and request execution

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod interceptor;
pub mod query;
pub mod request;
pub mod response;
pub mod upload;

// Re-export commonly used types
pub use error::{Error, Result};
