//! # activityhub-client
//!
//! `reqwest` implementation of every collaborator the notification core
//! consumes: activities, participation, evidence and the notification
//! endpoints.

pub mod client;
pub mod error;
mod sources;

pub use client::BackendClient;
pub use error::ClientError;
