//! # desk-core
//!
//! Core types and client-side policy for Ticketdesk.
//!
//! This crate provides the foundational types shared across all Ticketdesk crates:
//! - Entity structs as returned by the ticketing API (users, organizations, tickets, ...)
//! - Tag enums with display metadata and a fallback for unrecognized tags
//! - Permission sets with hierarchical wildcard matching
//! - The ticket workflow action table
//! - Dashboard scope selection and analytics report shapes
//! - Role-segmented routes
//! - Cross-cutting error types

pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod permissions;
pub mod routes;
pub mod workflow;
