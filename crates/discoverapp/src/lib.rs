//! # Discover Architecture
//!
//! Discover is a **UI-agnostic faceted discovery engine**. It decides which
//! catalog items are visible for a combination of filters, and keeps that
//! filter state consistent across every surface that can change it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (the `discover` CLI, any other front-end)          │
//! │  - Terminal or pixel I/O, argument parsing, exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Surfaces (api.rs, surfaces/)                         │
//! │  - One session handle, many views over it                   │
//! │  - Views are plain data, never rendered output             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + Context (store/, context.rs)                       │
//! │  - Named mutations guarding the state invariants            │
//! │  - Domain-aware narrowing of facet vocabularies             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facets + Taxonomy (facets/, taxonomy/)                     │
//! │  - Static vocabularies and pure predicates                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! A surface interaction calls a store mutation through the shared
//! [`FilterHandle`](store::FilterHandle). The context resolver narrows the
//! options for the active domain, the predicate engine re-evaluates the
//! catalog, and each surface rebuilds its view from the store.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. The
//! only file access is explicit: [`config::DiscoverConfig::load`] and
//! [`catalog::InMemoryCatalog::load`]. Diagnostics go through `tracing`,
//! which stays silent unless the client installs a subscriber.

pub mod api;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod facets;
pub mod model;
pub mod store;
pub mod surfaces;
pub mod taxonomy;
