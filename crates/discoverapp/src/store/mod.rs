//! # Filter State Store
//!
//! The canonical filter state of a discovery session and the named mutations
//! that are the only way to change it.
//!
//! ## Invariants
//!
//! - `active_subfilters` only holds values from the subfilter vocabulary of
//!   `active_domain`. Switching domains clears them.
//! - Domain attributes persist per domain across domain switches.
//! - Selected tags are taxonomy tags.
//!
//! A mutation that would break one of these returns an error and changes
//! nothing, including the revision counter.
//!
//! ## Sharing
//!
//! [`FilterStore`] is a plain single-owner value. Surfaces that need to share
//! it go through a [`FilterHandle`], a cloneable `Arc<Mutex<_>>` wrapper with
//! closure-based access:
//!
//! ```
//! use discoverapp::store::FilterHandle;
//!
//! let handle = FilterHandle::default();
//! let drawer = handle.clone();
//! handle.update(|store| store.toggle_tag("Jazz")).unwrap();
//! assert!(drawer.snapshot().is_tag_selected("Jazz"));
//! ```

mod filter_store;
mod handle;
mod state;

pub use filter_store::{FilterStore, Toggle};
pub use handle::FilterHandle;
pub use state::FilterState;
