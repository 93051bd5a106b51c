//! Library package for managing shopping lists
//!
//! Holds an active list of line items with a derived total and a set of named
//! list snapshots persisted through a pluggable storage port.
//!
//! # Examples
//!
//! ```
//! use r_cartlib::{
//!     storage::{KeyValueListStorage, memory::MemoryKeyValueStore},
//!     store::{Dispatcher, StateGetter, Store, action::Action, reducer::StoreReducer},
//! };
//!
//! let storage = KeyValueListStorage::new(MemoryKeyValueStore::new());
//! let store = Store::new(StoreReducer::boxed(), Box::new(storage));
//!
//! store.dispatch(Action::add("Rice", Some("Derica".into()), Some(500.into())));
//! store.dispatch(Action::add("Milk", Some("2".into()), Some("300".into())));
//! assert_eq!(store.get_state().total(), 800.0);
//!
//! store.dispatch(Action::RemoveItem { index: 0, confirmed: true });
//! assert_eq!(store.get_state().total(), 300.0);
//! ```
//!
//! ## Saving and loading named lists
//!
//! See `lib/examples/weekly-list.rs`
//!
//! ```bash
//! cargo run --example weekly-list -p r-cartlib
//! ```

#![deny(missing_docs)]
pub mod edit;
pub mod error;
pub mod item;
pub mod storage;
pub mod store;
pub mod summary;
