// crates/bikemi-core/src/lib.rs

//! # bikemi-core
//!
//! Joins the two halves of the BikeMi (Milan) station data: identity and
//! coordinates from the GBFS open-data feed, live bike and dock counts from
//! the public stations page. The merged [`StationFull`] records can then be
//! searched by name or id, sorted by any field, or queried for the station
//! nearest to a coordinate.
//!
//! ```rust
//! use bikemi_core::{merge, StationBasic, StationError, StationExtra, StationSearch};
//!
//! let basic = vec![StationBasic {
//!     station_id: "1".into(), name: "Duomo".into(), lat: 45.4641, lon: 9.1919,
//!     address: None, capacity: None, other: Default::default(),
//! }];
//! let extra = vec![StationExtra {
//!     station_id: "1".into(), name: None, title: Some("Piazza del Duomo".into()),
//!     bike: 2, ebike: 3, ebike_with_childseat: 0,
//!     available_docks: 15, available_virtual_docks: 0, available_physical_docks: 15,
//! }];
//!
//! let stations = merge(&basic, &extra)?;
//! assert_eq!(stations.nearest_to(45.46, 9.19)?.title(), "Piazza del Duomo");
//! # Ok::<(), StationError>(())
//! ```

pub mod common;
pub mod error;
pub mod model;
pub mod prelude;
pub mod query;
pub mod reconcile;
pub mod search;
pub mod source;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::StationStats;
pub use crate::error::{ReconciliationError, Result, Side, StationError};
pub use crate::model::{FieldValue, StationBasic, StationExtra, StationFull};
pub use crate::query::{distance_km, nearest, sort};
pub use crate::reconcile::merge;
pub use crate::search::{find, Matches, SearchHit};
pub use crate::source::SourceConfig;
pub use crate::traits::{NameMatch, StationSearch};
