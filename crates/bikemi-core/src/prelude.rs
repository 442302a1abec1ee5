//! bikemi-core prelude: bring common types and traits into scope for demos.

pub use crate::error::{ReconciliationError, Result, StationError};
pub use crate::model::{FieldValue, StationBasic, StationExtra, StationFull};
pub use crate::query::{distance_km, nearest, sort};
pub use crate::reconcile::merge;
pub use crate::search::{find, SearchHit};
pub use crate::source::snapshot::{load_basic_file, load_extra_file, load_stations};
pub use crate::source::SourceConfig;
pub use crate::traits::{NameMatch, StationSearch};
