//! API Response types
//!
//! Response envelopes returned by the branch API

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` envelope used by list endpoints
///
/// ```json
/// {
///     "data": [ { "id": "...", ... } ],
///     "meta": { ... }
/// }
/// ```
///
/// Keys other than `data` (pagination `meta`, `links`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Unwrap the envelope
    pub fn into_data(self) -> T {
        self.data
    }
}
