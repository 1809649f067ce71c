/// Roster sources
mod grist;

use std::future::Future;

use crate::error::FetchError;
use crate::models::RosterRecord;

pub use grist::GristRoster;

/// Somewhere the roster can be read from
pub trait RosterSource {
    /// Read every row of the given table, in store order
    fn fetch(
        &self,
        doc_id: &str,
        table_id: &str,
    ) -> impl Future<Output = Result<Vec<RosterRecord>, FetchError>> + Send;
}
