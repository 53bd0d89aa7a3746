use serde_json::Value;

use crate::client::Client;
use crate::date;
use crate::endpoint::{self, ApiEndpoint};
use crate::error::Error;

/// Capability interface for dataset retrievers.
///
/// A retriever is single-purpose: one dataset, one record path, for its whole
/// lifetime. The retrieval operation itself lives on the concrete type, since
/// its parameters are specific to the dataset.
pub trait Retriever {
    /// Record path locating this dataset's rows inside the raw document.
    fn record_path(&self) -> &'static [&'static str];
}

/// Retrieves the daily generation fuel mix for one `YYYYMMDD` day.
pub struct FuelMixRetriever<'a> {
    client: &'a Client,
    endpoint: ApiEndpoint,
}

impl<'a> FuelMixRetriever<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            endpoint: endpoint::DAILY_FUEL_MIX,
        }
    }

    /// Fetches the fuel-mix document for `day`.
    ///
    /// The date is validated before any network traffic, so a malformed day
    /// never costs a request. The returned document is untransformed;
    /// flattening is a separate, caller-invoked step.
    pub fn retrieve(&self, day: &str) -> Result<Value, Error> {
        date::validate_day(day)?;
        let path = self.endpoint.resolve(&[("day", day)])?;
        self.client.fetch_json(&path, &[])
    }
}

impl Retriever for FuelMixRetriever<'_> {
    fn record_path(&self) -> &'static [&'static str] {
        self.endpoint.record_path()
    }
}
