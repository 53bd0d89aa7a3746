use thiserror::Error;

/// Error taxonomy for the retrieval and flattening pipeline.
///
/// Every variant propagates to the immediate caller unchanged; no layer
/// swallows an error or returns a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// Credential pair could not be resolved at client construction.
    #[error("API credentials are required but not set")]
    MissingCredentials,

    /// Input date is not a real calendar date in canonical `YYYYMMDD` form.
    #[error("date '{value}' is not in the strict format YYYYMMDD")]
    InvalidDateFormat { value: String },

    /// A path template placeholder had no matching supplied parameter.
    /// Indicates a descriptor/parameter mismatch, a defect rather than a
    /// runtime condition.
    #[error("no parameter supplied for placeholder '{placeholder}' in template '{template}'")]
    Template {
        placeholder: String,
        template: String,
    },

    /// The remote API answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The network call itself could not complete.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The response body could not be decoded as JSON.
    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured record path does not match the actual response shape.
    #[error("key '{key}' not found in response data (traversed: {traversed:?})")]
    PathNotFound { key: String, traversed: Vec<String> },

    /// The value at the end of the record path is not row-shaped.
    #[error("expected an array of records at the record path, found {found}")]
    Shape { found: &'static str },
}
