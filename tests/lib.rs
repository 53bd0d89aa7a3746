//! Shared support for the workspace behavior tests.

use std::sync::Mutex;

use isone_core::{Error, HttpRequest, HttpResponse, HttpTransport};

/// Scripted reply for one transport call.
pub enum Canned {
    Response { status: u16, body: String },
    TransportFailure(String),
}

/// Transport double that records every request and replays canned replies in
/// order.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    script: Mutex<Vec<Canned>>,
}

impl RecordingTransport {
    pub fn new(script: Vec<Canned>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            script: Mutex::new(script),
        }
    }

    /// Transport that answers every call with the same status and body.
    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Canned::Response {
            status,
            body: body.to_owned(),
        }])
    }

    /// Transport whose single call fails at the network level.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Canned::TransportFailure(message.to_owned())])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        self.requests.lock().unwrap().push(request.clone());
        let mut script = self.script.lock().unwrap();
        assert!(!script.is_empty(), "transport called more times than scripted");
        match script.remove(0) {
            Canned::Response { status, body } => Ok(HttpResponse { status, body }),
            Canned::TransportFailure(message) => Err(Error::Transport { message }),
        }
    }
}

/// A realistic daily fuel-mix body in the shape the API returns.
pub fn fuel_mix_body() -> String {
    serde_json::json!({
        "GenFuelMixes": {
            "GenFuelMix": [
                {
                    "BeginDate": "2023-12-01T00:00:00.000-05:00",
                    "GenMw": 1335,
                    "FuelCategory": "Nuclear",
                    "FuelCategoryRollup": "Nuclear",
                    "MarginalFlag": "N"
                },
                {
                    "BeginDate": "2023-12-01T00:00:00.000-05:00",
                    "GenMw": 4136,
                    "FuelCategory": "Natural Gas",
                    "FuelCategoryRollup": "Gas",
                    "MarginalFlag": "Y"
                },
                {
                    "BeginDate": "2023-12-01T00:00:00.000-05:00",
                    "GenMw": 402,
                    "FuelCategory": "Wind",
                    "FuelCategoryRollup": "Renewables",
                    "MarginalFlag": "N"
                }
            ]
        }
    })
    .to_string()
}
