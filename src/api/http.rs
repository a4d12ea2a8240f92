use std::collections::BTreeMap;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::api::BookingApi;
use crate::errors::SubmissionError;
use crate::wizard::submission::{BookingReceipt, BookingRequest};

/// Sends bookings to the clinic backend over HTTP.
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn bookings_url(&self) -> String {
        format!("{}/bookings", self.base_url.trim_end_matches('/'))
    }
}

impl BookingApi for HttpBookingApi {
    fn create_booking(
        &mut self,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, SubmissionError> {
        let url = self.bookings_url();
        debug!(%url, branch = %request.branch_id, service = %request.service_id, "posting booking");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return response
                .json::<BookingReceipt>()
                .map_err(|err| SubmissionError::Transport(err.to_string()));
        }
        if status.is_client_error() {
            let body: Value = response.json().unwrap_or(Value::Null);
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                fields: field_errors(&body),
            });
        }
        Err(SubmissionError::UnexpectedStatus(status.as_u16()))
    }
}

/// Pulls per-field messages out of a rejection body.
///
/// The backend sends `{"errors": {field: message}}`; older deployments send
/// a flat map, and plain `{"error": {"code", "message"}}` envelopes land
/// under the "_" key.
fn field_errors(body: &Value) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    if let Some(map) = body.get("errors").and_then(Value::as_object) {
        for (field, message) in map {
            if let Some(message) = message.as_str() {
                fields.insert(field.clone(), message.to_string());
            }
        }
        return fields;
    }
    if let Some(message) = body
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
    {
        fields.insert("_".to_string(), message.to_string());
        return fields;
    }
    if let Some(map) = body.as_object() {
        for (field, message) in map {
            if let Some(message) = message.as_str() {
                fields.insert(field.clone(), message.to_string());
            }
        }
    }
    fields
}
