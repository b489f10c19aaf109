//! HTTP schedule service implementation

use crate::error::{Error, Result, SubmitStep};
use crate::remote::{CreateScheduleRequest, DayAttachment, ScheduleService};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Schedule service backed by the remote HTTP API
pub struct HttpScheduleService {
    client: Client,
    base_url: String,
}

impl HttpScheduleService {
    /// Create a client against the given API base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn multipart_form(request: &CreateScheduleRequest) -> Result<Form> {
        let bytes = tokio::fs::read(&request.banner).await?;
        let file_name = request
            .banner
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("banner")
            .to_string();

        let form = Form::new()
            .text("tripName", request.trip_name.clone())
            .text("travelMode", request.travel_mode.as_str())
            .text("visible", request.visibility.as_wire_bool())
            .text(
                "location[from][latitude]",
                request.location_from.latitude.to_string(),
            )
            .text(
                "location[from][longitude]",
                request.location_from.longitude.to_string(),
            )
            .text(
                "location[to][latitude]",
                request.location_to.latitude.to_string(),
            )
            .text(
                "location[to][longitude]",
                request.location_to.longitude.to_string(),
            )
            .text("dates[from]", request.dates_from.clone())
            .text("dates[end]", request.dates_end.clone())
            .text("numberOfDays", request.number_of_days.to_string())
            .part("bannerImage", Part::bytes(bytes).file_name(file_name));

        Ok(form)
    }
}

/// Pull the schedule id out of a successful create response.
///
/// The API has returned both `{data: {schedule: {_id}}}` and
/// `{data: {id}}` shapes; accept either, as string or number.
fn schedule_id_from(body: &Value) -> Option<String> {
    let id = body
        .pointer("/data/schedule/_id")
        .or_else(|| body.pointer("/data/id"))?;
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Turn a non-success response body into the matching error.
///
/// `{errors: [{msg}]}` is the server-side validation list; `{message}`
/// is a plain failure. Anything else falls back to the raw status.
fn error_from_body(step: SubmitStep, status: StatusCode, body: &Value) -> Error {
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        let messages: Vec<String> = errors
            .iter()
            .filter_map(|e| e.get("msg").and_then(Value::as_str))
            .map(ToString::to_string)
            .collect();
        if !messages.is_empty() {
            return Error::ServerValidation(messages);
        }
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| format!("server returned {status}"), ToString::to_string);
    Error::Network {
        step,
        message,
    }
}

#[async_trait]
impl ScheduleService for HttpScheduleService {
    async fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<String> {
        let url = self.api_url("/schedules");
        let form = Self::multipart_form(request).await?;

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Network {
                step: SubmitStep::CreateSchedule,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(error_from_body(SubmitStep::CreateSchedule, status, &body));
        }

        schedule_id_from(&body).ok_or_else(|| Error::Network {
            step: SubmitStep::CreateSchedule,
            message: "response contained no schedule id".to_string(),
        })
    }

    async fn attach_day(&self, schedule_id: &str, day: &DayAttachment) -> Result<()> {
        let url = self.api_url(&format!("/schedules/{schedule_id}/days"));

        let payload = serde_json::json!({
            "Description": day.description,
            "date": day.date,
            "location": {
                "from": {
                    "latitude": day.from.latitude,
                    "longitude": day.from.longitude,
                },
                "to": {
                    "latitude": day.to.latitude,
                    "longitude": day.to.longitude,
                },
            },
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Network {
                step: SubmitStep::AttachDay,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(error_from_body(SubmitStep::AttachDay, status, &body));
        }

        tracing::debug!(schedule_id, day = day.day_id, "day attached");
        Ok(())
    }
}
