//! Mock schedule service for testing
//!
//! These are test utilities - not all may be used in current tests but
//! are available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use tripflow::error::{Error, Result, SubmitStep};
use tripflow::remote::{CreateScheduleRequest, DayAttachment, ScheduleService};

/// Call record for `attach_day`
#[derive(Debug, Clone, PartialEq)]
pub struct AttachCall {
    pub schedule_id: String,
    pub day: DayAttachment,
}

/// Call-tracking mock of the remote schedule service.
///
/// Features:
/// - Configurable schedule id returned by the create call
/// - Full call recording for count and ordering assertions
/// - Error injection for create, for a specific day's attach call,
///   and for the "response without a schedule id" case
pub struct MockScheduleService {
    schedule_id: String,
    create_calls: Mutex<Vec<CreateScheduleRequest>>,
    attach_calls: Mutex<Vec<AttachCall>>,
    error_on_create: Mutex<Option<String>>,
    missing_id_on_create: Mutex<bool>,
    error_on_attach_day: Mutex<Option<(u32, String)>>,
}

impl MockScheduleService {
    /// Mock returning the given schedule id from the create call
    pub fn new(schedule_id: &str) -> Self {
        Self {
            schedule_id: schedule_id.to_string(),
            create_calls: Mutex::new(Vec::new()),
            attach_calls: Mutex::new(Vec::new()),
            error_on_create: Mutex::new(None),
            missing_id_on_create: Mutex::new(false),
            error_on_attach_day: Mutex::new(None),
        }
    }

    // === Error injection ===

    /// Make `create_schedule` fail
    pub fn fail_create(&self, msg: &str) {
        *self.error_on_create.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_schedule` behave as if the response carried no id
    pub fn respond_without_id(&self) {
        *self.missing_id_on_create.lock().unwrap() = true;
    }

    /// Make the attach call for one specific day fail
    pub fn fail_attach_for_day(&self, day_id: u32, msg: &str) {
        *self.error_on_attach_day.lock().unwrap() = Some((day_id, msg.to_string()));
    }

    // === Call verification ===

    /// All recorded create calls
    pub fn create_calls(&self) -> Vec<CreateScheduleRequest> {
        self.create_calls.lock().unwrap().clone()
    }

    /// All recorded attach calls, in issue order
    pub fn attach_calls(&self) -> Vec<AttachCall> {
        self.attach_calls.lock().unwrap().clone()
    }

    /// Total number of network calls the mock has seen
    pub fn total_calls(&self) -> usize {
        self.create_calls().len() + self.attach_calls().len()
    }

    /// Day ids of the attach calls, in issue order
    pub fn attached_day_ids(&self) -> Vec<u32> {
        self.attach_calls()
            .iter()
            .map(|c| c.day.day_id)
            .collect()
    }
}

#[async_trait]
impl ScheduleService for MockScheduleService {
    async fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<String> {
        self.create_calls.lock().unwrap().push(request.clone());

        if let Some(msg) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(Error::Network {
                step: SubmitStep::CreateSchedule,
                message: msg.clone(),
            });
        }

        if *self.missing_id_on_create.lock().unwrap() {
            return Err(Error::Network {
                step: SubmitStep::CreateSchedule,
                message: "response contained no schedule id".to_string(),
            });
        }

        Ok(self.schedule_id.clone())
    }

    async fn attach_day(&self, schedule_id: &str, day: &DayAttachment) -> Result<()> {
        self.attach_calls.lock().unwrap().push(AttachCall {
            schedule_id: schedule_id.to_string(),
            day: day.clone(),
        });

        if let Some((fail_day, msg)) = self.error_on_attach_day.lock().unwrap().as_ref() {
            if *fail_day == day.day_id {
                return Err(Error::Network {
                    step: SubmitStep::AttachDay,
                    message: msg.clone(),
                });
            }
        }

        Ok(())
    }
}
