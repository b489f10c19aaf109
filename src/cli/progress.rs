//! CLI progress callback with styled output

use crate::cli::style::{arrow, check, cross, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use tripflow::error::Error;
use tripflow::submit::{DayStatus, Phase, ProgressCallback};

/// Progress callback that prints submission phases to the terminal
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{} {}", check(), phase.to_string().success()),
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_schedule_created(&self, schedule_id: &str) {
        println!("  {} schedule {}", check(), schedule_id.accent());
    }

    async fn on_day(&self, day_id: u32, status: DayStatus) {
        match status {
            DayStatus::Started => {
                println!("  {} day {}...", arrow(), day_id.accent());
            }
            DayStatus::Success => {
                println!("  {} day {} attached", check(), day_id.accent());
            }
            DayStatus::Failed(msg) => {
                eprintln!(
                    "  {} day {} failed: {}",
                    cross(),
                    day_id.accent().for_stderr(),
                    msg.error()
                );
            }
        }
    }

    async fn on_error(&self, error: &Error) {
        eprintln!("{} {}", cross(), error.to_string().error());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
