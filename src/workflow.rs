/// Daily birthday check: fetch roster, match today, announce on the wall
use std::any::Any;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::models::RunOutcome;
use crate::publish::PublishGateway;
use crate::roster::RosterSource;
use crate::services::birthday_service::{RosterColumns, find_todays_birthdays};
use crate::utils::message_formatter::format_announcement;

/// Where to read the roster and where to post
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    pub doc_id: String,
    pub table_id: String,
    pub columns: RosterColumns,
    pub owner_id: i64,
}

/// One-shot birthday announcement workflow
pub struct BirthdayWorkflow<R, P> {
    roster: R,
    gateway: P,
    settings: WorkflowSettings,
}

impl<R, P> BirthdayWorkflow<R, P>
where
    R: RosterSource + Send + Sync + 'static,
    P: PublishGateway + Send + Sync + 'static,
{
    pub fn new(roster: R, gateway: P, settings: WorkflowSettings) -> Self {
        Self {
            roster,
            gateway,
            settings,
        }
    }

    /// Run the check for `today` and report the outcome.
    ///
    /// Never panics and never returns an error: every failure, including a
    /// panic inside a collaborator, ends up in the returned outcome.
    pub async fn run(self: Arc<Self>, today: NaiveDate) -> RunOutcome {
        let task = tokio::spawn(async move { self.check_and_post(today).await });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                let detail = if e.is_panic() {
                    format!("workflow panicked: {}", panic_message(e.into_panic()))
                } else {
                    format!("workflow task failed: {}", e)
                };
                error!("Birthday check aborted: {}", detail);
                RunOutcome::unexpected(detail)
            }
        }
    }

    async fn check_and_post(&self, today: NaiveDate) -> RunOutcome {
        info!("Checking birthdays for {}", today);

        let records = match self
            .roster
            .fetch(&self.settings.doc_id, &self.settings.table_id)
            .await
        {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to fetch roster: {}", e);
                return RunOutcome::fetch_failed(e.to_string());
            }
        };

        let matches = find_todays_birthdays(&records, today, &self.settings.columns);
        if matches.is_empty() {
            info!("No birthdays found for today");
            return RunOutcome::no_birthdays();
        }

        let count = matches.len();
        info!("Found {} birthday(s) today", count);

        let Some(text) = format_announcement(&matches) else {
            return RunOutcome::unexpected("no announcement produced for a non-empty match set");
        };

        match self.gateway.publish(&text, self.settings.owner_id).await {
            Ok(receipt) => {
                info!(
                    "Sent birthday announcement for {} person(s), post id {}",
                    count, receipt.post_id
                );
                RunOutcome::posted(count)
            }
            Err(e) => {
                warn!("Failed to publish birthday announcement: {}", e);
                RunOutcome::publish_failed(count, e.to_string())
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
