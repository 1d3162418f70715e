//! Query loop for submitted tasks.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::client::{AucClient, SubmittedTask};
use super::config::PollPolicy;
use super::messages::{QueryResponse, TaskStatus};
use crate::errors::auc_error::{AucError, AucResult};

/// Final result of a successful task.
#[derive(Debug, Clone)]
pub struct TaskResult {
    pub task: SubmittedTask,
    /// Query body of the successful response, verbatim
    pub body: String,
    /// Number of query calls issued, including the successful one
    pub attempts: u32,
    pub elapsed: Duration,
}

impl TaskResult {
    pub fn parse(&self) -> AucResult<QueryResponse> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Query `task` until it succeeds or fails.
///
/// `20000001` and `20000002` sleep `policy.interval` and query again; any
/// other code ends the loop. With `policy.max_wait` set, a pending task whose
/// next query would start after the deadline ends with
/// `AucError::DeadlineExceeded`.
pub async fn poll_until_complete(
    client: &AucClient,
    task: &SubmittedTask,
    policy: &PollPolicy,
) -> AucResult<TaskResult> {
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        let outcome = client.query(task).await?;
        attempts += 1;

        match outcome.status {
            TaskStatus::Success => {
                let elapsed = started.elapsed();
                info!(
                    "Task {} finished after {} queries ({:.1}s)",
                    task.task_id,
                    attempts,
                    elapsed.as_secs_f64()
                );
                return Ok(TaskResult {
                    task: task.clone(),
                    body: outcome.body,
                    attempts,
                    elapsed,
                });
            }
            TaskStatus::Pending(stage) => {
                debug!(?stage, attempts, "Task {} not finished yet", task.task_id);
            }
            TaskStatus::Failed(code) => {
                let message = outcome.headers.message_or_empty().to_string();
                warn!(
                    "Task {} failed with status code {}: {}",
                    task.task_id, code, message
                );
                return Err(AucError::TaskFailed { code, message });
            }
        }

        if let Some(max_wait) = policy.max_wait
            && started.elapsed() + policy.interval > max_wait
        {
            warn!(
                "Task {} still pending after {} queries, giving up",
                task.task_id, attempts
            );
            return Err(AucError::DeadlineExceeded(max_wait));
        }

        tokio::time::sleep(policy.interval).await;
    }
}
