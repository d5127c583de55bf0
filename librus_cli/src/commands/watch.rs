//! Periodic refresh loop holding the latest homework list.
//!
//! Transient failures keep the previous list; a rejected login stops the
//! loop because retrying with the same credentials cannot succeed.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use librus_api::{Client, HomeworkEntry};
use serde::Serialize;

use super::{describe_error, CredentialArgs, WindowArgs};
use crate::output::{print_homework, print_json, OutputFormat};

/// Default refresh period: one hour.
const DEFAULT_INTERVAL_SECS: u64 = 3600;

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Seconds between refreshes
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,
}

/// What a single refresh did to the held state.
#[derive(Debug, PartialEq)]
pub enum RefreshOutcome {
    Updated(usize),
    /// The refresh failed; previous data (if any) is still held.
    Failed(String),
}

/// Latest successfully fetched homework.
///
/// `None` means no refresh has succeeded yet, which is different from an
/// empty list.
#[derive(Debug, Default, Serialize)]
pub struct HomeworkState {
    homework_entries: Option<Vec<HomeworkEntry>>,
}

impl HomeworkState {
    /// Applies one refresh result. Authentication failures are returned so
    /// the caller can stop; everything else is absorbed.
    pub fn apply(
        &mut self,
        result: Result<Vec<HomeworkEntry>, librus_api::Error>,
    ) -> Result<RefreshOutcome, librus_api::Error> {
        match result {
            Ok(entries) => {
                let count = entries.len();
                self.homework_entries = Some(entries);
                Ok(RefreshOutcome::Updated(count))
            }
            Err(err) if err.is_auth() => Err(err),
            Err(err) => {
                tracing::warn!("Homework refresh failed, keeping previous data: {}", err);
                Ok(RefreshOutcome::Failed(err.to_string()))
            }
        }
    }

    /// Number of held entries, or `None` while unavailable.
    pub fn count(&self) -> Option<usize> {
        self.homework_entries.as_ref().map(Vec::len)
    }

    pub fn entries(&self) -> &[HomeworkEntry] {
        self.homework_entries.as_deref().unwrap_or_default()
    }
}

/// Runs `work` unless `shutdown` completes first.
///
/// `shutdown` is polled first so a signal future registers its handler on
/// the very first call.
async fn until_shutdown<F, S>(work: F, shutdown: Pin<&mut S>) -> Option<F::Output>
where
    F: Future,
    S: Future,
{
    tokio::select! {
        biased;
        _ = shutdown => None,
        output = work => Some(output),
    }
}

pub async fn run(args: &WatchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut state = HomeworkState::default();
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval_secs));
    // Shared by every wait and every fetch so an interrupt is never dropped.
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        if until_shutdown(ticker.tick(), shutdown.as_mut()).await.is_none() {
            break;
        }

        let fetch = client.fetch_homework_data(
            &args.credentials.username,
            &args.credentials.password,
            args.window.window(),
        );
        let Some(result) = until_shutdown(fetch, shutdown.as_mut()).await else {
            break;
        };
        let outcome = state.apply(result).map_err(describe_error)?;
        let now = Local::now().format("%Y-%m-%d %H:%M:%S");

        match (&outcome, format) {
            (RefreshOutcome::Updated(count), OutputFormat::Json) => print_json(&serde_json::json!({
                "count": count,
                "homework_entries": state.homework_entries,
            })),
            (RefreshOutcome::Updated(count), _) => {
                eprintln!("[{}] {} homework entries", now, count);
                print_homework(state.entries(), format);
            }
            (RefreshOutcome::Failed(reason), _) => match state.count() {
                Some(count) => eprintln!(
                    "[{}] Update failed ({}); still showing {} entries",
                    now, reason, count
                ),
                None => eprintln!("[{}] Update failed ({}); homework unavailable", now, reason),
            },
        }
    }

    eprintln!("Stopping.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> HomeworkEntry {
        HomeworkEntry {
            id,
            date: "2026-02-20".to_string(),
            subject: "Historia".to_string(),
            creator: "Krzysztof Krupa".to_string(),
            category: "inne wydarzenia".to_string(),
            lesson_no: None,
            time_from: None,
            time_to: None,
            content: None,
            add_date: None,
        }
    }

    #[test]
    fn starts_unavailable() {
        let state = HomeworkState::default();
        assert_eq!(state.count(), None);
        assert!(state.entries().is_empty());
    }

    #[test]
    fn success_replaces_data() {
        let mut state = HomeworkState::default();
        let outcome = state.apply(Ok(vec![entry(1), entry(2)])).unwrap();
        assert_eq!(outcome, RefreshOutcome::Updated(2));
        assert_eq!(state.count(), Some(2));

        state.apply(Ok(Vec::new())).unwrap();
        assert_eq!(state.count(), Some(0));
    }

    #[test]
    fn transient_failure_keeps_previous_data() {
        let mut state = HomeworkState::default();
        state.apply(Ok(vec![entry(1)])).unwrap();

        let outcome = state
            .apply(Err(librus_api::Error::Connection {
                message: "HTTP 503 from HomeWorks".to_string(),
                source: None,
            }))
            .unwrap();
        assert!(matches!(outcome, RefreshOutcome::Failed(reason) if reason.contains("503")));
        assert_eq!(state.count(), Some(1));
        assert_eq!(state.entries()[0].id, 1);
    }

    #[test]
    fn transient_failure_before_first_success_stays_unavailable() {
        let mut state = HomeworkState::default();
        let outcome = state
            .apply(Err(librus_api::Error::Connection {
                message: "refused".to_string(),
                source: None,
            }))
            .unwrap();
        assert!(matches!(outcome, RefreshOutcome::Failed(_)));
        assert_eq!(state.count(), None);
    }

    #[test]
    fn auth_failure_stops() {
        let mut state = HomeworkState::default();
        state.apply(Ok(vec![entry(1)])).unwrap();

        let err = state
            .apply(Err(librus_api::Error::Auth("Invalid login or password".to_string())))
            .unwrap_err();
        assert!(err.is_auth());
        assert_eq!(state.count(), Some(1));
    }

    #[test]
    fn serializes_null_until_first_success() {
        let mut state = HomeworkState::default();
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"homework_entries": null})
        );

        state.apply(Ok(vec![entry(7)])).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["homework_entries"][0]["id"], 7);
    }

    #[tokio::test]
    async fn work_finishes_without_shutdown() {
        let shutdown = std::future::pending::<()>();
        tokio::pin!(shutdown);
        assert_eq!(until_shutdown(async { 5 }, shutdown.as_mut()).await, Some(5));
    }

    #[tokio::test]
    async fn shutdown_interrupts_running_work() {
        let shutdown = tokio::time::sleep(Duration::from_millis(20));
        tokio::pin!(shutdown);
        let slow_fetch = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            vec![entry(1)]
        };
        assert_eq!(until_shutdown(slow_fetch, shutdown.as_mut()).await, None);
    }

    #[tokio::test]
    async fn shutdown_wins_over_ready_work() {
        let shutdown = std::future::ready(());
        tokio::pin!(shutdown);
        assert_eq!(until_shutdown(async { 5 }, shutdown.as_mut()).await, None);
    }
}
