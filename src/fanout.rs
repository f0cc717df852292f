//! Bounded fan-out over independent calls
//!
//! Runs one async operation per input with a cap on how many are in flight.
//! A failing unit is logged and reported separately; it never cancels its
//! siblings.

use crate::error::{Error, Result};
use futures::stream::{self, StreamExt};
use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// Default number of concurrent requests for a fan-out
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Outcome of a fan-out, in input order
#[derive(Debug)]
pub struct FanOut<I, T> {
    /// Inputs whose call succeeded, with their results
    pub succeeded: Vec<(I, T)>,
    /// Inputs whose call failed, with the error
    pub failed: Vec<(I, Error)>,
}

impl<I, T> FanOut<I, T> {
    /// Successful results without their inputs
    pub fn into_values(self) -> Vec<T> {
        self.succeeded.into_iter().map(|(_, value)| value).collect()
    }

    /// Whether every unit succeeded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run `op` for every input with at most `concurrency` calls in flight
pub async fn fan_out<I, T, F, Fut>(
    inputs: impl IntoIterator<Item = I>,
    concurrency: usize,
    op: F,
) -> FanOut<I, T>
where
    I: Clone + Display,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let results: Vec<(I, Result<T>)> = stream::iter(inputs)
        .map(|input| {
            let call = op(input.clone());
            async move { (input, call.await) }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut outcome = FanOut {
        succeeded: Vec::with_capacity(results.len()),
        failed: Vec::new(),
    };
    for (input, result) in results {
        match result {
            Ok(value) => outcome.succeeded.push((input, value)),
            Err(e) => {
                warn!("{input}: {e}");
                outcome.failed.push((input, e));
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fan_out_isolates_failures() {
        let outcome = fan_out(["a", "b", "c"], 4, |name| async move {
            if name == "b" {
                Err(Error::http_status(404, "Not Found"))
            } else {
                Ok(name.to_uppercase())
            }
        })
        .await;

        assert_eq!(
            outcome.succeeded,
            vec![("a", "A".to_string()), ("c", "C".to_string())]
        );
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, "b");
        assert_eq!(outcome.failed[0].1.status(), Some(404));
        assert!(!outcome.is_complete());
    }

    #[tokio::test]
    async fn test_fan_out_preserves_input_order() {
        let outcome = fan_out(1..=5u64, 5, |n| async move {
            tokio::time::sleep(Duration::from_millis(50 - n * 10)).await;
            Ok(n)
        })
        .await;

        assert!(outcome.is_complete());
        assert_eq!(outcome.into_values(), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_fan_out_bounds_concurrency() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let outcome = fan_out(0..10u32, 3, |n| {
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(n)
            }
        })
        .await;

        assert_eq!(outcome.succeeded.len(), 10);
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_fan_out_zero_concurrency_still_runs() {
        let outcome = fan_out(["x"], 0, |s| async move { Ok(s.len()) }).await;
        assert_eq!(outcome.into_values(), vec![1]);
    }
}
