use crate::policy::time::Clock;
use crate::policy::ConnectionPolicy;
use rand::Rng;
use std::future::Future;
use tokio::time::Duration;
use tonic::Status;

impl ConnectionPolicy {
    /// Upper bound of the pause after the `failed_attempts`-th failure:
    /// `min(initial * multiplier^(failed_attempts - 1), max)`.
    pub(crate) fn backoff_ceiling(&self, failed_attempts: u32) -> Duration {
        let exponent = failed_attempts.saturating_sub(1).min(i32::MAX as u32) as i32;
        let ceiling = self.initial_backoff.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        let max = self.max_backoff.as_secs_f64();

        if ceiling.is_finite() && ceiling < max {
            Duration::from_secs_f64(ceiling)
        } else {
            self.max_backoff
        }
    }

    /// Uniformly random pause in `[0, backoff_ceiling]`, so that clients retrying against a
    /// struggling leader spread out.
    fn jittered_backoff(&self, failed_attempts: u32) -> Duration {
        let ceiling = self.backoff_ceiling(failed_attempts);
        rand::thread_rng().gen_range(Duration::from_secs(0)..=ceiling)
    }

    /// Runs `call` until it succeeds, returns a non-retryable status, or `max_attempts` calls have
    /// been made. The last status is returned unchanged.
    pub(crate) async fn retry<T, F, Fut, C>(
        &self,
        clock: &mut C,
        logger: &slog::Logger,
        method: &'static str,
        mut call: F,
    ) -> Result<T, Status>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Status>>,
        C: Clock,
    {
        let mut attempt = 1;
        loop {
            let status = match call().await {
                Ok(reply) => return Ok(reply),
                Err(status) => status,
            };

            if !self.is_retryable(status.code()) {
                return Err(status);
            }
            if attempt >= self.max_attempts {
                slog::warn!(
                    logger,
                    "{} failed after {} attempts: {:?}",
                    method,
                    attempt,
                    status
                );
                return Err(status);
            }

            let pause = self.jittered_backoff(attempt);
            slog::debug!(
                logger,
                "{} attempt {} failed with {:?}. Retrying in {}ms.",
                method,
                attempt,
                status.code(),
                pause.as_millis()
            );
            clock.sleep(pause).await;
            attempt += 1;
        }
    }
}
