use tokio::time::Duration;

#[async_trait::async_trait]
pub(crate) trait Clock: Send {
    async fn sleep(&mut self, duration: Duration);
}

#[derive(Copy, Clone)]
pub(crate) struct RealClock;

#[async_trait::async_trait]
impl Clock for RealClock {
    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately from `sleep()` and remembers every requested duration.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RecordingClock {
    sleeps: std::sync::Arc<std::sync::Mutex<Vec<Duration>>>,
}

#[cfg(test)]
impl RecordingClock {
    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("RecordingClock mutex guard poison").clone()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl Clock for RecordingClock {
    async fn sleep(&mut self, duration: Duration) {
        self.sleeps
            .lock()
            .expect("RecordingClock mutex guard poison")
            .push(duration);
    }
}
