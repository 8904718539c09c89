use std::time::Duration;

use async_trait::async_trait;

/// Strategy for waiting between provider requests.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn wait(&self, delay: Duration);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioThrottle;

#[async_trait]
impl Throttle for TokioThrottle {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopThrottle;

#[async_trait]
impl Throttle for NoopThrottle {
    async fn wait(&self, _delay: Duration) {}
}
