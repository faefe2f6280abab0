/// Utility helpers for Sangam
use crate::api::ApiError;
use futures_util::future::{select, Either};
use std::future::Future;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay(duration: Duration) {
    let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Races `future` against a platform timer.
pub async fn with_timeout<F, T>(limit: Duration, future: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let request = std::pin::pin!(future);
    let deadline = std::pin::pin!(delay(limit));
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn timeout_wins_over_pending_future() {
        let result: Result<(), ApiError> =
            with_timeout(Duration::from_millis(10), std::future::pending()).await;
        assert!(matches!(result, Err(ApiError::Timeout(_))));
    }

    #[tokio::test]
    async fn ready_future_wins_over_timeout() {
        let result = with_timeout(Duration::from_secs(5), async { Ok::<_, ApiError>(7) }).await;
        assert_eq!(result.ok(), Some(7));
    }
}
