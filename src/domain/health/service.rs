use std::time::{Duration, Instant};

use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};
use crate::state::AppState;

/// DB 핑 타임아웃
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Degraded 상태 임계값
const DEGRADED_THRESHOLD: Duration = Duration::from_millis(500);

/// 전체 헬스 체크 수행
pub async fn check_health(state: &AppState) -> HealthStatus {
    let database = check_database(state).await;

    HealthStatus {
        status: determine_health_state(&database),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        checks: HealthChecks { database },
    }
}

fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    if let Some(latency) = check.latency_ms {
        if latency >= DEGRADED_THRESHOLD.as_millis() as u64 {
            return HealthState::Degraded;
        }
    }

    HealthState::Healthy
}

async fn check_database(state: &AppState) -> CheckResult {
    let start = Instant::now();

    let result = timeout(HEALTH_CHECK_TIMEOUT, state.db.ping()).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(())) => {
            tracing::debug!(latency_ms, "Database health check passed");
            CheckResult::success(latency_ms)
        }
        Ok(Err(e)) => {
            tracing::warn!(latency_ms, error = %e, "Database health check failed");
            CheckResult::failure(latency_ms, e.to_string())
        }
        Err(_) => {
            tracing::warn!("Database health check timed out");
            CheckResult::timeout(HEALTH_CHECK_TIMEOUT.as_millis() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_healthy_for_fast_ping() {
        assert_eq!(determine_health_state(&CheckResult::success(5)), HealthState::Healthy);
    }

    #[test]
    fn should_be_degraded_for_slow_ping() {
        assert_eq!(
            determine_health_state(&CheckResult::success(800)),
            HealthState::Degraded
        );
    }

    #[test]
    fn should_be_unhealthy_for_failure_or_timeout() {
        let failure = CheckResult::failure(10, "connection refused".to_string());

        assert_eq!(determine_health_state(&failure), HealthState::Unhealthy);
        assert_eq!(
            determine_health_state(&CheckResult::timeout(3000)),
            HealthState::Unhealthy
        );
    }
}
