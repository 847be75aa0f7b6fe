//! Daily purge task
//!
//! Wipes the meeting table once a day at a configured UTC hour.

use std::sync::Arc;
use std::time::Duration;

use atrium_core::{Database, ReservationEngine};
use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

/// Time until the next occurrence of `hour`:00 UTC
pub fn next_purge_delay(now: DateTime<Utc>, hour: u32) -> Duration {
    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let mut target = now.date_naive().and_time(time).and_utc();
    if target <= now {
        target += ChronoDuration::days(1);
    }
    (target - now).to_std().unwrap_or(Duration::ZERO)
}

/// Runs the purge at `hour`:00 UTC every day until shutdown
pub async fn purge_task(
    engine: Arc<ReservationEngine<Database>>,
    hour: u32,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    loop {
        let delay = next_purge_delay(Utc::now(), hour);
        info!(seconds = delay.as_secs(), "Next purge scheduled");

        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                match engine.purge_all() {
                    Ok(removed) => info!(removed, "Daily purge complete"),
                    Err(e) => error!(error = %e, "Daily purge failed"),
                }
            }
            _ = shutdown_rx.recv() => {
                debug!("Purge task stopped");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_delay_before_hour_same_day() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap();
        let delay = next_purge_delay(now, 12);
        assert_eq!(delay, Duration::from_secs(3 * 3600 + 30 * 60));
    }

    #[test]
    fn test_delay_after_hour_rolls_to_next_day() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 1).unwrap();
        let delay = next_purge_delay(now, 12);
        assert_eq!(delay, Duration::from_secs(22 * 3600 - 1));
    }

    #[test]
    fn test_delay_exactly_at_hour_is_full_day() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let delay = next_purge_delay(now, 0);
        assert_eq!(delay, Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_out_of_range_hour_clamped() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 22, 0, 0).unwrap();
        let delay = next_purge_delay(now, 99);
        assert_eq!(delay, Duration::from_secs(3600));
    }
}
