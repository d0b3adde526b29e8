//! Days-until-expiry classification for active services.
//!
//! Day granularity is UTC calendar days, rounding toward the later day: any
//! partial day counts as a full day remaining.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::service::{Service, ServiceStatus};

const MS_PER_DAY: i64 = 86_400_000;

/// Expiration bucket, ordered healthy to expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationBucket {
    Ok,
    Warning,
    Critical,
    Expired,
}

/// Classification result: bucket plus whole days remaining (or elapsed, for
/// `expired`). `days` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expiration {
    pub bucket: ExpirationBucket,
    pub days: i64,
}

/// Classify an active service's distance to its end date.
///
/// Returns `None` for non-active services and for lifetime services (no end
/// date). Buckets: past end date is `expired`; then `0..=7` days remaining
/// is `critical`, `8..=30` is `warning`, beyond that `ok`. Callers that
/// render badges treat `ok` as "no badge"; the classification itself still
/// reports it.
pub fn classify(service: &Service, now: DateTime<Utc>) -> Option<Expiration> {
    if service.status != ServiceStatus::Active {
        return None;
    }
    let end_date = service.end_date?;

    let ms = (end_date - now).num_milliseconds();
    // Equivalent to `ms.div_ceil(MS_PER_DAY)`; inlined because the signed
    // `div_ceil` stdlib method is still unstable (`int_roundings`).
    let days_until = {
        let d = ms / MS_PER_DAY;
        let r = ms % MS_PER_DAY;
        if (r > 0 && MS_PER_DAY > 0) || (r < 0 && MS_PER_DAY < 0) {
            d + 1
        } else {
            d
        }
    };

    let (bucket, days) = if end_date < now {
        (ExpirationBucket::Expired, days_until.abs())
    } else if days_until <= 7 {
        (ExpirationBucket::Critical, days_until)
    } else if days_until <= 30 {
        (ExpirationBucket::Warning, days_until)
    } else {
        (ExpirationBucket::Ok, days_until)
    };

    Some(Expiration { bucket, days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{BillingCycle, ServiceId};
    use chrono::{Duration, TimeZone};
    use opsdesk_core::{RecordId, UserId};
    use proptest::prelude::*;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn test_service(status: ServiceStatus, end_date: Option<DateTime<Utc>>) -> Service {
        Service {
            id: ServiceId::new(RecordId::new()),
            user: UserId::new(),
            package: "hosting-pro".to_string(),
            status,
            start_date: test_now() - Duration::days(365),
            end_date,
            price: 99.0,
            billing_cycle: BillingCycle::Annual,
            auto_renew: false,
            notes: None,
        }
    }

    #[test]
    fn non_active_services_are_not_classified() {
        let now = test_now();
        for status in [
            ServiceStatus::Pending,
            ServiceStatus::Expired,
            ServiceStatus::Suspended,
            ServiceStatus::Cancelled,
        ] {
            let service = test_service(status, Some(now + Duration::days(3)));
            assert_eq!(classify(&service, now), None);
        }
    }

    #[test]
    fn lifetime_services_never_expire() {
        let service = test_service(ServiceStatus::Active, None);
        assert_eq!(classify(&service, test_now()), None);
    }

    #[test]
    fn seven_days_out_is_critical_eight_is_warning() {
        let now = test_now();

        let critical = test_service(ServiceStatus::Active, Some(now + Duration::days(7)));
        let got = classify(&critical, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Critical);
        assert_eq!(got.days, 7);

        let warning = test_service(ServiceStatus::Active, Some(now + Duration::days(8)));
        let got = classify(&warning, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Warning);
        assert_eq!(got.days, 8);
    }

    #[test]
    fn thirty_days_is_warning_thirty_one_is_ok() {
        let now = test_now();

        let warning = test_service(ServiceStatus::Active, Some(now + Duration::days(30)));
        assert_eq!(classify(&warning, now).unwrap().bucket, ExpirationBucket::Warning);

        let ok = test_service(ServiceStatus::Active, Some(now + Duration::days(31)));
        let got = classify(&ok, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Ok);
        assert_eq!(got.days, 31);
    }

    #[test]
    fn partial_days_round_toward_the_later_day() {
        let now = test_now();
        // 7 days + 1ms remaining counts as 8 whole days.
        let service =
            test_service(ServiceStatus::Active, Some(now + Duration::days(7) + Duration::milliseconds(1)));
        let got = classify(&service, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Warning);
        assert_eq!(got.days, 8);
    }

    #[test]
    fn just_past_end_date_is_expired_with_zero_days() {
        let now = test_now();
        let service = test_service(ServiceStatus::Active, Some(now - Duration::milliseconds(1)));
        let got = classify(&service, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Expired);
        assert_eq!(got.days, 0);
    }

    #[test]
    fn a_day_past_end_date_is_expired_with_one_day() {
        let now = test_now();
        let service = test_service(ServiceStatus::Active, Some(now - Duration::hours(25)));
        let got = classify(&service, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Expired);
        assert_eq!(got.days, 1);
    }

    #[test]
    fn end_date_equal_to_now_is_critical_with_zero_days() {
        let now = test_now();
        let service = test_service(ServiceStatus::Active, Some(now));
        let got = classify(&service, now).unwrap();
        assert_eq!(got.bucket, ExpirationBucket::Critical);
        assert_eq!(got.days, 0);
    }

    proptest! {
        /// Property: classification is a pure function of (service, now).
        #[test]
        fn classify_is_idempotent(offset_ms in -200i64 * 86_400_000..200 * 86_400_000) {
            let now = test_now();
            let service =
                test_service(ServiceStatus::Active, Some(now + Duration::milliseconds(offset_ms)));

            let first = classify(&service, now);
            let second = classify(&service, now);
            prop_assert_eq!(first, second);
        }

        /// Property: for future end dates, `days` recombined with `now`
        /// brackets the end date to within one day (the ceil rule).
        #[test]
        fn days_round_trips_to_the_end_date(offset_ms in 0i64..400 * 86_400_000) {
            let now = test_now();
            let end_date = now + Duration::milliseconds(offset_ms);
            let service = test_service(ServiceStatus::Active, Some(end_date));

            let got = classify(&service, now).unwrap();
            prop_assert!(end_date <= now + Duration::days(got.days));
            prop_assert!(end_date > now + Duration::days(got.days - 1));
        }

        /// Property: `days` is never negative, whichever bucket applies.
        #[test]
        fn days_is_non_negative(offset_ms in -400i64 * 86_400_000..400 * 86_400_000) {
            let now = test_now();
            let service =
                test_service(ServiceStatus::Active, Some(now + Duration::milliseconds(offset_ms)));

            let got = classify(&service, now).unwrap();
            prop_assert!(got.days >= 0);
        }
    }
}
