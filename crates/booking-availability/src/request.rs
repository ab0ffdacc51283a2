use chrono::{Duration, NaiveDate};
use validator::Validate;

use crate::{AvailabilityRequest, MAX_STAY_NIGHTS, MIN_STAY_NIGHTS, ValidationError};

/// Validate a proposed stay against the booking business rules.
///
/// Pure function; no queries run until a request passes. `today` is injected
/// by the caller (the service passes the current UTC calendar day) so the
/// rules stay testable. Check-ins as early as yesterday are accepted to
/// tolerate up to 24h of client/server timezone skew.
pub fn validate_request(
    request: &AvailabilityRequest,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if request.check_out <= request.check_in {
        return Err(ValidationError::CheckoutBeforeCheckin);
    }

    if !request.ignore_past_check && request.check_in < today - Duration::days(1) {
        return Err(ValidationError::PastCheckIn);
    }

    let nights = request.interval().nights();
    if nights < MIN_STAY_NIGHTS {
        return Err(ValidationError::StayTooShort);
    }
    if nights > MAX_STAY_NIGHTS {
        return Err(ValidationError::StayTooLong);
    }

    request
        .validate()
        .map_err(|_| ValidationError::InvalidGuestCount)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OverrideFlags;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(check_in: NaiveDate, check_out: NaiveDate, guest_count: i32) -> AvailabilityRequest {
        AvailabilityRequest {
            check_in,
            check_out,
            guest_count,
            campsite_id: None,
            ignore_past_check: false,
            overrides: OverrideFlags::default(),
        }
    }

    const TODAY: (i32, u32, u32) = (2024, 6, 15);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request(date(2024, 6, 20), date(2024, 6, 23), 2);
        assert!(validate_request(&req, today()).is_ok());
    }

    #[test]
    fn test_checkout_before_checkin() {
        let req = request(date(2024, 6, 23), date(2024, 6, 20), 2);
        assert_eq!(
            validate_request(&req, today()),
            Err(ValidationError::CheckoutBeforeCheckin)
        );
    }

    #[test]
    fn test_zero_night_stay_rejected() {
        let req = request(date(2024, 6, 20), date(2024, 6, 20), 2);
        assert_eq!(
            validate_request(&req, today()),
            Err(ValidationError::CheckoutBeforeCheckin)
        );
    }

    #[test]
    fn test_past_check_in_with_one_day_tolerance() {
        // Yesterday is accepted (timezone skew tolerance)
        let req = request(date(2024, 6, 14), date(2024, 6, 16), 2);
        assert!(validate_request(&req, today()).is_ok());

        // Two days ago is not
        let req = request(date(2024, 6, 13), date(2024, 6, 16), 2);
        assert_eq!(
            validate_request(&req, today()),
            Err(ValidationError::PastCheckIn)
        );
    }

    #[test]
    fn test_ignore_past_check_skips_the_rule() {
        let mut req = request(date(2024, 1, 1), date(2024, 1, 3), 2);
        req.ignore_past_check = true;
        assert!(validate_request(&req, today()).is_ok());
    }

    #[test]
    fn test_stay_length_boundaries() {
        // 21 nights accepted
        let req = request(date(2024, 7, 1), date(2024, 7, 22), 2);
        assert!(validate_request(&req, today()).is_ok());

        // 22 nights rejected
        let req = request(date(2024, 7, 1), date(2024, 7, 23), 2);
        assert_eq!(
            validate_request(&req, today()),
            Err(ValidationError::StayTooLong)
        );
    }

    #[test]
    fn test_invalid_guest_count() {
        let req = request(date(2024, 6, 20), date(2024, 6, 23), 0);
        assert_eq!(
            validate_request(&req, today()),
            Err(ValidationError::InvalidGuestCount)
        );
    }
}
