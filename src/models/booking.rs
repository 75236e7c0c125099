use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::profit;
use crate::utils::date_parser::{self, DateParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("booking payload does not contain request_id property")]
    RequestIdMissing,
    #[error("booking payload does not contain check_in property")]
    CheckInMissing,
    #[error("booking payload does not contain nights property")]
    NightsMissing,
    #[error("booking payload does not contain selling_rate property")]
    SellingRateMissing,
    #[error("booking payload does not contain margin property")]
    MarginMissing,
    #[error(transparent)]
    InvalidCheckIn(#[from] DateParseError),
}

/// A single booking request as received from a client.
///
/// Nothing is validated at construction beyond field presence and the
/// check-in format; use [`BookingRequest::is_valid`] to filter requests that
/// cannot produce a per-night profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BookingPayload")]
pub struct BookingRequest {
    request_id: String,
    check_in: NaiveDate,
    nights: i32,
    selling_rate: i32,
    margin: i32,
}

/// Wire shape of a booking before presence checks
#[derive(Debug, Deserialize)]
struct BookingPayload {
    request_id: Option<String>,
    check_in: Option<String>,
    nights: Option<i32>,
    selling_rate: Option<i32>,
    margin: Option<i32>,
}

impl TryFrom<BookingPayload> for BookingRequest {
    type Error = BookingError;

    fn try_from(payload: BookingPayload) -> Result<Self, Self::Error> {
        let request_id = payload.request_id.ok_or(BookingError::RequestIdMissing)?;
        let check_in = payload.check_in.ok_or(BookingError::CheckInMissing)?;
        let nights = payload.nights.ok_or(BookingError::NightsMissing)?;
        let selling_rate = payload.selling_rate.ok_or(BookingError::SellingRateMissing)?;
        let margin = payload.margin.ok_or(BookingError::MarginMissing)?;

        BookingRequest::new(request_id, &check_in, nights, selling_rate, margin)
    }
}

impl BookingRequest {
    pub fn new(
        request_id: impl Into<String>,
        check_in: &str,
        nights: i32,
        selling_rate: i32,
        margin: i32,
    ) -> Result<Self, BookingError> {
        Ok(Self::from_date(
            request_id,
            date_parser::to_date(check_in)?,
            nights,
            selling_rate,
            margin,
        ))
    }

    pub fn from_date(
        request_id: impl Into<String>,
        check_in: NaiveDate,
        nights: i32,
        selling_rate: i32,
        margin: i32,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            check_in,
            nights,
            selling_rate,
            margin,
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn nights(&self) -> i32 {
        self.nights
    }

    pub fn selling_rate(&self) -> i32 {
        self.selling_rate
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Nights, selling rate and margin must all be strictly positive
    pub fn is_valid(&self) -> bool {
        self.nights > 0 && self.selling_rate > 0 && self.margin > 0
    }

    /// Exclusive end of the stay
    pub fn check_out(&self) -> NaiveDate {
        date_parser::add_days(self.check_in, self.nights)
    }

    /// `other` can follow this booking only if it checks in strictly after our check-out
    pub fn no_overlap(&self, other: &BookingRequest) -> bool {
        date_parser::is_after(other.check_in, self.check_out())
    }

    pub fn profit(&self) -> i64 {
        profit::profit(self.selling_rate, self.margin)
    }

    pub fn profit_per_night(&self) -> f64 {
        profit::profit_per_night(self.selling_rate, self.margin, self.nights)
    }
}
