use crate::models::{booking::BookingRequest, profit::ProfitPerNight};

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Average, minimum and maximum profit per night over the valid bookings.
    ///
    /// Invalid bookings are skipped without notice. No valid booking at all is
    /// not an error: every figure is zero.
    pub fn profit_per_night<'a, I>(&self, bookings: I) -> ProfitPerNight
    where
        I: IntoIterator<Item = &'a BookingRequest>,
    {
        let per_night: Vec<f64> = bookings
            .into_iter()
            .filter(|booking| booking.is_valid())
            .map(BookingRequest::profit_per_night)
            .collect();

        if per_night.is_empty() {
            return ProfitPerNight::default();
        }

        let avg = per_night.iter().sum::<f64>() / per_night.len() as f64;
        let min = per_night.iter().copied().fold(f64::INFINITY, f64::min);
        let max = per_night.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        ProfitPerNight::new(avg, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, nights: i32, selling_rate: i32, margin: i32) -> BookingRequest {
        BookingRequest::new(id, "2020-01-01", nights, selling_rate, margin).unwrap()
    }

    fn stats(avg: f64, min: f64, max: f64) -> ProfitPerNight {
        ProfitPerNight { avg_night: avg, min_night: min, max_night: max }
    }

    #[test]
    fn test_two_bookings() {
        let bookings = vec![
            booking("bookata_XY123", 5, 200, 20),
            booking("kayete_PP234", 4, 156, 22),
        ];
        assert_eq!(StatsService::new().profit_per_night(&bookings), stats(8.29, 8.0, 8.58));
    }

    #[test]
    fn test_known_cases() {
        let service = StatsService::new();

        let first = vec![
            booking("bookata_XY123", 5, 200, 25),
            booking("kayete_PP234", 4, 156, 22),
        ];
        assert_eq!(service.profit_per_night(&first), stats(9.29, 8.58, 10.0));

        let second = vec![
            booking("bookata_XY123", 1, 50, 20),
            booking("kayete_PP234", 1, 55, 22),
            booking("bookata_XY123", 1, 49, 21),
        ];
        assert_eq!(service.profit_per_night(&second), stats(10.8, 10.0, 12.1));

        let third = vec![
            booking("A", 7, 244, 5),
            booking("B", 5, 100, 9),
            booking("C", 1, 79, 11),
            booking("D", 3, 49, 21),
        ];
        assert_eq!(service.profit_per_night(&third), stats(3.92, 1.74, 8.69));
    }

    #[test]
    fn test_invalid_bookings_are_skipped() {
        let bookings = vec![
            booking("bookata_XY123", 0, 50, 20),
            booking("kayete_PP234", 1, 55, 22),
            booking("bookata_XY123", 1, 49, 21),
        ];
        assert_eq!(
            StatsService::new().profit_per_night(&bookings),
            stats(11.2, 10.29, 12.1)
        );
    }

    #[test]
    fn test_no_valid_bookings() {
        let service = StatsService::new();
        let empty: Vec<BookingRequest> = Vec::new();
        assert_eq!(service.profit_per_night(&empty), ProfitPerNight::default());

        let invalid = vec![
            booking("A", 0, 50, 20),
            booking("B", 3, 0, 20),
            booking("C", 3, 50, -1),
        ];
        assert_eq!(service.profit_per_night(&invalid), stats(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_single_booking() {
        let bookings = vec![booking("A", 3, 100, 10)];
        assert_eq!(
            StatsService::new().profit_per_night(&bookings),
            stats(3.33, 3.33, 3.33)
        );
    }
}
