//! Two-digit precision helpers for the per-night figures returned by the API.

/// Round to the nearest hundredth (half away from zero)
pub fn to_nearest(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round down to the hundredth
pub fn down(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Round up to the hundredth
pub fn up(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_nearest() {
        assert_eq!(to_nearest(5.7896), 5.79);
        assert_eq!(to_nearest(8.2900000001), 8.29);
        assert_eq!(to_nearest(0.0), 0.0);
    }

    #[test]
    fn test_down() {
        assert_eq!(down(2.33291), 2.33);
        assert_eq!(down(2.339), 2.33);
    }

    #[test]
    fn test_up() {
        assert_eq!(up(1.55789), 1.56);
        assert_eq!(up(1.551), 1.56);
    }
}
