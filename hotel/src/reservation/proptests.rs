//! Property-based tests for reservation keys and date handling.

use super::{format_date, parse_date, ReservationKey};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Stored dates always read back as the same day
    #[test]
    fn formatted_dates_parse_back(date in date_strategy()) {
        prop_assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    // Keys are equal exactly when both components are equal
    #[test]
    fn reservation_key_identity(id1 in "[A-Z0-9]{1,8}", room1 in 1u32..1000, id2 in "[A-Z0-9]{1,8}", room2 in 1u32..1000) {
        let key1 = ReservationKey::new(id1.clone(), room1);
        let key2 = ReservationKey::new(id2.clone(), room2);
        prop_assert_eq!(key1 == key2, id1 == id2 && room1 == room2);
    }
}
