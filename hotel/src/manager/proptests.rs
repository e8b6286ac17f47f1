//! Property-based tests for `HotelManager`.

use super::{DateRange, HotelManager};
use crate::{Client, Reservation, ReservationKey, Room};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|cents| f64::from(cents) / 100.0)
}

// Room numbers are deduplicated so every room can be added.
fn rooms_strategy() -> impl Strategy<Value = Vec<Room>> {
    prop::collection::btree_map(1u32..500, (0u8..3, rate_strategy()), 1..20).prop_map(|rooms| {
        rooms
            .into_iter()
            .map(|(number, (category, rate))| match category {
                0 => Room::standard(number, rate),
                1 => Room::suite(number, rate),
                _ => Room::deluxe(number, rate),
            })
            .collect()
    })
}

fn manager_with(rooms: &[Room]) -> HotelManager {
    let mut manager = HotelManager::new();
    for room in rooms {
        manager.add_room(room.clone()).unwrap();
    }
    manager.register_client(Client::new("Ana", "Lopez", "CF1")).unwrap();
    manager
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Availability results never depend on the requested range
    #[test]
    fn availability_ignores_range(
        rooms in rooms_strategy(),
        booked in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
        a in date_strategy(), b in date_strategy(), c in date_strategy(), d in date_strategy(),
    ) {
        let mut manager = manager_with(&rooms);
        for index in booked {
            let number = rooms[index.index(rooms.len())].number();
            let _ = manager.book_room(Reservation::new(ReservationKey::new("CF1", number), a, b));
        }

        let first: Vec<u32> = manager.list_available_rooms(&DateRange::new(a, b)).iter().map(|r| r.number()).collect();
        let second: Vec<u32> = manager.list_available_rooms(&DateRange::new(c, d)).iter().map(|r| r.number()).collect();
        let expected: Vec<u32> = manager.rooms().iter().filter(|r| r.is_available()).map(Room::number).collect();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, expected);
    }

    // Price updates succeed exactly for registered rooms and store the value verbatim
    #[test]
    fn update_price_matches_registry(rooms in rooms_strategy(), number in 1u32..500, rate in rate_strategy()) {
        let mut manager = manager_with(&rooms);
        let exists = rooms.iter().any(|r| r.number() == number);

        let result = manager.update_room_price(number, rate);
        prop_assert_eq!(result.is_ok(), exists);
        if exists {
            prop_assert_eq!(manager.find_room(number).unwrap().nightly_rate(), rate);
        }
    }

    // Book then cancel always restores availability
    #[test]
    fn book_then_cancel_restores_room(
        rooms in rooms_strategy(),
        index in any::<prop::sample::Index>(),
        check_in in date_strategy(),
        check_out in date_strategy(),
    ) {
        let mut manager = manager_with(&rooms);
        let number = rooms[index.index(rooms.len())].number();

        manager.book_room(Reservation::new(ReservationKey::new("CF1", number), check_in, check_out)).unwrap();
        prop_assert!(!manager.find_room(number).unwrap().is_available());

        // a second booking changes nothing
        let reservations = manager.reservations().len();
        prop_assert!(manager.book_room(Reservation::new(ReservationKey::new("CF1", number), check_in, check_out)).is_err());
        prop_assert_eq!(manager.reservations().len(), reservations);

        manager.cancel_reservation("CF1", number).unwrap();
        prop_assert!(manager.find_room(number).unwrap().is_available());
    }
}
