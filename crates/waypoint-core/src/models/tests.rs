#[cfg(test)]
mod model_tests {
    use jiff::{
        Timestamp,
        civil::{date, time},
    };

    use crate::models::{
        ActivityList, DayPlan, DaySlot, Itinerary, ItinerarySummary, StoredDay, StoredEvent,
        StoredItinerary, TripWindow,
    };

    fn create_test_event(id: u64, day_id: u64, activity: &str, hour: i8) -> StoredEvent {
        StoredEvent {
            id,
            day_id,
            date: date(2023, 10, 1),
            activity: activity.to_string(),
            start_time: time(hour, 0, 0, 0),
            end_time: time(hour + 2, 0, 0, 0),
            position: 0,
        }
    }

    fn create_test_stored_itinerary() -> StoredItinerary {
        StoredItinerary {
            id: 42,
            user_id: Some("alice".to_string()),
            destination: Some("Lisbon".to_string()),
            start_date: date(2023, 10, 1),
            end_date: date(2023, 10, 2),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            days: vec![
                StoredDay {
                    id: 1,
                    itinerary_id: 42,
                    date: date(2023, 10, 1),
                    position: 0,
                    events: vec![
                        create_test_event(10, 1, "Museum", 9),
                        create_test_event(11, 1, "Hike", 11),
                    ],
                },
                StoredDay {
                    id: 2,
                    itinerary_id: 42,
                    date: date(2023, 10, 2),
                    position: 1,
                    events: vec![create_test_event(12, 2, "Beach", 9)],
                },
            ],
        }
    }

    #[test]
    fn test_trip_window_rejects_inverted_range() {
        let err = TripWindow::new(date(2023, 10, 2), date(2023, 10, 1)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn test_trip_window_single_day() {
        let window = TripWindow::new(date(2024, 2, 29), date(2024, 2, 29)).unwrap();
        assert_eq!(window.day_count(), 1);
        assert_eq!(window.dates().collect::<Vec<_>>(), vec![date(2024, 2, 29)]);
    }

    #[test]
    fn test_trip_window_dates_cross_month_boundary() {
        let window = TripWindow::parse("2023-12-30", "2024-01-02").unwrap();
        let dates: Vec<_> = window.dates().collect();
        assert_eq!(
            dates,
            vec![
                date(2023, 12, 30),
                date(2023, 12, 31),
                date(2024, 1, 1),
                date(2024, 1, 2),
            ]
        );
    }

    #[test]
    fn test_trip_window_parse_errors_name_the_field() {
        let err = TripWindow::parse("not-a-date", "2023-10-02").unwrap_err();
        assert!(matches!(
            err,
            crate::TripError::InvalidInput { ref field, .. } if field == "start_date"
        ));

        let err = TripWindow::parse("2023-10-01", "").unwrap_err();
        assert!(matches!(
            err,
            crate::TripError::InvalidInput { ref field, .. } if field == "end_date"
        ));

        assert!(TripWindow::parse("2023-02-30", "2023-03-01").is_err());
    }

    #[test]
    fn test_trip_window_deserialize_enforces_order() {
        let ok: TripWindow =
            serde_json::from_str(r#"{"start_date":"2023-10-01","end_date":"2023-10-03"}"#)
                .unwrap();
        assert_eq!(ok.day_count(), 3);

        let inverted = serde_json::from_str::<TripWindow>(
            r#"{"start_date":"2023-10-05","end_date":"2023-10-03"}"#,
        );
        assert!(inverted.is_err());
    }

    #[test]
    fn test_activity_list_validation() {
        assert!(ActivityList::new(vec![]).unwrap_err().is_invalid_input());
        assert!(
            ActivityList::new(vec!["Museum".to_string(), "  ".to_string()])
                .unwrap_err()
                .to_string()
                .contains("position 1")
        );

        let list = ActivityList::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.get(0), Some("A"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_activity_list_serde_is_a_plain_array() {
        let list = ActivityList::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["A","B"]"#);
        assert!(serde_json::from_str::<ActivityList>("[]").is_err());
    }

    #[test]
    fn test_itinerary_slot_helpers() {
        let day = date(2023, 10, 1);
        let itinerary = Itinerary {
            trip_window: TripWindow::new(day, day).unwrap(),
            destination: None,
            day_plans: vec![DayPlan {
                date: day,
                slots: vec![DaySlot {
                    date: day,
                    start_time: time(9, 0, 0, 0),
                    end_time: time(11, 0, 0, 0),
                    activity: "A".to_string(),
                }],
            }],
        };

        assert_eq!(itinerary.slot_count(), 1);
        let slot = itinerary.slots().next().unwrap();
        assert_eq!(slot.starts_at(), day.at(9, 0, 0, 0));
        assert_eq!(slot.ends_at(), day.at(11, 0, 0, 0));

        let json = serde_json::to_value(&itinerary).unwrap();
        assert!(json.get("destination").is_none());
        assert_eq!(json["day_plans"][0]["slots"][0]["start_time"], "09:00:00");
    }

    #[test]
    fn test_stored_itinerary_event_lookup() {
        let itinerary = create_test_stored_itinerary();
        assert_eq!(itinerary.event_count(), 3);
        assert_eq!(itinerary.event(11).map(|e| e.activity.as_str()), Some("Hike"));
        assert!(itinerary.event(99).is_none());
    }

    #[test]
    fn test_summary_from_stored_itinerary() {
        let itinerary = create_test_stored_itinerary();
        let summary = ItinerarySummary::from(&itinerary);

        assert_eq!(summary.id, 42);
        assert_eq!(summary.destination.as_deref(), Some("Lisbon"));
        assert_eq!(summary.day_count, 2);
        assert_eq!(summary.event_count, 3);
    }
}
