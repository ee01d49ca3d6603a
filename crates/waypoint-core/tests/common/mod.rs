use waypoint_core::{TripPlanner, TripPlannerBuilder, params::GenerateItinerary};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Generation parameters for a trip with the given inclusive dates.
pub fn trip(start: &str, end: &str, activities: &[&str]) -> GenerateItinerary {
    GenerateItinerary {
        destination: Some("Kyoto".to_string()),
        start_date: start.to_string(),
        end_date: end.to_string(),
        activities: activities.iter().map(ToString::to_string).collect(),
        user_id: None,
    }
}
