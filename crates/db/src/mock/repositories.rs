use japri_core::models::{schedule::NewSchedule, Class, Room, ScheduleListing, Teacher};
use mockall::mock;

use crate::repositories::schedule::InsertOutcome;

// Mock repositories for testing
mock! {
    pub ReferenceRepo {
        pub async fn list_rooms(&self) -> eyre::Result<Vec<Room>>;

        pub async fn list_teachers(&self) -> eyre::Result<Vec<Teacher>>;

        pub async fn list_classes(&self) -> eyre::Result<Vec<Class>>;
    }
}

mock! {
    pub ScheduleRepo {
        pub async fn list_schedule_listings(&self) -> eyre::Result<Vec<ScheduleListing>>;

        pub async fn insert_without_overlap(
            &self,
            new: NewSchedule,
        ) -> eyre::Result<InsertOutcome>;

        pub async fn delete_schedule(&self, id: i64) -> eyre::Result<bool>;
    }
}
