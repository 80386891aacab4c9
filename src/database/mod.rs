pub mod event_attendees_repo;
pub mod events_repo;
pub mod friend_requests_repo;
pub mod users_repo;
