pub mod event_detail_service;
pub mod events_service;
pub mod friend_request_service;
pub mod home_service;
pub mod profile_service;
