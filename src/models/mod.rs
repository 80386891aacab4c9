pub mod event_attendees;
pub mod events;
pub mod friend_requests;
pub mod users;

pub use event_attendees::EventAttendeeRow;
pub use events::EventRow;
pub use friend_requests::FriendRequestRow;
pub use users::UserProfileRow;
