pub mod auth;
pub mod event;
pub mod events;
pub mod friends;
pub mod home;
pub mod profile;
