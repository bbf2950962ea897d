//! Page components for the link tree.

mod home;

pub use home::Home;
