//! Framework-free view state and content for the site.

pub mod contact;
pub mod nav;
pub mod profile;
pub mod projects;
pub mod reveal;
pub mod scheduler;
