pub mod notification;
pub mod posting;
pub mod resume;
