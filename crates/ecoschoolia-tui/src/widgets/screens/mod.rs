//! Learner screens, one per tab

mod assignments;
mod cbcflix;
mod home;
mod profile;
mod virtual_school;

pub use assignments::{AssignmentCard, AssignmentsScreen};
pub use cbcflix::CbcFlixHub;
pub use home::{difficulty_dots, LearnerHome};
pub use profile::ProfileScreen;
pub use virtual_school::VirtualSchoolHub;
