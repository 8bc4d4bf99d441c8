//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ClientChanges, ClientRepository, LeaveRepository, OtpRepository, ProfileRepository,
    RepoResult, TaskChanges, TaskPage, TaskRepository, TimeEntryRepository, TimesheetRepository,
};
