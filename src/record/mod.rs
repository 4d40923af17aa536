//! Record Module
//!
//! The teacher retirement record and its status.
//!
//! ## Lifecycle
//! - Created from a validated form: photo encoded as a data URI, status
//!   defaults to `Belum Diajukan`, `createdAt == updatedAt`
//! - Mutated by field patches, each refreshing `updatedAt`
//! - Destroyed by explicit deletion by id

mod status;
mod teacher;

pub use status::ProgressStatus;
pub use teacher::{generate_id, now, timestamp_after, NewTeacher, Teacher, TeacherPatch};
