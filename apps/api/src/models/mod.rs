pub mod resume;

pub use resume::{Education, OtherSection, PersonalInfo, StructuredResume, WorkExperience};
