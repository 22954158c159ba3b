//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod certificate_repo;
pub mod experience_repo;
pub mod profile_repo;
pub mod skill_repo;
pub mod testimonial_repo;
pub mod work_image_repo;
pub mod work_repo;

pub use certificate_repo::CertificateRepo;
pub use experience_repo::ExperienceRepo;
pub use profile_repo::ProfileRepo;
pub use skill_repo::SkillRepo;
pub use testimonial_repo::TestimonialRepo;
pub use work_image_repo::{ReorderOutcome, WorkImageRepo};
pub use work_repo::WorkRepo;
