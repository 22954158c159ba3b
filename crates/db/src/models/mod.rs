//! Row models and request DTOs, one module per table.

pub mod certificate;
pub mod experience;
pub mod profile;
pub mod skill;
pub mod testimonial;
pub mod work;
pub mod work_image;
