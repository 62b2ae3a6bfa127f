//! Service layer for the adoption API.
//!
//! - Forms (request body parsing and validation for listings)
//! - Photos (upload storage and public URLs)

pub mod forms;
mod photos;

pub use forms::{AnimalForm, UploadedPhoto};
pub use photos::{PhotoStorage, UPLOADS_ROUTE};
