pub mod convert;
pub mod files;
pub mod upload;
