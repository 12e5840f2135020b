pub mod bytes;
pub mod errors;
