pub mod errors;
pub mod passwords;
pub mod staff;
