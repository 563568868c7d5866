pub mod validate;

pub use validate::{is_valid_email, parse_identifier, LenientJson};
