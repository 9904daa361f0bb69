pub mod address;
pub mod normalize;
pub mod result;
pub mod token;

pub use address::{is_valid_address, is_valid_value, ADDRESS_LEN, ADDRESS_PREFIX};
pub use normalize::{normalize, tokenize};
pub use result::{validate_input, ValidOutputView, ValidationResult};
pub use token::Token;
