use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Required lowercase prefix of every address.
pub const ADDRESS_PREFIX: &str = "0x";

/// Number of hex digits following the prefix.
pub const HEX_DIGITS: usize = 40;

/// Total accepted length: prefix plus 40 hex digits.
pub const ADDRESS_LEN: usize = ADDRESS_PREFIX.len() + HEX_DIGITS;

/// Lexical check for an Ethereum address.
///
/// Accepts exactly `0x` followed by 40 characters from `[0-9a-fA-F]`,
/// anchored at both ends. Mixed case is accepted as-is; EIP-55 checksum
/// casing is not verified.
pub fn is_valid_address<S: AsRef<str>>(token: S) -> bool {
    let token = token.as_ref();

    let Some(digits) = token.strip_prefix(ADDRESS_PREFIX) else {
        return false;
    };

    // Byte length is safe here: any non-ASCII byte fails the hex scan below.
    digits.len() == HEX_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validity check for a value of unknown type.
///
/// Recognised string holders are `String`, `&'static str`, `Box<str>`,
/// `Cow<'static, str>`, `Rc<str>` and `Arc<str>`. Anything else is invalid,
/// including wrappers such as `Option<String>`.
pub fn is_valid_value(value: &dyn Any) -> bool {
    as_str(value).is_some_and(is_valid_address)
}

fn as_str(value: &dyn Any) -> Option<&str> {
    if let Some(s) = value.downcast_ref::<String>() {
        Some(s.as_str())
    } else if let Some(s) = value.downcast_ref::<&'static str>() {
        Some(*s)
    } else if let Some(s) = value.downcast_ref::<Box<str>>() {
        Some(&**s)
    } else if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        Some(&**s)
    } else if let Some(s) = value.downcast_ref::<Rc<str>>() {
        Some(&**s)
    } else {
        value.downcast_ref::<Arc<str>>().map(|s| &**s)
    }
}
