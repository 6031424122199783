use zeroize::{
    Zeroize,
    ZeroizeOnDrop
};

/// Password protecting a keystore entry.
///
/// Formatting never reveals the value and the memory is wiped on drop; use
/// `expose_secret` where the raw string is genuinely required.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPassword(pub(crate) String);
