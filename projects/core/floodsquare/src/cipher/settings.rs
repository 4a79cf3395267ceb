use crate::salt::Salt;

/// Options shared by [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt).
///
/// Decryption must use the same salt as encryption. A mismatched salt does not
/// fail on its own; it yields wrong plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloodSquareSettings {
    /// Whitening applied to the payload before encryption and undone after decryption.
    pub salt: Salt,

    /// Reject decrypted grids whose padding is not intact.
    ///
    /// Encryption always pads with `0xFF`, so this only ever fires on a wrong key
    /// or modified ciphertext. Has no effect on encryption.
    pub verify_padding: bool,
}

impl FloodSquareSettings {
    /// Settings with no salt and padding verification enabled.
    pub const fn new() -> Self {
        Self {
            salt: Salt::NONE,
            verify_padding: true,
        }
    }

    /// Sets the whitening salt.
    pub const fn with_salt(mut self, salt: Salt) -> Self {
        self.salt = salt;
        self
    }

    /// Enables or disables padding verification on decrypt.
    pub const fn with_verify_padding(mut self, verify: bool) -> Self {
        self.verify_padding = verify;
        self
    }
}

impl Default for FloodSquareSettings {
    fn default() -> Self {
        Self::new()
    }
}
