//! Redacting secret holder for the upstream API key.

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // Zero the bytes in place; all-zero bytes remain valid UTF-8.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_secret() {
        let secret = SecretString::new("sandbox-key-123");

        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "sandbox-key-123");
    }

    #[test]
    fn whitespace_only_secrets_count_as_empty() {
        assert!(SecretString::new("  ").is_empty());
        assert!(!SecretString::new("k").is_empty());
    }
}
