//! Fixed-width uppercase code types.
//!
//! Airport and currency codes share one shape: exactly N uppercase ASCII
//! letters, stored inline so the type is `Copy`. [`uppercase_code!`] defines
//! such a type together with its parse error.

/// Defines a `Copy` newtype over `[u8; N]` holding N uppercase ASCII letters,
/// plus an error type whose message names `$what`.
macro_rules! uppercase_code {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident, $len:literal, $what:literal
    ) => {
        #[doc = concat!("Error returned when parsing an invalid ", $what, ".")]
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("invalid {what}: {reason}", what = $what)]
        pub struct $error {
            reason: &'static str,
        }

        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            #[doc = concat!("Parse a ", $what, ". The input must be exactly ", stringify!($len), " uppercase ASCII letters (A-Z).")]
            pub fn parse(s: &str) -> Result<Self, $error> {
                let bytes = s.as_bytes();

                if bytes.len() != $len {
                    return Err($error {
                        reason: concat!("must be exactly ", stringify!($len), " characters"),
                    });
                }
                if !bytes.iter().all(u8::is_ascii_uppercase) {
                    return Err($error {
                        reason: "must be uppercase ASCII letters A-Z",
                    });
                }

                let mut code = [0u8; $len];
                code.copy_from_slice(bytes);
                Ok(Self(code))
            }

            /// Returns the code as a string slice.
            pub fn as_str(&self) -> &str {
                // Only ASCII letters are ever stored, so this never falls back
                std::str::from_utf8(&self.0).unwrap_or_default()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(super) use uppercase_code;

#[cfg(test)]
mod tests {
    uppercase_code!(
        /// Two-letter code used only to exercise the macro at another width.
        PairCode,
        InvalidPairCode,
        2,
        "pair code"
    );

    #[test]
    fn width_follows_parameter() {
        assert_eq!(PairCode::parse("QF").unwrap().as_str(), "QF");
        assert_eq!(
            PairCode::parse("QFA").unwrap_err().to_string(),
            "invalid pair code: must be exactly 2 characters"
        );
    }

    #[test]
    fn debug_names_the_type() {
        assert_eq!(format!("{:?}", PairCode::parse("QF").unwrap()), "PairCode(QF)");
    }

    #[test]
    fn multibyte_input_rejected_without_panic() {
        // "Ö" is two bytes, so the length check passes and the letter check fails
        assert_eq!(
            PairCode::parse("Ö").unwrap_err().to_string(),
            "invalid pair code: must be uppercase ASCII letters A-Z"
        );
    }
}
