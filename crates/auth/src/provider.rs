use serde::{Deserialize, Serialize};

/// Error surface reported by the external auth provider.
///
/// Both fields are optional because the provider's SDK surfaces errors in
/// several shapes; the translator below is total over all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    /// Provider error code, e.g. `"auth/user-not-found"`.
    pub code: Option<String>,

    /// Raw provider message, if one was supplied.
    pub message: Option<String>,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: None,
        }
    }
}

/// Generic notice used when the provider gave us nothing usable.
const GENERIC_NOTICE: &str = "Something went wrong. Please try again later.";

/// Fixed translation for a recognized provider code.
fn code_translation(code: &str) -> Option<&'static str> {
    match code {
        "auth/user-not-found" => Some("No account was found for that email address."),
        "auth/wrong-password" => Some("The password you entered is incorrect."),
        "auth/invalid-email" => Some("That email address is not valid."),
        "auth/user-disabled" => Some("This account has been disabled. Contact support for help."),
        "auth/too-many-requests" => {
            Some("Too many attempts. Please wait a few minutes and try again.")
        }
        "auth/expired-action-code" => {
            Some("This link has expired. Please request a new one.")
        }
        "auth/invalid-action-code" => {
            Some("This link is invalid or has already been used. Please request a new one.")
        }
        "auth/email-already-in-use" => {
            Some("An account with that email address already exists.")
        }
        "auth/weak-password" => Some("Please choose a stronger password."),
        "auth/network-request-failed" => {
            Some("Network error. Check your connection and try again.")
        }
        _ => None,
    }
}

/// Translate a provider error into a user-facing message.
///
/// Total: every input yields a non-empty string. Recognized codes map through
/// the fixed table; anything else falls back to the raw provider message when
/// it carries content, and finally to a generic notice.
pub fn translate_provider_error(error: &ProviderError) -> String {
    if let Some(code) = error.code.as_deref() {
        if let Some(translated) = code_translation(code) {
            return translated.to_string();
        }
    }

    match error.message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => GENERIC_NOTICE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_has_a_fixed_translation() {
        let codes = [
            "auth/user-not-found",
            "auth/wrong-password",
            "auth/invalid-email",
            "auth/user-disabled",
            "auth/too-many-requests",
            "auth/expired-action-code",
            "auth/invalid-action-code",
            "auth/email-already-in-use",
            "auth/weak-password",
            "auth/network-request-failed",
        ];

        for code in codes {
            let message = translate_provider_error(&ProviderError::from_code(code));
            assert!(!message.is_empty(), "no translation for {code}");
            // The fixed table wins even when the provider sent its own text.
            let with_raw = translate_provider_error(&ProviderError::new(code, "RAW SDK TEXT"));
            assert_eq!(message, with_raw);
        }
    }

    #[test]
    fn known_codes_map_to_their_messages() {
        assert_eq!(
            translate_provider_error(&ProviderError::from_code("auth/user-not-found")),
            "No account was found for that email address."
        );
        assert_eq!(
            translate_provider_error(&ProviderError::from_code("auth/expired-action-code")),
            "This link has expired. Please request a new one."
        );
    }

    #[test]
    fn unknown_code_falls_back_to_the_provider_message() {
        let error = ProviderError::new("auth/so-new-we-never-heard-of-it", "Quota exceeded.");
        assert_eq!(translate_provider_error(&error), "Quota exceeded.");
    }

    #[test]
    fn blank_provider_message_is_not_surfaced() {
        let error = ProviderError::new("auth/so-new-we-never-heard-of-it", "   ");
        assert_eq!(translate_provider_error(&error), GENERIC_NOTICE);
    }

    #[test]
    fn empty_input_yields_the_generic_notice() {
        let message = translate_provider_error(&ProviderError::default());
        assert_eq!(message, GENERIC_NOTICE);
        assert!(!message.is_empty());
    }
}
