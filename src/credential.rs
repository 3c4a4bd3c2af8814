//! Steam web session credential types.
//!
//! Both values come from an already-authenticated browser session and are
//! supplied via the config file; neither is ever embedded in source.

/// Pre-obtained Steam Community session credentials.
#[derive(Debug, Clone)]
pub struct SessionCredentials {
    /// `sessionid` cookie value, doubling as the `sessionID` anti-forgery
    /// form field on every block request.
    pub session_id: String,
    /// `steamLoginSecure` bearer cookie value.
    pub steam_login_secure: String,
}

impl SessionCredentials {
    /// Shortened session id for console display: long enough to recognize,
    /// short enough not to leak the whole credential.
    pub fn masked_session_id(&self) -> String {
        let prefix: String = self.session_id.chars().take(10).collect();
        if prefix.len() == self.session_id.len() {
            prefix
        } else {
            format!("{prefix}...")
        }
    }
}
