//! Group names the identity service attaches to nodes.
//!
//! Groups are free-form strings on the wire. These constants only cover the
//! values the service is known to emit.

/// Nodes shared by every method, e.g. the CSRF token or the identifier field.
pub const DEFAULT: &str = "default";
pub const PASSWORD: &str = "password";
pub const OIDC: &str = "oidc";
pub const PROFILE: &str = "profile";
pub const LINK: &str = "link";
pub const CODE: &str = "code";
pub const TOTP: &str = "totp";
pub const LOOKUP_SECRET: &str = "lookup_secret";
pub const WEBAUTHN: &str = "webauthn";
pub const PASSKEY: &str = "passkey";
