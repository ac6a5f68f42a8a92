//! Data structures exchanged with the Radicle command-line tools.
//!
//! The profile tool (`rad-profile-dev`) and the identity tool
//! (`rad-identities-dev`) both answer on standard output with JSON, but
//! they disagree on the envelope:
//!
//! - profile-family calls print a JSON *string literal* whose content is
//!   the JSON document ([`Encoding::Double`]);
//! - identity/project-family calls print the JSON document directly
//!   ([`Encoding::Single`]).
//!
//! This crate holds the typed records ([`Profile`], [`Person`],
//! [`Project`]), the request payloads sent to the tools, and the
//! decoders. It contains no process handling.
//!
//! # Example
//!
//! ```
//! use rad_types::{Encoding, Profile};
//!
//! let stdout = r#""{\"id\":\"abc123\"}""#;
//! let profile: Profile = Encoding::Double.decode(stdout).unwrap();
//! assert_eq!(profile.id, "abc123");
//! ```

pub mod constants;
pub mod encoding;
pub mod error;
pub mod identity;
pub mod profile;
pub mod project;
pub mod request;

pub use constants::{DEFAULT_BRANCH, PERSON_NAMESPACE, PROJECT_NAMESPACE};
pub use encoding::Encoding;
pub use error::{DecodeError, DecodeResult};
pub use identity::{Person, PersonPayload, PersonSubject};
pub use profile::Profile;
pub use project::{Project, ProjectPayload, ProjectSubject};
pub use request::{PersonRequest, ProjectRequest};

/// Extra, unmodelled fields carried through decoding untouched.
pub type Extra = serde_json::Map<String, serde_json::Value>;
