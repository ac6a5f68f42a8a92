//! Fixed keys and defaults shared with the identity tool.

/// Namespace key under which a person document stores its fields.
pub const PERSON_NAMESPACE: &str = "https://radicle.xyz/link/identities/person/v1";

/// Namespace key under which a project document stores its fields.
pub const PROJECT_NAMESPACE: &str = "https://radicle.xyz/link/identities/project/v1";

/// Default branch sent with a project creation request when none is given.
pub const DEFAULT_BRANCH: &str = "master";
