//! People using the system: staff members loaded from personnel records, and
//! visitors who are not in the directory.

/// Display name used when a record carries no (or an empty) name.
pub const ANONYMOUS: &str = "Anonymous";

/// Secret a staff member authenticates with.
///
/// Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// What kind of actor a [`Person`] is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Someone not found in personnel; can browse but never authenticates.
    Visitor,
    /// A staff member. Without a stored credential they cannot authenticate either.
    Employee { credential: Option<Credential> },
}

/// A named actor.
///
/// # Invariants
/// - `name` is never empty (absent names normalize to [`ANONYMOUS`]).
/// - `authenticated` only ever flips from `false` to `true`, and only through
///   [`Person::authenticate`] with the matching credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    role: Role,
    authenticated: bool,
}

fn normalize_name(name: Option<String>) -> String {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS.to_string(),
    }
}

impl Person {
    pub fn visitor(name: Option<String>) -> Self {
        Self {
            name: normalize_name(name),
            role: Role::Visitor,
            authenticated: false,
        }
    }

    pub fn employee(name: Option<String>, credential: Option<Credential>) -> Self {
        Self {
            name: normalize_name(name),
            role: Role::Employee { credential },
            authenticated: false,
        }
    }

    /// Normalized name, for greetings and prompts only.
    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_employee(&self) -> bool {
        matches!(self.role, Role::Employee { .. })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check `candidate` against the stored credential.
    ///
    /// On a match the person becomes authenticated; a mismatch leaves the flag
    /// untouched (an already authenticated person stays authenticated).
    pub fn authenticate(&mut self, candidate: &str) -> bool {
        let matched = match &self.role {
            Role::Employee {
                credential: Some(credential),
            } => credential.matches(candidate),
            _ => false,
        };

        if matched {
            self.authenticated = true;
            tracing::info!(person = %self.name, "authenticated");
        } else {
            tracing::warn!(person = %self.name, "authentication failed");
        }
        matched
    }
}
