//! Permission policy
//!
//! A single equality check: the caller's role must be the managing role.
//! Denied callers never reach the network.

use purgekit_config::MANAGE_ROLE;

/// Role-equality permission policy
#[derive(Debug, Clone)]
pub struct PermissionPolicy {
    required_role: String,
}

impl PermissionPolicy {
    /// Policy requiring the managing role
    pub fn manage() -> Self {
        Self {
            required_role: MANAGE_ROLE.to_string(),
        }
    }

    pub fn allows(&self, caller_role: &str) -> bool {
        caller_role == self.required_role
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::manage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_role_is_allowed() {
        let policy = PermissionPolicy::manage();
        assert!(policy.allows("admin"));
    }

    #[test]
    fn test_other_roles_are_denied() {
        let policy = PermissionPolicy::manage();
        assert!(!policy.allows("editor"));
        assert!(!policy.allows("Admin"));
        assert!(!policy.allows(""));
    }
}
