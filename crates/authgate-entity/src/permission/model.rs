//! Permission entry entity model.

use serde::{Deserialize, Serialize};

/// One grantable capability in a user's permission set.
///
/// The JSON field names (`entry`, `add_flag`, `admin_flag`) are a wire
/// contract: they appear verbatim in grant request bodies and in the cached
/// permission snapshot written at login, so they must not be renamed.
///
/// Within one user's permission set, `entry` values are unique. The
/// invariant is enforced at grant time by the service layer, not by the
/// storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Integer identifier of the capability.
    pub entry: i32,
    /// Whether access to the capability is granted.
    #[serde(default)]
    pub add_flag: bool,
    /// Whether the capability carries administrative scope.
    #[serde(default)]
    pub admin_flag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let entry = PermissionEntry {
            entry: 3,
            add_flag: true,
            admin_flag: false,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"entry": 3, "add_flag": true, "admin_flag": false})
        );
    }

    #[test]
    fn test_flags_default_to_false() {
        let entry: PermissionEntry = serde_json::from_str(r#"{"entry": 7}"#).unwrap();
        assert_eq!(entry.entry, 7);
        assert!(!entry.add_flag);
        assert!(!entry.admin_flag);
    }
}
