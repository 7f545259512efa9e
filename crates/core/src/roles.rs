//! Well-known role name constants and capability checks.
//!
//! Identity and role information come from an external auth collaborator;
//! the core treats both as opaque strings and only asks capability
//! questions about them.

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_TEAM: &str = "team";
pub const ROLE_GUEST: &str = "guest";

/// Staff roles can see and manage every booking.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_MANAGER
}

/// A requester may cancel a booking they own; staff may cancel any booking.
pub fn can_cancel(requester_id: DbId, role: &str, owner_id: DbId) -> bool {
    requester_id == owner_id || is_staff(role)
}

/// A requester may view a booking they own; staff and front-desk team
/// members may view any booking.
pub fn can_view(requester_id: DbId, role: &str, owner_id: DbId) -> bool {
    requester_id == owner_id || is_staff(role) || role == ROLE_TEAM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_manager_are_staff() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_MANAGER));
    }

    #[test]
    fn team_and_guest_are_not_staff() {
        assert!(!is_staff(ROLE_TEAM));
        assert!(!is_staff(ROLE_GUEST));
    }

    #[test]
    fn owner_can_cancel_own_booking() {
        assert!(can_cancel(7, ROLE_GUEST, 7));
    }

    #[test]
    fn non_owner_guest_cannot_cancel() {
        assert!(!can_cancel(7, ROLE_GUEST, 8));
    }

    #[test]
    fn staff_can_cancel_any_booking() {
        assert!(can_cancel(1, ROLE_ADMIN, 8));
        assert!(can_cancel(1, ROLE_MANAGER, 8));
    }

    #[test]
    fn team_can_view_but_not_cancel_others() {
        assert!(can_view(1, ROLE_TEAM, 8));
        assert!(!can_cancel(1, ROLE_TEAM, 8));
    }
}
