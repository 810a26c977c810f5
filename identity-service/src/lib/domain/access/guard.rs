use crate::access::errors::AccessError;
use crate::access::models::UserClaims;
use crate::user::models::Role;

/// Allow the call only when the verified caller holds exactly `required`.
///
/// # Errors
/// * `Forbidden` - Any other role
pub fn authorize(claims: &UserClaims, required: Role) -> Result<(), AccessError> {
    if claims.role == required {
        Ok(())
    } else {
        tracing::debug!(
            user_id = %claims.user_id,
            role = %claims.role,
            required = %required,
            "Role check failed"
        );
        Err(AccessError::Forbidden { required })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::models::UserId;

    fn claims_with(role: Role) -> UserClaims {
        UserClaims {
            user_id: UserId(1),
            email: "someone@example.com".to_string(),
            role,
            name: "Someone".to_string(),
        }
    }

    #[test]
    fn test_admin_passes_admin_check() {
        assert_eq!(authorize(&claims_with(Role::Admin), Role::Admin), Ok(()));
    }

    #[test]
    fn test_every_other_role_is_forbidden() {
        for role in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
            assert_eq!(
                authorize(&claims_with(role), Role::Admin),
                Err(AccessError::Forbidden {
                    required: Role::Admin
                })
            );
        }
    }

    #[test]
    fn test_check_is_exact_equality() {
        // Admin does not imply the lower roles.
        assert!(authorize(&claims_with(Role::Admin), Role::Client).is_err());
        assert!(authorize(&claims_with(Role::Developer), Role::Developer).is_ok());
    }
}
