use crate::server::auth::claim::{Claim, ACCOUNT_ROLE_CLAIM};

/// Account roles stored in `system_account.role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i16)]
pub enum AccountRole {
    Staff = 1,
    Lecturer = 2,
    Admin = 3,
}

impl AccountRole {
    pub fn value(self) -> i16 {
        self as i16
    }

    pub fn from_value(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::Staff),
            2 => Some(Self::Lecturer),
            3 => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Named authorization policies consulted by the request pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Requires an `AccountRole` claim of `"3"`.
    AdminOnly,
}

impl Policy {
    pub fn evaluate(self, claims: &[Claim]) -> bool {
        match self {
            Self::AdminOnly => is_admin(claims),
        }
    }
}

/// True iff some claim has type `AccountRole` and value `"3"`
///
/// The comparison is exact: no trimming, no numeric parsing.
pub fn is_admin(claims: &[Claim]) -> bool {
    let admin_role = AccountRole::Admin.value().to_string();

    claims
        .iter()
        .any(|claim| claim.claim_type == ACCOUNT_ROLE_CLAIM && claim.value == admin_role)
}

#[cfg(test)]
mod tests {
    use crate::server::auth::{
        claim::{claims_for_account, Claim},
        policy::{is_admin, AccountRole, Policy},
    };

    #[test]
    fn grants_admin_role_claim() {
        let claims = vec![
            Claim::new("Email", "admin@x.com"),
            Claim::new("AccountRole", "3"),
        ];

        assert!(is_admin(&claims));
        assert!(Policy::AdminOnly.evaluate(&claims));
    }

    #[test]
    fn denies_other_roles_and_missing_claim() {
        assert!(!is_admin(&[]));
        assert!(!is_admin(&[Claim::new("AccountRole", "1")]));
        assert!(!is_admin(&[Claim::new("AccountRole", "2")]));
    }

    /// Expect near-misses in type or value to be rejected
    #[test]
    fn requires_exact_type_and_value() {
        assert!(!is_admin(&[Claim::new("accountrole", "3")]));
        assert!(!is_admin(&[Claim::new("Role", "3")]));
        assert!(!is_admin(&[Claim::new("AccountRole", " 3")]));
        assert!(!is_admin(&[Claim::new("AccountRole", "03")]));
    }

    #[test]
    fn issues_role_claim_for_account() {
        let account = entity::system_account::Model {
            account_id: 4,
            name: "System Administrator".to_string(),
            email: "admin@x.com".to_string(),
            password: "secret".to_string(),
            role: AccountRole::Admin.value(),
        };

        let claims = claims_for_account(&account);

        assert!(claims.contains(&Claim::new("AccountId", "4")));
        assert!(is_admin(&claims));
        assert_eq!(AccountRole::from_value(account.role), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_value(7), None);
    }
}
