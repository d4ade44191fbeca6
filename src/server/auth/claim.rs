use serde::{Deserialize, Serialize};

use crate::server::model::db::SystemAccountModel;

/// Claim type carrying the account ID.
pub const ACCOUNT_ID_CLAIM: &str = "AccountId";
/// Claim type carrying the account email.
pub const EMAIL_CLAIM: &str = "Email";
/// Claim type carrying the account display name.
pub const NAME_CLAIM: &str = "Name";
/// Claim type carrying the numeric account role.
pub const ACCOUNT_ROLE_CLAIM: &str = "AccountRole";

/// A typed key/value fact about an authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// Claim set the authentication layer issues after a successful login
pub fn claims_for_account(account: &SystemAccountModel) -> Vec<Claim> {
    vec![
        Claim::new(ACCOUNT_ID_CLAIM, account.account_id.to_string()),
        Claim::new(EMAIL_CLAIM, account.email.clone()),
        Claim::new(NAME_CLAIM, account.name.clone()),
        Claim::new(ACCOUNT_ROLE_CLAIM, account.role.to_string()),
    ]
}
