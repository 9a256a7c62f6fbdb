use serde::{Deserialize, Serialize};

use crate::models::{UserRecord, UserSummary};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserSummary>,
    pub total: u64,
}

impl UserListResponse {
    pub fn from_records(records: &[UserRecord]) -> Self {
        let users: Vec<UserSummary> = records.iter().map(UserSummary::from).collect();
        let total = users.len() as u64;
        Self { users, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_counts_users_and_hides_passwords() {
        let records = vec![
            UserRecord::new(1).with_username("ana").with_password("s3cret-one"),
            UserRecord::new(2).with_username("bo").with_password("s3cret-two"),
        ];

        let response = UserListResponse::from_records(&records);
        assert_eq!(response.total, 2);
        assert_eq!(response.users[1].username.as_deref(), Some("bo"));

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("s3cret"));
    }

    #[test]
    fn envelopes_share_camel_case_keys() {
        let record = UserRecord::new(1)
            .with_full_name("Ana")
            .with_role("USER")
            .with_profile_picture_url("u");

        let single = serde_json::to_value(UserResponse { user: record.clone() }).unwrap();
        assert_eq!(
            single,
            serde_json::json!({
                "user": { "id": 1, "fullName": "Ana", "role": "USER", "profilePictureUrl": "u" }
            })
        );

        let list = serde_json::to_value(UserListResponse::from_records(&[record])).unwrap();
        assert_eq!(
            list,
            serde_json::json!({
                "users": [{ "id": 1, "fullName": "Ana", "roleName": "USER", "profilePictureUrl": "u" }],
                "total": 1
            })
        );
    }

    #[test]
    fn empty_list_has_zero_total() {
        let response = UserListResponse::from_records(&[]);
        assert_eq!(response.total, 0);
        assert!(response.users.is_empty());
    }

    #[test]
    fn user_response_requires_id() {
        let ok: UserResponse =
            serde_json::from_str(r#"{"user": {"id": 3, "role": "USER"}}"#).unwrap();
        assert_eq!(ok.user, UserRecord::new(3).with_role("USER"));

        let missing = serde_json::from_str::<UserResponse>(r#"{"user": {"role": "USER"}}"#);
        assert!(missing.is_err());
    }
}
