use serde::{Deserialize, Serialize};
use taskdesk_model::{AccessToken, Session, User, UserId};

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(rename = "loggedInUser")]
    pub logged_in_user: LoggedInUser,
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LoggedInUser {
    pub id: UserId,
    pub email: String,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Session {
            user: User {
                id: resp.logged_in_user.id,
                email: resp.logged_in_user.email,
            },
            access_token: AccessToken::new(resp.access_token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_ignores_extra_user_fields() {
        let json = r#"{
            "loggedInUser": {"id": 1, "email": "tungnt@softech.vn", "isActive": true, "roles": []},
            "access_token": "eyJhbGciOi"
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let session = Session::from(resp);
        assert_eq!(session.user.id, UserId(1));
        assert_eq!(session.user.email, "tungnt@softech.vn");
        assert_eq!(session.access_token.as_str(), "eyJhbGciOi");
    }
}
