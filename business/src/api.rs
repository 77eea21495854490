//! Requests against the remote users collection.
//!
//! Listing and creating take the collection url (`{base}/users`), updating and
//! deleting take the record url (`{base}/users/{id}`). Any 2xx status is success.
//! Response bodies of `PUT` and `DELETE` are ignored.

use log::debug;
use thiserror::Error;

use crate::http::{Client, HttpError, Response};
use crate::{NewUserRequest, UserRecord};

#[derive(Debug, Clone, Error)]
pub enum UsersApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, UsersApiError>;

fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(UsersApiError::Status(response.status))
    }
}

/// `GET {users_url}`
pub async fn list_users(users_url: &str) -> ApiResult<Vec<UserRecord>> {
    debug!("GET {users_url}");
    let response = ensure_success(Client::get(users_url).send().await?)?;
    response
        .json::<Vec<UserRecord>>()
        .map_err(|e| UsersApiError::Decode(e.to_string()))
}

/// `POST {users_url}` with `{name, email, website}`; returns the created record.
pub async fn create_user(users_url: &str, request: &NewUserRequest) -> ApiResult<UserRecord> {
    debug!("POST {users_url}");
    let builder = Client::post(users_url)
        .json(request)
        .map_err(|e| UsersApiError::Encode(e.to_string()))?;
    let response = ensure_success(builder.send().await?)?;
    response
        .json::<UserRecord>()
        .map_err(|e| UsersApiError::Decode(e.to_string()))
}

/// `PUT {user_url}` with the full record, including fields the table does not show.
pub async fn update_user(user_url: &str, user: &UserRecord) -> ApiResult<()> {
    debug!("PUT {user_url}");
    let builder = Client::put(user_url)
        .json(user)
        .map_err(|e| UsersApiError::Encode(e.to_string()))?;
    ensure_success(builder.send().await?)?;
    Ok(())
}

/// `DELETE {user_url}`
pub async fn delete_user(user_url: &str) -> ApiResult<()> {
    debug!("DELETE {user_url}");
    ensure_success(Client::delete(user_url).send().await?)?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn users_url(server: &MockServer) -> String {
        format!("{}/users", server.uri())
    }

    #[tokio::test]
    async fn list_decodes_records_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 2, "name": "B", "email": "b@x.io", "website": "b.io", "phone": "1" },
                { "id": 1, "name": "A", "email": "a@x.io", "website": "a.io" }
            ])))
            .mount(&server)
            .await;

        let users = list_users(&users_url(&server)).await.expect("list");

        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(users[1].email, "a@x.io");
    }

    #[tokio::test]
    async fn non_2xx_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/3"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = delete_user(&format!("{}/3", users_url(&server)))
            .await
            .unwrap_err();

        assert!(matches!(err, UsersApiError::Status(404)));
    }

    #[tokio::test]
    async fn create_sends_only_the_three_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(serde_json::json!({
                "name": "Ann",
                "email": "ann@x.io",
                "website": "ann.io"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 11,
                "name": "Ann",
                "email": "ann@x.io",
                "website": "ann.io"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = NewUserRequest {
            name: "Ann".to_owned(),
            email: "ann@x.io".to_owned(),
            website: "ann.io".to_owned(),
        };
        let created = create_user(&users_url(&server), &request)
            .await
            .expect("create");

        assert_eq!(created.id, 11);
    }

    #[tokio::test]
    async fn malformed_list_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = list_users(&users_url(&server)).await.unwrap_err();

        assert!(matches!(err, UsersApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on port 1.
        let err = list_users("http://127.0.0.1:1/users").await.unwrap_err();

        assert!(matches!(err, UsersApiError::Transport(_)));
    }
}
