use serde::{Deserialize, Serialize};

/// Identity derived from the bearer token (or returned by registration).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInfo {
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateUserResponse {
    pub message: String,
    pub data: CreateUserData,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateUserData {
    #[serde(rename = "newUser")]
    pub new_user: UserInfo,
    pub token: String,
}
