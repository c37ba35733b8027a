use oauth2::AccessToken;

use super::transport::Request;

pub trait Authentication {
    fn apply(&self, request: Request) -> Request;
}

pub struct BearerAuthentication {
    pub access_token: AccessToken,
}

impl Authentication for BearerAuthentication {
    fn apply(&self, request: Request) -> Request {
        request.header(
            "Authorization",
            format!("Bearer {}", self.access_token.secret()),
        )
    }
}
