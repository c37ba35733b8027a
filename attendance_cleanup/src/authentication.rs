use oauth2::AccessToken;

use crate::retrieve::authentication::{Authentication, BearerAuthentication};

pub fn firestore(access_token: &AccessToken) -> impl Authentication {
    BearerAuthentication {
        access_token: access_token.clone(),
    }
}
