use log::debug;
use oauth2::basic::BasicClient;
use oauth2::http::{HeaderMap, StatusCode};
use oauth2::{
    AccessToken, AuthType, AuthUrl, ClientId, ClientSecret, HttpRequest, HttpResponse,
    RefreshToken, RequestTokenError, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::endpoints;
use crate::error::Error;
use crate::retrieve::transport::{Method, Request, Transport, TransportError};
use crate::settings::Settings;

/// Only `access_token` is required of a reply; `oauth2` also insists on `token_type`.
#[derive(Deserialize)]
struct TokenReply {
    access_token: Option<String>,
}

/// Trades the long-lived refresh token for an access token. One attempt;
/// any failure is fatal.
pub fn exchange<T: Transport>(
    transport: &T,
    settings: &Settings,
    refresh_token: &RefreshToken,
) -> Result<AccessToken, Error> {
    let client = BasicClient::new(
        ClientId::new(settings.client_id.clone()),
        Some(ClientSecret::new(settings.client_secret.clone())),
        AuthUrl::new(endpoints::google::AUTH_URL.to_string())?,
        Some(TokenUrl::new(settings.token_url.clone())?),
    )
    .set_auth_type(AuthType::RequestBody);

    // Raw reply from the provider, kept so a rejection can be reported verbatim.
    let mut payload: Option<(u16, String)> = None;
    let result = client
        .exchange_refresh_token(refresh_token)
        .request(|request: HttpRequest| -> Result<HttpResponse, TransportError> {
            let response = transport.send(into_request(request)?)?;
            payload = Some((response.status, response.text()));
            Ok(HttpResponse {
                status_code: StatusCode::from_u16(response.status)
                    .map_err(|e| TransportError::new(e.to_string()))?,
                headers: HeaderMap::new(),
                body: response.body,
            })
        });

    match result {
        Ok(token_response) => Ok(token_response.access_token().clone()),
        Err(RequestTokenError::Request(e)) => Err(Error::AuthFailed(e.to_string())),
        Err(e) => {
            debug!("token exchange failed: {}", e);
            match payload {
                Some((200, body)) => access_token_from_reply(&body).ok_or(Error::AuthFailed(body)),
                Some((_, body)) => Err(Error::AuthFailed(body)),
                None => Err(Error::AuthFailed(e.to_string())),
            }
        }
    }
}

fn access_token_from_reply(body: &str) -> Option<AccessToken> {
    let reply: TokenReply = serde_json::from_str(body).ok()?;
    reply
        .access_token
        .filter(|token| !token.is_empty())
        .map(AccessToken::new)
}

fn into_request(request: HttpRequest) -> Result<Request, TransportError> {
    let method = Method::from_bytes(request.method.as_str().as_bytes())
        .map_err(|e| TransportError::new(e.to_string()))?;
    let headers = request
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    Ok(Request {
        method,
        url: request.url.to_string(),
        headers,
        body: Some(request.body),
    })
}
