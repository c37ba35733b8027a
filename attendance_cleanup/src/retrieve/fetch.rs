use log::debug;

use super::authentication::Authentication;
use super::endpoint::Endpoint;
use super::transport::{Method, Request, Response, Transport};
use crate::error::Error;

fn send<T: Transport, E: Endpoint, A: Authentication>(
    transport: &T,
    method: Method,
    endpoint: &E,
    authentication: &A,
) -> Result<Response, Error> {
    let url = endpoint.url()?;
    debug!("url: {}", url);
    let request = authentication.apply(Request::new(method, url.as_str()));
    Ok(transport.send(request)?)
}

pub fn get<T: Transport, E: Endpoint, A: Authentication>(
    transport: &T,
    endpoint: &E,
    authentication: &A,
) -> Result<Response, Error> {
    send(transport, Method::GET, endpoint, authentication)
}

pub fn delete<T: Transport, E: Endpoint, A: Authentication>(
    transport: &T,
    endpoint: &E,
    authentication: &A,
) -> Result<Response, Error> {
    send(transport, Method::DELETE, endpoint, authentication)
}
