//! A `Transport` that replays canned responses in order and keeps every
//! request it was handed, so tests can count calls without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{Method, Request, Response, Transport, TransportError};

#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<Response, TransportError>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(Response {
            status,
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: &Method) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|request| &request.method == method)
            .count()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let next = self.responses.borrow_mut().pop_front();
        let url = request.url.clone();
        let method = request.method.clone();
        self.requests.borrow_mut().push(request);
        match next {
            Some(response) => response,
            None => panic!("no response scripted for {} {}", method, url),
        }
    }
}
