pub mod authentication;
pub mod endpoint;
pub mod fetch;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;
