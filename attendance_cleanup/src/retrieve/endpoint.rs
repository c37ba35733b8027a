use url::Url;

pub trait Endpoint {
    fn url(&self) -> Result<Url, url::ParseError>;
}

pub struct BasicEndpoint {
    pub base_url: String,
}

impl Endpoint for BasicEndpoint {
    fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}

/// A list endpoint read one bounded page at a time.
pub struct PagedEndpoint {
    pub base_url: String,
    pub page_size: u32,
}

impl Endpoint for PagedEndpoint {
    fn url(&self) -> Result<Url, url::ParseError> {
        let params = [("pageSize", self.page_size.to_string())];
        Url::parse_with_params(&self.base_url, &params)
    }
}
