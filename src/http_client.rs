use reqwest::Client;
use std::time::Duration;

const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

// pro-football-reference rejects default library agents outright.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/119 Safari/537.36 (+stats-research)";

pub struct HttpClient {
    client: Client,
}

/// Status code and decoded body of one fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` once. Anything other than a literal 200 stops the scrape
    /// here, before any parsing happens.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::HttpStatus(status));
        }

        if let Some(content_type) = response.headers().get("content-type") {
            let content_type_str = content_type.to_str().unwrap_or("");
            if !content_type_str.contains("text/html") {
                return Err(FetchError::InvalidContentType(content_type_str.to_string()));
            }
        }

        if let Some(content_length) = response.content_length() {
            if content_length > MAX_RESPONSE_SIZE as u64 {
                return Err(FetchError::TooLarge(content_length));
            }
        }

        let body = response.text().await?;
        if body.len() > MAX_RESPONSE_SIZE {
            return Err(FetchError::TooLarge(body.len() as u64));
        }

        Ok(FetchedPage { status, body })
    }
}

#[derive(Debug)]
pub enum FetchError {
    HttpStatus(u16),
    InvalidContentType(String),
    TooLarge(u64),
    Request(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::HttpStatus(code) => {
                write!(f, "failed to fetch page, status code: {}", code)
            }
            FetchError::InvalidContentType(ct) => write!(f, "invalid content type: {}", ct),
            FetchError::TooLarge(size) => write!(f, "response too large: {} bytes", size),
            FetchError::Request(e) => write!(f, "request error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}
