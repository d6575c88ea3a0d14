use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use trivia_core::{CategoryId, FetchRequest, QuestionId, QuestionPage};
use trivia_logging::{trivia_debug, trivia_info, trivia_warn};
use url::Url;

use crate::settings::parse_base_url;
use crate::wire::{QuestionPageDto, SearchBody};
use crate::{FailureKind, FetchError, GatewaySettings};

/// The question API as seen from the browsing state machine.
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// `GET /questions?page=<n>`
    async fn list_questions(&self, page: u32) -> Result<QuestionPage, FetchError>;

    /// `GET /categories/<id>/questions?page=<n>`
    async fn list_by_category(
        &self,
        category_id: CategoryId,
        page: u32,
    ) -> Result<QuestionPage, FetchError>;

    /// `POST /questions?page=<n>` with `{"search_term": term}`.
    async fn search(&self, term: &str, page: u32) -> Result<QuestionPage, FetchError>;

    /// `DELETE /questions/<id>`
    async fn delete_question(&self, question_id: QuestionId) -> Result<(), FetchError>;

    /// Runs whichever read operation `request` names.
    async fn fetch(&self, request: &FetchRequest) -> Result<QuestionPage, FetchError> {
        match request {
            FetchRequest::List { page } => self.list_questions(*page).await,
            FetchRequest::ByCategory { category_id, page } => {
                self.list_by_category(*category_id, *page).await
            }
            FetchRequest::Search { term, page } => self.search(term, *page).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: &GatewaySettings) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&settings.base_url)?;
        // The search endpoint may live on another origin and expects its cookies.
        let mut builder = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .cookie_store(true);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str, page: Option<u32>) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if let Some(page) = page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&SearchBody<'_>>,
    ) -> Result<reqwest::Response, FetchError> {
        trivia_info!("{} {}", method, url);
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|err| {
            let err = map_reqwest_error(err);
            trivia_warn!("{} {} failed: {}", method, url, err);
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            trivia_warn!("{} {} returned {}", method, url, status);
            return Err(status_error(status));
        }
        Ok(response)
    }

    async fn read_page(
        &self,
        response: reqwest::Response,
        with_directory: bool,
    ) -> Result<QuestionPage, FetchError> {
        let dto: QuestionPageDto = response.json().await.map_err(|err| {
            trivia_warn!("unreadable question page: {}", err);
            map_reqwest_error(err)
        })?;
        let page = dto.into_page(with_directory);
        trivia_debug!(
            "received {} of {} questions",
            page.questions.len(),
            page.total_questions
        );
        Ok(page)
    }
}

#[async_trait]
impl QuestionApi for ReqwestGateway {
    async fn list_questions(&self, page: u32) -> Result<QuestionPage, FetchError> {
        let url = self.endpoint("questions", Some(page))?;
        let response = self.send(Method::GET, url, None).await?;
        self.read_page(response, true).await
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
        page: u32,
    ) -> Result<QuestionPage, FetchError> {
        let url = self.endpoint(&format!("categories/{category_id}/questions"), Some(page))?;
        let response = self.send(Method::GET, url, None).await?;
        self.read_page(response, false).await
    }

    async fn search(&self, term: &str, page: u32) -> Result<QuestionPage, FetchError> {
        let url = self.endpoint("questions", Some(page))?;
        let body = SearchBody { search_term: term };
        let response = self.send(Method::POST, url, Some(&body)).await?;
        self.read_page(response, false).await
    }

    async fn delete_question(&self, question_id: QuestionId) -> Result<(), FetchError> {
        let url = self.endpoint(&format!("questions/{question_id}"), None)?;
        // Any body the server sends back is informational only.
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }
}

fn status_error(status: StatusCode) -> FetchError {
    FetchError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
