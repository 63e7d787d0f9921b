//! reqwest implementation of the backend contract

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::BackendConfig,
    error::{AppError, AppResult},
    models::{Book, BookDraft, BorrowReceipt, BorrowRequest, Student, StudentDraft},
};

use super::{Backend, BookQuery};

/// HTTP client for the library backend
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client from backend configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn list_books_request(&self, query: &BookQuery) -> RequestBuilder {
        let mut request = self.client.get(self.url("/books"));
        if let Some(author) = query.author.as_deref() {
            request = request.query(&[("author", author)]);
        }
        request
    }

    /// Check the status, then decode the body into a typed model.
    ///
    /// Decoding is a separate step from transport so that malformed server
    /// output surfaces as [`AppError::Decode`] instead of propagating untyped
    /// data into the view.
    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check the status of a response whose body is empty.
    async fn expect_success(response: Response) -> AppResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let response = self.list_books_request(query).send().await?;
        Self::decode(response).await
    }

    async fn get_book(&self, id: i32) -> AppResult<Book> {
        let response = self
            .client
            .get(self.url(&format!("/books/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_book(&self, draft: &BookDraft) -> AppResult<Book> {
        let response = self
            .client
            .post(self.url("/books"))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_book(&self, id: i32, draft: &BookDraft) -> AppResult<Book> {
        let response = self
            .client
            .put(self.url(&format!("/books/{}", id)))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/books/{}", id)))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn list_students(&self) -> AppResult<Vec<Student>> {
        let response = self.client.get(self.url("/students")).send().await?;
        Self::decode(response).await
    }

    async fn create_student(&self, draft: &StudentDraft) -> AppResult<Student> {
        let response = self
            .client
            .post(self.url("/students"))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn borrow_book(&self, request: &BorrowRequest) -> AppResult<BorrowReceipt> {
        let response = self
            .client
            .post(self.url("/books/borrow"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn student_books(&self, student_id: i32) -> AppResult<Vec<Book>> {
        let response = self
            .client
            .get(self.url(&format!("/students/{}/books", student_id)))
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn url_joins_path_without_double_slash() {
        let backend = backend();
        assert_eq!(backend.url("/books"), "http://127.0.0.1:8000/books");
        assert_eq!(backend.url("/books/7"), "http://127.0.0.1:8000/books/7");
    }

    #[test]
    fn author_filter_lands_in_query_string() {
        let request = backend()
            .list_books_request(&BookQuery {
                author: Some("Frank Herbert".to_string()),
            })
            .build()
            .unwrap();

        let url = request.url();
        assert_eq!(url.path(), "/books");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("author".to_string(), "Frank Herbert".to_string())]);
    }

    #[test]
    fn unfiltered_list_has_no_query_string() {
        let request = backend()
            .list_books_request(&BookQuery::default())
            .build()
            .unwrap();
        assert_eq!(request.url().query(), None);
    }
}
