//! HTTP access to the todo API.
//!
//! [`TodoApi`] is the seam the board depends on; [`HttpTodoApi`] implements it
//! with `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{DeleteConfirmation, Todo, TodoInput};

/// Failures talking to the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {message}")]
    Transport {
        /// Underlying transport error.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the status reason.
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {message}")]
    Decode {
        /// Decoder error.
        message: String,
    },
}

/// Operations the client performs against the API.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// All todos, newest first.
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;

    /// Create a todo and return the stored row.
    async fn create(&self, input: &TodoInput) -> Result<Todo, ApiError>;

    /// Overwrite the todo `id` and return the stored row.
    async fn update(&self, id: i32, input: &TodoInput) -> Result<Todo, ApiError>;

    /// Delete the todo `id`.
    async fn delete(&self, id: i32) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// [`TodoApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    /// Client for the API served at `base_url`, e.g. `http://localhost:5000`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Root of the REST surface.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: i32) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }
}

fn transport(err: &reqwest::Error) -> ApiError {
    ApiError::Transport {
        message: err.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .map_or_else(|_| status.to_string(), |body| body.message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response.json::<T>().await.map_err(|err| ApiError::Decode {
        message: err.to_string(),
    })
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .client
            .get(self.todos_url())
            .send()
            .await
            .map_err(|err| transport(&err))?;
        decode(response).await
    }

    async fn create(&self, input: &TodoInput) -> Result<Todo, ApiError> {
        let response = self
            .client
            .post(self.todos_url())
            .json(input)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        decode(response).await
    }

    async fn update(&self, id: i32, input: &TodoInput) -> Result<Todo, ApiError> {
        let response = self
            .client
            .put(self.todo_url(id))
            .json(input)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        decode(response).await
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.todo_url(id))
            .send()
            .await
            .map_err(|err| transport(&err))?;
        decode::<DeleteConfirmation>(response).await.map(drop)
    }
}
