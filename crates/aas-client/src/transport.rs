//! Request/response plumbing shared by every resource interface.

use crate::error::{ClientError, StatusError};
use crate::path::ResourcePath;
use aas_client_core::{Page, PagingInfo, QueryParams};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use url::Url;

const JSON: &str = "application/json";

/// HTTP client bound to one service base URL.
#[derive(Clone)]
pub(crate) struct Transport {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub(crate) fn new(client: Client, base_url: &str, bearer_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    fn url(&self, path: &ResourcePath) -> Result<Url, ClientError> {
        let raw = format!("{}{path}", self.base_url);
        Url::parse(&raw).map_err(|e| ClientError::InvalidRequest(format!("{raw}: {e}")))
    }

    /// Build the authorization header if configured.
    fn auth_header(&self) -> Option<String> {
        self.bearer_token.as_ref().map(|t| format!("Bearer {t}"))
    }

    async fn send(
        &self,
        method: Method,
        path: &ResourcePath,
        query: &QueryParams,
        body: Option<Vec<u8>>,
        accept: Option<&str>,
    ) -> Result<Response, ClientError> {
        let url = self.url(path)?;

        tracing::debug!(%method, %url, query = ?query.pairs(), "sending request");

        let mut request = self.client.request(method, url.clone());
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(auth) = self.auth_header() {
            request = request.header(AUTHORIZATION, auth);
        }
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON).body(body);
        }

        request.send().await.map_err(|e| ClientError::Connectivity {
            uri: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Send a request and fail unless the status is one of `expected`.
    pub(crate) async fn exchange(
        &self,
        method: Method,
        path: &ResourcePath,
        query: &QueryParams,
        body: Option<Vec<u8>>,
        expected: &[StatusCode],
    ) -> Result<Response, ClientError> {
        let response = self
            .send(method.clone(), path, query, body, Some(JSON))
            .await?;
        check_status(response, &method, expected).await
    }

    /// GET a JSON resource (200).
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        query: &QueryParams,
    ) -> Result<T, ClientError> {
        let response = self
            .exchange(Method::GET, path, query, None, &[StatusCode::OK])
            .await?;
        read_json(response).await
    }

    /// GET one page of a list resource.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        query: &QueryParams,
        paging: &PagingInfo,
    ) -> Result<Page<T>, ClientError> {
        self.get(path, &query.clone().with_paging(paging)).await
    }

    /// GET every page of a list resource, following cursors until the
    /// server stops returning one. A cursor handed out twice means the
    /// server is cycling and fails with [`ClientError::Parse`].
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        query: &QueryParams,
    ) -> Result<Vec<T>, ClientError> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut paging = PagingInfo::all();
        loop {
            let page: Page<T> = self.get_page(path, query, &paging).await?;
            let next = page.next_paging(&paging);
            items.extend(page.into_result());

            let Some(next) = next else {
                return Ok(items);
            };
            let cursor = next.cursor().unwrap_or_default().to_string();
            if !seen.insert(cursor.clone()) {
                return Err(ClientError::Parse(format!(
                    "{path}: server returned cursor {cursor:?} more than once"
                )));
            }
            tracing::debug!(%path, fetched = items.len(), "following paging cursor");
            paging = next;
        }
    }

    /// GET a binary resource (200), optionally negotiating the media type.
    pub(crate) async fn get_bytes(
        &self,
        path: &ResourcePath,
        query: &QueryParams,
        accept: Option<&str>,
    ) -> Result<Vec<u8>, ClientError> {
        let response = self
            .send(Method::GET, path, query, None, accept)
            .await?;
        let response = check_status(response, &Method::GET, &[StatusCode::OK]).await?;
        let uri = response.url().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Connectivity {
                uri,
                message: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }

    /// POST a new resource (201) and return the server's representation.
    pub(crate) async fn post<B, T>(&self, path: &ResourcePath, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .exchange(
                Method::POST,
                path,
                &QueryParams::new(),
                Some(to_body(body)?),
                &[StatusCode::CREATED],
            )
            .await?;
        read_json(response).await
    }

    /// POST an invocation that answers synchronously (200).
    pub(crate) async fn invoke<B, T>(&self, path: &ResourcePath, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .exchange(
                Method::POST,
                path,
                &QueryParams::new(),
                Some(to_body(body)?),
                &[StatusCode::OK],
            )
            .await?;
        read_json(response).await
    }

    /// POST a request the server accepts for later processing (202) and
    /// return its `Location` header.
    pub(crate) async fn post_accepted<B>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<String, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .exchange(
                Method::POST,
                path,
                &QueryParams::new(),
                Some(to_body(body)?),
                &[StatusCode::ACCEPTED],
            )
            .await?;
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::Parse(format!("{path}: 202 response without Location header"))
            })
    }

    /// PUT a replacement (204).
    pub(crate) async fn put<B>(&self, path: &ResourcePath, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.exchange(
            Method::PUT,
            path,
            &QueryParams::new(),
            Some(to_body(body)?),
            &[StatusCode::NO_CONTENT],
        )
        .await?;
        Ok(())
    }

    /// PATCH a partial update (204).
    pub(crate) async fn patch<B>(
        &self,
        path: &ResourcePath,
        query: &QueryParams,
        body: &B,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.exchange(
            Method::PATCH,
            path,
            query,
            Some(to_body(body)?),
            &[StatusCode::NO_CONTENT],
        )
        .await?;
        Ok(())
    }

    /// DELETE a resource (204).
    pub(crate) async fn delete(&self, path: &ResourcePath) -> Result<(), ClientError> {
        self.exchange(
            Method::DELETE,
            path,
            &QueryParams::new(),
            None,
            &[StatusCode::NO_CONTENT],
        )
        .await?;
        Ok(())
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(body).map_err(|e| ClientError::Serialization(e.to_string()))
}

async fn check_status(
    response: Response,
    method: &Method,
    expected: &[StatusCode],
) -> Result<Response, ClientError> {
    let status = response.status();
    if expected.contains(&status) {
        tracing::debug!(%method, url = %response.url(), status = status.as_u16(), "response");
        return Ok(response);
    }

    let uri = response.url().to_string();
    let body = response.text().await.unwrap_or_default();

    tracing::debug!(%method, %uri, status = status.as_u16(), "unexpected response status");

    Err(ClientError::from_status(StatusError::new(
        method.as_str(),
        uri,
        status.as_u16(),
        body,
    )))
}

/// Deserialize a JSON response body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let uri = response.url().to_string();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::Connectivity {
            uri: uri.clone(),
            message: e.to_string(),
        })?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(format!("{uri}: {e}")))
}
