//! HTTP implementation of [`ItemApi`] over `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::{ApiError, ApiResult, ItemApi};
use crate::config::{ApiConfig, ConfigError};
use crate::models::{Item, ItemId, NewItem};

#[derive(Debug, Clone)]
pub struct HttpItemApi {
    client: Client,
    collection_url: Url,
}

impl HttpItemApi {
    /// Fails if the configured base address is not a usable URL.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: Client::new(),
            collection_url: config.collection_url()?,
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.collection_url.as_str().trim_end_matches('/'), id)
    }
}

/// Map non-2xx responses to [`ApiError::Rejected`]
fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Rejected { status: status.as_u16() })
    }
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let response = self.client.get(self.collection_url.clone()).send().await?;
        let body = check_status(response)?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_item(&self, item: &NewItem) -> ApiResult<()> {
        let response = self
            .client
            .post(self.collection_url.clone())
            .json(item)
            .send()
            .await?;
        check_status(response).map(drop)
    }

    async fn delete_item(&self, id: ItemId) -> ApiResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn api_for(base_url: &str) -> HttpItemApi {
        HttpItemApi::new(&ApiConfig { base_url: base_url.to_string(), ..ApiConfig::default() })
            .expect("valid base url")
    }

    /// Read one request: headers plus `content-length` bytes of body
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(buf).expect("utf-8 request")
    }

    /// Answer a single request with `status` and `body`; yields the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (HttpItemApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            let _ = socket.shutdown().await;
            request
        });
        (api_for(&base), handle)
    }

    #[test]
    fn test_item_url() {
        let api = HttpItemApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(api.collection_url().as_str(), "http://localhost:3000/items");
        assert_eq!(api.item_url(1), "http://localhost:3000/items/1");
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = ApiConfig { base_url: "::".into(), ..ApiConfig::default() };
        assert!(HttpItemApi::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_list_items_decodes_collection() {
        let (api, server) = serve_once("200 OK", r#"[{"id":1,"name":"milk"},{"id":2,"name":"eggs"}]"#).await;

        let items = api.list_items().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /items HTTP/1.1\r\n"));
        assert_eq!(
            items,
            vec![Item { id: 1, name: "milk".into() }, Item { id: 2, name: "eggs".into() }]
        );
    }

    #[tokio::test]
    async fn test_list_items_non_json_body_is_decode_error() {
        let (api, server) = serve_once("200 OK", "<html>oops</html>").await;

        let result = api.list_items().await;
        server.await.unwrap();

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_create_item_posts_json_body() {
        let (api, server) = serve_once("201 Created", r#"{"id":3,"name":"eggs"}"#).await;

        api.create_item(&NewItem { name: "eggs".into() }).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /items HTTP/1.1\r\n"));
        assert!(request.to_ascii_lowercase().contains("\r\ncontent-type: application/json\r\n"));
        assert!(request.ends_with("\r\n\r\n{\"name\":\"eggs\"}"));
    }

    #[tokio::test]
    async fn test_create_item_bad_request_is_rejected() {
        let (api, server) = serve_once("400 Bad Request", r#"{"error":"name required"}"#).await;

        let result = api.create_item(&NewItem { name: "eggs".into() }).await;
        server.await.unwrap();

        assert!(matches!(result, Err(ApiError::Rejected { status: 400 })));
    }

    #[tokio::test]
    async fn test_delete_item_targets_item_path() {
        let (api, server) = serve_once("200 OK", "{}").await;

        api.delete_item(7).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("DELETE /items/7 HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_delete_item_not_found_is_rejected() {
        let (api, server) = serve_once("404 Not Found", "{}").await;

        let result = api.delete_item(7).await;
        server.await.unwrap();

        assert!(matches!(result, Err(ApiError::Rejected { status: 404 })));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let result = api_for(&base).list_items().await;

        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
