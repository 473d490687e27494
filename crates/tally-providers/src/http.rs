//! Translations served by the Tally REST API.
//!
//! `GET {base}/translations/` lists languages, `GET {base}/translations/{lang}/`
//! returns one dictionary. Requests carry the bearer token when one is set.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tally_core::{
    config::ApiConfig,
    error::TallyError,
    language::LanguageCode,
    payload::{LanguageCatalog, TranslationsPayload},
    traits::TranslationSource,
};
use tracing::debug;

/// HTTP source backed by the translations API.
pub struct HttpTranslationSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpTranslationSource {
    /// Create with an explicit request timeout.
    pub fn new(base_url: String, token: String, timeout: Duration) -> Result<Self, TallyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TallyError::Fetch(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Create from config values.
    pub fn from_config(cfg: &ApiConfig) -> Result<Self, TallyError> {
        Self::new(
            cfg.base_url.clone(),
            cfg.token.clone(),
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/translations/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn get_text(&self, url: &str) -> Result<String, TallyError> {
        debug!("translations api: GET {url}");
        let mut req = self.client.get(url);
        if !self.token.is_empty() {
            req = req.header("Authorization", format!("Bearer {}", self.token));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| TallyError::Fetch(format!("translations request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(TallyError::Fetch(format!(
                "translations api returned {status}: {text}"
            )));
        }

        resp.text()
            .await
            .map_err(|e| TallyError::Fetch(format!("failed to read translations response: {e}")))
    }
}

/// The catalog comes either bare or wrapped in `{"languages": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Wrapped { languages: LanguageCatalog },
    Bare(LanguageCatalog),
}

pub(crate) fn parse_catalog(body: &str) -> Result<LanguageCatalog, TallyError> {
    let parsed: CatalogBody = serde_json::from_str(body)?;
    Ok(match parsed {
        CatalogBody::Wrapped { languages } => languages,
        CatalogBody::Bare(catalog) => catalog,
    })
}

#[async_trait]
impl TranslationSource for HttpTranslationSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn available_languages(&self) -> Result<LanguageCatalog, TallyError> {
        let body = self.get_text(&self.endpoint("")).await?;
        parse_catalog(&body)
    }

    async fn fetch(&self, language: LanguageCode) -> Result<TranslationsPayload, TallyError> {
        let body = self.get_text(&self.endpoint(&format!("{language}/"))).await?;
        let payload: TranslationsPayload = serde_json::from_str(&body)?;
        debug!(
            "translations api: '{language}' has {} namespaces",
            payload.translations.len()
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned response and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });
        (base, handle)
    }

    fn source(base: String, token: &str) -> HttpTranslationSource {
        HttpTranslationSource::new(base, token.to_string(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let src = source("http://localhost:8000/api/".to_string(), "");
        assert_eq!(src.endpoint(""), "http://localhost:8000/api/translations/");
        assert_eq!(src.endpoint("es/"), "http://localhost:8000/api/translations/es/");
    }

    #[test]
    fn test_from_config() {
        let cfg = ApiConfig {
            enabled: true,
            token: "abc".to_string(),
            ..Default::default()
        };
        let src = HttpTranslationSource::from_config(&cfg).unwrap();
        assert_eq!(src.name(), "http");
        assert_eq!(src.token, "abc");
    }

    #[test]
    fn test_parse_catalog_shapes() {
        let bare = parse_catalog(r#"{"en": "English", "es": "Español"}"#).unwrap();
        assert_eq!(bare.len(), 2);
        let wrapped = parse_catalog(r#"{"languages": {"pt": "Português"}}"#).unwrap();
        assert_eq!(wrapped.get("pt").map(String::as_str), Some("Português"));
        assert!(parse_catalog("[1, 2]").is_err());
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_and_parses_payload() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"language":"es","translations":{"common":{"save":"Guardar"}},"stats":{"total_keys":1}}"#,
        )
        .await;
        let payload = source(base, "secret").fetch(LanguageCode::Es).await.unwrap();
        assert_eq!(payload.translations.lookup("common.save"), Ok("Guardar"));
        assert_eq!(payload.stats["total_keys"], 1);

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /api/translations/es/ "));
        assert!(request.contains("authorization: bearer secret"));
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_error() {
        let (base, server) = serve_once("401 Unauthorized", r#"{"detail":"bad token"}"#).await;
        let err = source(base, "").fetch(LanguageCode::Pt).await.unwrap_err();
        match err {
            TallyError::Fetch(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("bad token"));
            }
            other => panic!("unexpected error: {other}"),
        }
        let request = server.await.unwrap().to_lowercase();
        assert!(!request.contains("authorization"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let (base, server) = serve_once("200 OK", "not json").await;
        let err = source(base, "").available_languages().await.unwrap_err();
        assert!(matches!(err, TallyError::Serialization(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);
        let err = source(base, "").fetch(LanguageCode::En).await.unwrap_err();
        assert!(matches!(err, TallyError::Fetch(_)));
    }
}
