//! 股票列表数据源
//!
//! 对接后端 `GET /api/stocks/`，返回按后端顺序排列的股票记录

use futures::future::LocalBoxFuture;
use reqwest::Client;
use url::Url;

use crate::config::AppConfig;
use crate::error::LoadError;
use crate::models::{decode_stock_list, StockRecord};

/// 股票列表数据源
///
/// 加载器只通过这个接口获取数据，测试中可以替换为内存数据源
pub trait StockSource {
    fn fetch_stocks(&self) -> LocalBoxFuture<'_, Result<Vec<StockRecord>, LoadError>>;
}

/// 基于 HTTP 的数据源
pub struct HttpStockSource {
    client: Client,
    url: Url,
}

impl HttpStockSource {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// 根据配置创建客户端和接口地址
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self::new(client, config.stocks_url()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn get_stock_list(&self) -> Result<Vec<StockRecord>, LoadError> {
        log::debug!("请求股票列表: {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Server(status.as_u16()));
        }

        // 先读取完整响应体再解析，区分网络错误和格式错误
        let body = response.bytes().await?;
        Ok(decode_stock_list(&body)?)
    }
}

impl StockSource for HttpStockSource {
    fn fetch_stocks(&self) -> LocalBoxFuture<'_, Result<Vec<StockRecord>, LoadError>> {
        Box::pin(self.get_stock_list())
    }
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use std::net::TcpListener;

    /// 启动一个模拟后端，`/api/stocks/` 返回固定的状态码和响应体
    fn spawn_backend(status: u16, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = HttpServer::new(move || {
            App::new().route(
                "/api/stocks/",
                web::get().to(move || async move {
                    HttpResponse::build(actix_web::http::StatusCode::from_u16(status).unwrap())
                        .content_type("application/json")
                        .body(body)
                }),
            )
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        actix_web::rt::spawn(server);

        Url::parse(&format!("http://127.0.0.1:{port}/api/stocks/")).unwrap()
    }

    fn source(url: Url) -> HttpStockSource {
        HttpStockSource::new(Client::new(), url)
    }

    /// 测试成功获取股票列表
    #[actix_web::test]
    async fn test_fetch_success() {
        let url = spawn_backend(
            200,
            r#"[{"name":"Acme","current_price":10},{"name":"Globex","current_price":null}]"#,
        );

        let records = source(url).fetch_stocks().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Acme"));
        assert_eq!(records[1].name.as_deref(), Some("Globex"));
        assert_eq!(records[1].current_price, None);
    }

    /// 测试空列表
    #[actix_web::test]
    async fn test_fetch_empty_list() {
        let url = spawn_backend(200, "[]");
        assert!(source(url).fetch_stocks().await.unwrap().is_empty());
    }

    /// 测试非 2xx 状态码
    #[actix_web::test]
    async fn test_fetch_server_error() {
        let url = spawn_backend(500, r#"{"detail":"Internal Server Error"}"#);

        let err = source(url).fetch_stocks().await.unwrap_err();
        assert!(matches!(err, LoadError::Server(500)));
        assert_eq!(err.to_string(), "Server 500");
    }

    /// 测试 404 同样按服务器错误处理
    #[actix_web::test]
    async fn test_fetch_not_found() {
        let url = spawn_backend(404, r#"{"detail":"Not Found"}"#);
        let err = source(url).fetch_stocks().await.unwrap_err();
        assert!(matches!(err, LoadError::Server(404)));
    }

    /// 测试响应体格式错误
    #[actix_web::test]
    async fn test_fetch_decode_error() {
        let url = spawn_backend(200, r#"{"stocks":[]}"#);
        let err = source(url).fetch_stocks().await.unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    /// 测试连接失败
    #[actix_web::test]
    async fn test_fetch_network_error() {
        // 占用一个端口后立即释放，保证没有服务在监听
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{port}/api/stocks/")).unwrap();

        let err = source(url).fetch_stocks().await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
        assert_eq!(err.kind(), "network");
    }

    /// 测试根据配置生成接口地址
    #[test]
    fn test_from_config_builds_stocks_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "http://aktien.local:8000".to_string();

        let source = HttpStockSource::from_config(&config).unwrap();
        assert_eq!(source.url().as_str(), "http://aktien.local:8000/api/stocks/");
    }
}
