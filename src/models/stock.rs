//! 股票数据模型
//!
//! 定义后端 `/api/stocks/` 返回的股票记录结构

use serde::{Deserialize, Serialize};

/// 股票估值记录
///
/// 每个字段都可以单独为空，后端未给出的字段按缺失处理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// 数据库 ID（不显示）
    #[serde(default)]
    pub id: Option<i64>,
    /// 股票代码（不显示）
    #[serde(default)]
    pub symbol: Option<String>,
    /// 公司名称
    #[serde(default)]
    pub name: Option<String>,
    /// 当前价格
    #[serde(default)]
    pub current_price: Option<f64>,
    /// 每股收益（不显示）
    #[serde(default)]
    pub eps: Option<f64>,
    /// 市盈率（不显示）
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    /// 过去 5 年平均年增长率（百分比）
    #[serde(default)]
    pub growth_5y_percent: Option<f64>,
    /// 5 年后的预估每股收益
    #[serde(default)]
    pub eps_in_5y: Option<f64>,
    /// 目标市盈率，原样显示
    #[serde(default)]
    pub target_pe_ratio: Option<f64>,
    /// 5 年后的预估价格
    #[serde(default)]
    pub price_in_5y: Option<f64>,
    /// 公允价值
    #[serde(default)]
    pub fair_value: Option<f64>,
    /// 当前价格与公允价值的差额
    #[serde(default)]
    pub price_diff: Option<f64>,
    /// 上涨潜力（百分比）
    #[serde(default)]
    pub potential_percent: Option<f64>,
    /// 备注（不显示）
    #[serde(default)]
    pub comment: Option<String>,
    /// 最后更新时间，原样保留后端的文本
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// 解析 `/api/stocks/` 的响应体
pub fn decode_stock_list(body: &[u8]) -> serde_json::Result<Vec<StockRecord>> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试空值与缺失字段
    #[test]
    fn test_decode_null_and_missing_fields() {
        let body = br#"[{"name":"Acme","current_price":10,"eps_in_5y":null}]"#;
        let records = decode_stock_list(body).unwrap();

        assert_eq!(records.len(), 1);
        let acme = &records[0];
        assert_eq!(acme.name.as_deref(), Some("Acme"));
        assert_eq!(acme.current_price, Some(10.0));
        assert_eq!(acme.eps_in_5y, None);
        assert_eq!(acme.fair_value, None);
    }

    /// 测试后端完整记录（包含不显示的字段）
    #[test]
    fn test_decode_full_backend_record() {
        let body = serde_json::json!([{
            "id": 7,
            "symbol": "SAP",
            "name": "SAP SE",
            "current_price": 180.5,
            "eps": 5.1,
            "pe_ratio": 35.4,
            "growth_5y_percent": 9.0,
            "eps_in_5y": 7.85,
            "target_pe_ratio": 25,
            "price_in_5y": 196.2,
            "fair_value": 121.8,
            "price_diff": -58.7,
            "potential_percent": -32.5,
            "comment": null,
            "last_updated": "2024-05-01T10:00:00",
            "currency": "EUR"
        }]);
        let records = decode_stock_list(body.to_string().as_bytes()).unwrap();

        assert_eq!(records[0].id, Some(7));
        assert_eq!(records[0].symbol.as_deref(), Some("SAP"));
        assert_eq!(records[0].target_pe_ratio, Some(25.0));
        assert_eq!(records[0].last_updated.as_deref(), Some("2024-05-01T10:00:00"));
    }

    /// 测试响应顺序保持不变
    #[test]
    fn test_decode_keeps_order() {
        let body = br#"[{"name":"B"},{"name":"A"},{"name":"C"}]"#;
        let names: Vec<_> = decode_stock_list(body)
            .unwrap()
            .into_iter()
            .map(|r| r.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    /// 测试格式错误的响应
    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(decode_stock_list(b"<html>502</html>").is_err());
        assert!(decode_stock_list(br#"{"name":"Acme"}"#).is_err());
        assert!(decode_stock_list(br#"[{"current_price":"10"}]"#).is_err());
    }
}
