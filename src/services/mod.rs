//! 业务逻辑服务模块
//!
//! 封装股票列表的获取逻辑

pub mod stock_service;    // 股票列表数据源

pub use stock_service::{HttpStockSource, StockSource};
