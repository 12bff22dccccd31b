//! 数值格式化
//!
//! 缺失值显示为 "-"，数值按固定小数位显示（0 也正常显示为 "0.00"）

use rust_decimal::{Decimal, RoundingStrategy};

use super::{Align, Cell, TableRow};
use crate::models::StockRecord;

/// 缺失值的占位符
pub const MISSING: &str = "-";

/// 默认小数位数
pub const DEFAULT_DECIMALS: usize = 2;

/// 增长率列的小数位数
const GROWTH_DECIMALS: usize = 1;

/// `Decimal` 支持的最大小数位数
const MAX_DECIMAL_SCALE: usize = 28;

/// 按固定小数位格式化数值，缺失时返回 "-"
///
/// 恰好处于中点的值向远离零的方向舍入（7.25 → "7.3"，-2.125 → "-2.13"），
/// 与网页版 `toFixed` 一致。负零按零显示；非有限值（NaN、无穷大）不会出现在
/// JSON 响应中，直接交给标准格式化输出
pub fn fmt(value: Option<f64>, decimals: usize) -> String {
    let v = match value {
        Some(v) if v == 0.0 => 0.0,
        Some(v) => v,
        None => return MISSING.to_string(),
    };
    // 按二进制值的精确展开舍入，只有真正的中点才会进位
    match Decimal::from_f64_retain(v) {
        Some(exact) if decimals <= MAX_DECIMAL_SCALE => {
            let scale = decimals as u32;
            let mut rounded =
                exact.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(scale);
            rounded.to_string()
        }
        _ => format!("{:.*}", decimals, v),
    }
}

/// 原样显示数值（不做小数位处理），缺失时返回 "-"
///
/// 与网页版的数字转文本一致：绝对值不小于 1e21 或小于 1e-6 时使用指数形式
pub fn fmt_raw(value: Option<f64>) -> String {
    match value {
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v.is_finite() && (v.abs() >= 1e21 || v.abs() < 1e-6) => {
            let text = format!("{v:e}");
            match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
                _ => text,
            }
        }
        Some(v) => v.to_string(),
        None => MISSING.to_string(),
    }
}

/// 名称缺失时显示为空
pub fn fmt_name(name: Option<&str>) -> String {
    name.unwrap_or_default().to_string()
}

fn left(text: String) -> Cell {
    Cell { text, align: Align::Left }
}

fn right(text: String) -> Cell {
    Cell { text, align: Align::Right }
}

/// 把一条股票记录转换为表格行
pub fn stock_row(record: &StockRecord) -> TableRow {
    TableRow {
        cells: [
            left(fmt_name(record.name.as_deref())),
            right(fmt(record.current_price, DEFAULT_DECIMALS)),
            right(fmt(record.growth_5y_percent, GROWTH_DECIMALS)),
            right(fmt(record.eps_in_5y, DEFAULT_DECIMALS)),
            right(fmt_raw(record.target_pe_ratio)),
            right(fmt(record.price_in_5y, DEFAULT_DECIMALS)),
            right(fmt(record.fair_value, DEFAULT_DECIMALS)),
            right(fmt(record.price_diff, DEFAULT_DECIMALS)),
            right(fmt(record.potential_percent, DEFAULT_DECIMALS)),
        ],
    }
}
