//! HTML 宿主
//!
//! 生成 `<table id="stocksTable">` 标记，行和单元格的样式类与网页版一致

use std::fmt::Write;

use super::{Align, StockTable, TableRow, COLUMNS};

/// 表格元素 ID
pub const TABLE_ID: &str = "stocksTable";

const ROW_CLASS: &str = "hover:bg-gray-100 text-sm";
const CELL_CLASS: &str = "border p-2";
const CELL_CLASS_RIGHT: &str = "border p-2 text-right";

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 以 HTML 标记保存表体的表格
#[derive(Debug, Clone)]
pub struct HtmlTable {
    rows: Vec<String>,
    hidden: bool,
}

impl Default for HtmlTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlTable {
    /// 新建的表格是隐藏的
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            hidden: true,
        }
    }

    /// 表体标记
    pub fn tbody(&self) -> String {
        let mut out = String::from("<tbody>\n");
        for row in &self.rows {
            out.push_str(row);
        }
        out.push_str("</tbody>");
        out
    }

    /// 完整的表格标记（表头 + 表体）
    pub fn render(&self) -> String {
        let class = if self.hidden { " class=\"hidden\"" } else { "" };
        let mut out = format!("<table id=\"{TABLE_ID}\"{class}>\n<thead>\n<tr>\n");
        for column in COLUMNS {
            let _ = writeln!(out, "  <th class=\"{CELL_CLASS}\">{}</th>", escape_html(column));
        }
        out.push_str("</tr>\n</thead>\n");
        out.push_str(&self.tbody());
        out.push_str("\n</table>\n");
        out
    }
}

fn render_row(row: &TableRow) -> String {
    let mut out = format!("<tr class=\"{ROW_CLASS}\">\n");
    for cell in &row.cells {
        let class = match cell.align {
            Align::Left => CELL_CLASS,
            Align::Right => CELL_CLASS_RIGHT,
        };
        let _ = writeln!(out, "  <td class=\"{class}\">{}</td>", escape_html(&cell.text));
    }
    out.push_str("</tr>\n");
    out
}

impl StockTable for HtmlTable {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.rows.push(render_row(&row));
    }

    fn show(&mut self) {
        self.hidden = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockRecord;
    use crate::widget::stock_row;

    fn acme() -> StockRecord {
        StockRecord {
            name: Some("Acme".to_string()),
            current_price: Some(10.0),
            potential_percent: Some(0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_table_is_hidden() {
        let table = HtmlTable::new();
        assert!(table.hidden);
        assert!(table.render().starts_with("<table id=\"stocksTable\" class=\"hidden\">"));
        assert_eq!(table.tbody(), "<tbody>\n</tbody>");
    }

    #[test]
    fn test_row_markup() {
        let mut table = HtmlTable::new();
        table.append_row(stock_row(&acme()));
        table.show();

        let html = table.render();
        assert!(html.starts_with("<table id=\"stocksTable\">"));
        assert!(html.contains("<tr class=\"hover:bg-gray-100 text-sm\">"));
        assert!(html.contains("<td class=\"border p-2\">Acme</td>"));
        assert!(html.contains("<td class=\"border p-2 text-right\">10.00</td>"));
        assert!(html.contains("<td class=\"border p-2 text-right\">0.00</td>"));
        assert_eq!(html.matches("<td ").count(), 9);
        assert_eq!(html.matches("<th ").count(), 9);
    }

    #[test]
    fn test_clear_rows_replaces_body() {
        let mut table = HtmlTable::new();
        table.append_row(stock_row(&acme()));
        table.append_row(stock_row(&acme()));
        table.clear_rows();
        table.append_row(stock_row(&StockRecord::default()));

        assert_eq!(table.rows.len(), 1);
        assert!(table.tbody().contains("<td class=\"border p-2\"></td>"));
    }

    #[test]
    fn test_name_is_escaped() {
        let mut table = HtmlTable::new();
        table.append_row(stock_row(&StockRecord {
            name: Some("<script>alert('x')</script> & Co".to_string()),
            ..Default::default()
        }));

        let body = table.tbody();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; Co"));
    }
}
