//! 股票表格组件
//!
//! 加载器只依赖下面三个界面接口（按钮、表格、提示框），
//! 终端和 HTML 两种宿主各自实现这些接口

pub mod format;
pub mod html;
pub mod loader;
pub mod terminal;

pub use format::stock_row;
pub use html::HtmlTable;
pub use loader::{LoadOutcome, StockTableLoader};
pub use terminal::{ConsoleNotifier, ConsoleTrigger, TerminalTable};

/// 空闲状态下按钮的文字
pub const IDLE_LABEL: &str = "Aktien laden";
/// 加载中按钮的文字
pub const LOADING_LABEL: &str = "Lade …";
/// 提示框中错误信息的前缀
pub const ERROR_PREFIX: &str = "Fehler beim Laden: ";

/// 表头，顺序与 [`stock_row`] 生成的单元格一致
pub const COLUMNS: [&str; 9] = [
    "Name",
    "Kurs",
    "Wachstum 5J %",
    "EPS in 5J",
    "Ziel-KGV",
    "Kurs in 5J",
    "Fairer Wert",
    "Differenz",
    "Potenzial %",
];

/// 单元格对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// 表格单元格
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub align: Align,
}

/// 一行股票数据，固定 9 个单元格
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: [Cell; 9],
}

impl TableRow {
    /// 各单元格文字
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// 触发加载的按钮
pub trait TriggerControl {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
    fn set_label(&mut self, label: &str);
}

/// 股票表格（表体 + 可见性）
pub trait StockTable {
    /// 清空表体中的所有行
    fn clear_rows(&mut self);
    fn append_row(&mut self, row: TableRow);
    /// 显示表格，首次加载成功前表格是隐藏的
    fn show(&mut self);
}

/// 阻塞式提示框
pub trait Notifier {
    fn alert(&mut self, message: &str);
}
