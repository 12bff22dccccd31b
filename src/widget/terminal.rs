//! 终端宿主
//!
//! 回车相当于点击按钮，加载中显示 spinner，结果以对齐的文本表格输出

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::{Align, Notifier, StockTable, TableRow, TriggerControl, COLUMNS, IDLE_LABEL};

/// 终端中的“按钮”
///
/// 禁用期间显示带按钮文字的 spinner
pub struct ConsoleTrigger {
    disabled: bool,
    label: String,
    spinner: Option<ProgressBar>,
    animate: bool,
}

impl ConsoleTrigger {
    pub fn new(animate: bool) -> Self {
        Self {
            disabled: false,
            label: IDLE_LABEL.to_string(),
            spinner: None,
            animate,
        }
    }

    /// 交互模式下的输入提示
    pub fn prompt(&self) -> String {
        format!("[Enter] {} · [q] Beenden", self.label)
    }

    fn start_spinner(&mut self) {
        if !self.animate || self.spinner.is_some() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(self.label.clone());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl TriggerControl for ConsoleTrigger {
    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
        if let Some(spinner) = &self.spinner {
            spinner.set_message(self.label.clone());
        }
    }
}

/// 把提示信息写到终端
///
/// 终端里没有模态提示框，写到 stderr 的一行即是提示：交互模式下程序停在
/// 下一次输入提示处，直到用户再次按回车；`--once` 模式下随后以失败状态退出
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl ConsoleNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}") {
            log::error!("提示信息输出失败: {e}");
        }
    }
}

/// 文本表格
#[derive(Debug, Clone, Default)]
pub struct TerminalTable {
    rows: Vec<TableRow>,
    visible: bool,
}

impl TerminalTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// 渲染为对齐的文本；隐藏时返回空字符串
    pub fn render(&self) -> String {
        if !self.visible {
            return String::new();
        }

        let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let header: Vec<String> = COLUMNS
            .iter()
            .zip(&widths)
            .map(|(name, &w)| format!("{name:<w$}"))
            .collect();
        lines.push(header.join(" | "));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| match cell.align {
                    Align::Left => format!("{:<w$}", cell.text),
                    Align::Right => format!("{:>w$}", cell.text),
                })
                .collect();
            lines.push(cells.join(" | "));
        }

        let mut out: String = lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}

impl StockTable for TerminalTable {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    fn show(&mut self) {
        self.visible = true;
    }
}
