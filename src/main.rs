//! Aktien-Tabelle
//!
//! 从后端 `/api/stocks/` 加载股票估值列表，以表格形式展示
//! 支持终端文本表格和 HTML 两种输出

mod cli;     // 命令行参数
mod config;  // 配置加载
mod error;   // 加载错误
mod models;  // 数据模型定义
mod services; // 数据获取
mod widget;  // 表格组件

use std::fs;
use std::io::{IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{Cli, Format};
use crate::config::{AppConfig, ConfigSource};
use crate::services::HttpStockSource;
use crate::widget::{
    ConsoleNotifier, ConsoleTrigger, HtmlTable, LoadOutcome, StockTable, StockTableLoader,
    TableRow, TerminalTable,
};

/// 按输出格式选择的表格宿主
enum TableView {
    Terminal(TerminalTable),
    Html(HtmlTable),
}

impl TableView {
    fn new(format: Format) -> Self {
        match format {
            Format::Table => TableView::Terminal(TerminalTable::new()),
            Format::Html => TableView::Html(HtmlTable::new()),
        }
    }

    fn render(&self) -> String {
        match self {
            TableView::Terminal(table) => {
                let mut out = table.render();
                out.push_str(&format!(
                    "\nStand: {} · {} Aktien\n",
                    chrono::Local::now().format("%d.%m.%Y %H:%M:%S"),
                    table.rows().len()
                ));
                out
            }
            TableView::Html(table) => table.render(),
        }
    }
}

impl StockTable for TableView {
    fn clear_rows(&mut self) {
        match self {
            TableView::Terminal(table) => table.clear_rows(),
            TableView::Html(table) => table.clear_rows(),
        }
    }

    fn append_row(&mut self, row: TableRow) {
        match self {
            TableView::Terminal(table) => table.append_row(row),
            TableView::Html(table) => table.append_row(row),
        }
    }

    fn show(&mut self) {
        match self {
            TableView::Terminal(table) => table.show(),
            TableView::Html(table) => table.show(),
        }
    }
}

type Loader = StockTableLoader<HttpStockSource, ConsoleTrigger, TableView, ConsoleNotifier<std::io::Stderr>>;

/// 输出加载后的表格
fn publish(loader: &Loader, cli: &Cli, count: usize) -> anyhow::Result<()> {
    write_output(&loader.table().render(), cli.output.as_deref())?;
    log::debug!("已输出 {} 行", count);
    Ok(())
}

/// 写入文件，未指定文件时写到标准输出
fn write_output(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("无法写入 {}", path.display()))?;
            log::info!("表格已写入 {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// 交互模式：回车加载，q 退出
async fn run_interactive(loader: &mut Loader, cli: &Cli) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("{} ", loader.trigger_control().prompt());
        std::io::stderr().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        if let LoadOutcome::Loaded(count) = loader.trigger().await {
            publish(loader, cli, count)?;
        }
    }
    Ok(())
}

/// 应用程序入口
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (mut config, config_source) = AppConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    // 初始化日志系统，默认日志级别取自配置
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match &config_source {
        ConfigSource::File(path) => log::info!("从 {} 加载配置成功", path.display()),
        ConfigSource::Defaults { skipped } => {
            for (path, e) in skipped {
                log::warn!("加载配置文件 {} 失败: {}", path.display(), e);
            }
            log::info!("使用默认配置");
        }
    }

    let source = HttpStockSource::from_config(&config)?;
    log::info!("股票列表接口: {}", source.url());

    let animate = !cli.once && std::io::stderr().is_terminal();
    let mut loader = StockTableLoader::new(
        source,
        ConsoleTrigger::new(animate),
        TableView::new(cli.format),
        ConsoleNotifier::stderr(),
    );

    if cli.once {
        return match loader.trigger().await {
            LoadOutcome::Loaded(count) => {
                publish(&loader, &cli, count)?;
                Ok(ExitCode::SUCCESS)
            }
            _ => Ok(ExitCode::FAILURE),
        };
    }

    run_interactive(&mut loader, &cli).await?;
    Ok(ExitCode::SUCCESS)
}
