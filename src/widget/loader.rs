//! 股票表格加载器
//!
//! 点击按钮 → 请求后端 → 解析 JSON → 重建表体 → 恢复按钮状态

use super::{stock_row, Notifier, StockTable, TriggerControl, ERROR_PREFIX, IDLE_LABEL, LOADING_LABEL};
use crate::models::StockRecord;
use crate::services::StockSource;

/// 一次触发的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 加载成功，附带行数
    Loaded(usize),
    /// 加载失败，错误已通过提示框告知用户
    Failed,
    /// 按钮处于禁用状态，本次触发被忽略
    Ignored,
}

/// 加载期间禁用按钮，离开作用域时（包括 panic）恢复为空闲状态
struct LoadingGuard<'a, T: TriggerControl> {
    trigger: &'a mut T,
}

impl<'a, T: TriggerControl> LoadingGuard<'a, T> {
    fn engage(trigger: &'a mut T) -> Self {
        trigger.set_disabled(true);
        trigger.set_label(LOADING_LABEL);
        Self { trigger }
    }
}

impl<T: TriggerControl> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.trigger.set_disabled(false);
        self.trigger.set_label(IDLE_LABEL);
    }
}

/// 股票表格加载器
///
/// 界面句柄由调用方传入，加载器不做任何全局查找
pub struct StockTableLoader<S, T, B, N> {
    source: S,
    trigger: T,
    table: B,
    notifier: N,
}

impl<S, T, B, N> StockTableLoader<S, T, B, N>
where
    S: StockSource,
    T: TriggerControl,
    B: StockTable,
    N: Notifier,
{
    pub fn new(source: S, trigger: T, table: B, notifier: N) -> Self {
        Self {
            source,
            trigger,
            table,
            notifier,
        }
    }

    /// 处理一次按钮点击
    pub async fn trigger(&mut self) -> LoadOutcome {
        if self.trigger.is_disabled() {
            log::debug!("加载进行中，忽略本次触发");
            return LoadOutcome::Ignored;
        }

        let _loading = LoadingGuard::engage(&mut self.trigger);

        match self.source.fetch_stocks().await {
            Ok(records) => {
                render_rows(&mut self.table, &records);
                log::info!("已加载 {} 只股票", records.len());
                LoadOutcome::Loaded(records.len())
            }
            Err(e) => {
                log::warn!("股票列表加载失败 ({}): {}", e.kind(), e);
                self.notifier.alert(&format!("{ERROR_PREFIX}{e}"));
                LoadOutcome::Failed
            }
        }
    }

    pub fn trigger_control(&self) -> &T {
        &self.trigger
    }

    pub fn table(&self) -> &B {
        &self.table
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

/// 用新数据替换表体并显示表格
fn render_rows<B: StockTable>(table: &mut B, records: &[StockRecord]) {
    table.clear_rows();
    for record in records {
        table.append_row(stock_row(record));
    }
    table.show();
}

// ==================== 测试模块 ====================
