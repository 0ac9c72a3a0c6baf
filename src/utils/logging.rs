/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 `info`，详细模式下为 `debug`。
/// 日志写到 stderr，stdout 只留给结果摘要。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `api_base_url`: 检索服务地址
/// - `output_file`: 结果文件路径
pub fn log_startup(api_base_url: &str, output_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 并发学术检索模式");
    info!("🌐 检索服务: {}", api_base_url);
    info!("💾 结果文件: {}", output_file);
    info!("{}", "=".repeat(60));
}

/// 记录检索任务加载信息
///
/// # 参数
/// - `total`: 任务总数
/// - `source`: 任务表来源
pub fn log_queries_loaded(total: usize, source: &str) {
    info!("✓ 找到 {} 个检索任务 (来源: {})", total, source);
    info!("📋 所有任务将同时发起，全部完成后统一保存\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `total`: 总数
/// - `papers`: 论文总数
/// - `output_file`: 结果文件路径
pub fn print_final_stats(success: usize, total: usize, papers: usize, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部检索完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", total - success);
    info!("📄 论文总数: {}", papers);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
