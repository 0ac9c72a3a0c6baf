//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量检索运行器
//! - 管理一次运行的生命周期（初始化、运行）
//! - 加载检索任务表
//! - 保存结果并输出统计信息
//!
//! ### `fan_out` - 并发检索
//! - 同时发起全部检索请求，统一汇合
//! - 按提交顺序把结果对应到分类名
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (一次运行)
//!     ↓
//! fan_out (Vec<QuerySpec> → ResultBundle)
//!     ↓
//! clients::ScholarClient (单个检索请求)
//! ```

pub mod batch_runner;
pub mod fan_out;

// 重新导出主要类型
pub use batch_runner::App;
pub use fan_out::run_all;
