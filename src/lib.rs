//! # Scholar Search
//!
//! 并发执行一组学术检索任务，把结果按分类保存为 JSON 并输出摘要
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 与检索服务交互，只处理单个请求
//! - `ScholarClient` - 检索能力抽象，可被并发调用共享
//! - `HttpScholarClient` - 基于 HTTP 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `ResultWriter` - 写结果文件、生成摘要
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/fan_out` - 并发发起全部检索，统一汇合
//! - `orchestrator/batch_runner` - 一次完整运行：加载任务 → 检索 → 保存 → 摘要
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{HttpScholarClient, ScholarClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuerySpec, QueryTable, ResultBundle, SearchResult};
pub use orchestrator::{run_all, App};
