/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 学术检索 API 地址
    pub scholar_api_base_url: String,
    /// 学术检索 API 密钥，为空时不发送认证头
    pub scholar_api_key: String,
    /// 外部检索任务表（TOML），未设置时使用内置任务表
    pub queries_file: Option<String>,
    /// 结果输出文件
    pub output_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scholar_api_base_url: "http://127.0.0.1:8000/api".to_string(),
            scholar_api_key: String::new(),
            queries_file: None,
            output_file: "/workspace/data/scholar_research_results.json".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置，无法解析的值回退到默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            scholar_api_base_url: lookup("SCHOLAR_API_BASE_URL").unwrap_or(default.scholar_api_base_url),
            scholar_api_key: lookup("SCHOLAR_API_KEY").unwrap_or(default.scholar_api_key),
            queries_file: lookup("SCHOLAR_QUERIES_FILE").filter(|v| !v.trim().is_empty()).or(default.queries_file),
            output_file: lookup("SCHOLAR_OUTPUT_FILE").unwrap_or(default.output_file),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
