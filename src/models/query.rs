use crate::error::{AppResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 单个检索任务
///
/// `topic` 同时是结果文件中的分类键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub topic: String,
    #[serde(rename = "query")]
    pub query_text: String,
    pub max_results: u32,
    #[serde(deserialize_with = "deserialize_year")]
    pub start_year: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub end_year: String,
}

/// 检索任务表，顺序即提交顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTable {
    pub queries: Vec<QuerySpec>,
}

impl QueryTable {
    /// 校验任务表，任何问题都在发起网络请求前报告
    pub fn validate(&self) -> AppResult<()> {
        if self.queries.is_empty() {
            return Err(ConfigError::EmptyQueryTable.into());
        }

        let mut seen = HashSet::new();
        for (idx, spec) in self.queries.iter().enumerate() {
            let index = idx + 1;
            if spec.topic.trim().is_empty() {
                return Err(invalid(index, "topic", "不能为空"));
            }
            if spec.query_text.trim().is_empty() {
                return Err(invalid(index, "query", "不能为空"));
            }
            if spec.max_results == 0 {
                return Err(invalid(index, "max_results", "必须大于 0"));
            }
            if let (Ok(start), Ok(end)) = (
                spec.start_year.parse::<i32>(),
                spec.end_year.parse::<i32>(),
            ) {
                if start > end {
                    return Err(invalid(
                        index,
                        "start_year",
                        format!("起始年份 {} 晚于结束年份 {}", start, end),
                    ));
                }
            }
            if !seen.insert(spec.topic.as_str()) {
                return Err(ConfigError::DuplicateTopic {
                    topic: spec.topic.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// 按提交顺序返回分类名
    pub fn topics(&self) -> Vec<&str> {
        self.queries.iter().map(|q| q.topic.as_str()).collect()
    }
}

fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> crate::error::AppError {
    ConfigError::InvalidQuery {
        index,
        field,
        reason: reason.into(),
    }
    .into()
}

// 年份既可以写成字符串也可以写成整数
fn deserialize_year<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer representing a year")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.trim().to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(YearVisitor)
}
