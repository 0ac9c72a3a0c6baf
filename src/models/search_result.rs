use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// 检索服务返回的原始结果
///
/// 结构由检索服务决定，这里只读取 `success`、`data.papers` 和 `error`，
/// 写文件时原样输出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult(pub Value);

impl SearchResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// `success` 按真值判断：非零数字、非空字符串/数组/对象都算成功
    pub fn is_success(&self) -> bool {
        match self.0.get("success") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(false, |v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    /// `data.papers` 的条数，缺失时为 0
    pub fn paper_count(&self) -> usize {
        self.0
            .get("data")
            .and_then(|d| d.get("papers"))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// 错误信息，缺失时为 "Unknown error"
    pub fn error_message(&self) -> String {
        match self.0.get("error") {
            None | Some(Value::Null) => "Unknown error".to_string(),
            Some(Value::String(msg)) => msg.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// 分类名 → 检索结果，保持提交顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBundle {
    entries: Vec<(String, SearchResult)>,
}

impl ResultBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, topic: impl Into<String>, result: SearchResult) {
        self.entries.push((topic.into(), result));
    }

    pub fn get(&self, topic: &str) -> Option<&SearchResult> {
        self.entries
            .iter()
            .find(|(t, _)| t == topic)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SearchResult)> {
        self.entries.iter().map(|(t, r)| (t.as_str(), r))
    }

    pub fn topics(&self) -> Vec<&str> {
        self.entries.iter().map(|(t, _)| t.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_success()).count()
    }

    pub fn total_papers(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, r)| r.is_success())
            .map(|(_, r)| r.paper_count())
            .sum()
    }
}

impl FromIterator<(String, SearchResult)> for ResultBundle {
    fn from_iter<I: IntoIterator<Item = (String, SearchResult)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// 以 JSON 对象输出，键顺序与提交顺序一致
impl Serialize for ResultBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (topic, result) in &self.entries {
            map.serialize_entry(topic, result)?;
        }
        map.end()
    }
}
