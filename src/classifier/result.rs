//! 分类结果结构

use serde::{Deserialize, Serialize};

use crate::detector::{CnameDetector, Match};

/// 单个请求的最终分类结果
/// 生成后交给输出协作者，不做缓存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub slug: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_presence: Option<String>,
}

impl ClassificationResult {
    /// 由 Header 命中构建；skip_empty_pop 为真时空 PoP 归一为 None
    pub fn from_match(hit: &Match<'_>, skip_empty_pop: bool) -> Self {
        let point_of_presence = hit
            .point_of_presence
            .clone()
            .filter(|pop| !(skip_empty_pop && pop.is_empty()));

        Self {
            slug: hit.slug().to_string(),
            display_name: hit.display_name().to_string(),
            point_of_presence,
        }
    }

    /// 由 CNAME 命中构建，CNAME 路径无法得到 PoP
    pub fn from_cname(detector: &CnameDetector) -> Self {
        Self {
            slug: detector.slug.to_string(),
            display_name: detector.display_name.to_string(),
            point_of_presence: None,
        }
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.point_of_presence {
            Some(pop) if !pop.is_empty() => write!(f, "{} ({})", self.display_name, pop.to_uppercase()),
            _ => write!(f, "{}", self.display_name),
        }
    }
}
