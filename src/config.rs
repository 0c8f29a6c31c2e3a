//! 分类器配置管理

use serde::{Deserialize, Serialize};

use crate::error::CdnResult;

/// 分类器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Header 未命中时是否进入 DNS CNAME 回退阶段
    pub cname_fallback: bool,
    /// DNS 阶段结束后，若请求上下文已失效则丢弃结果
    pub drop_stale_results: bool,
    /// 提取到的空 PoP 视为无 PoP
    pub skip_empty_pop: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            cname_fallback: true,
            drop_stale_results: true,
            skip_empty_pop: true,
        }
    }
}

impl ClassifierConfig {
    /// 自定义配置
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// 从 JSON 字符串加载配置，缺省字段取默认值
    pub fn from_json_str(json: &str) -> CdnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: ClassifierConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cname_fallback(mut self, enabled: bool) -> Self {
        self.config.cname_fallback = enabled;
        self
    }

    pub fn drop_stale_results(mut self, enabled: bool) -> Self {
        self.config.drop_stale_results = enabled;
        self
    }

    pub fn skip_empty_pop(mut self, enabled: bool) -> Self {
        self.config.skip_empty_pop = enabled;
        self
    }

    pub fn build(self) -> ClassifierConfig {
        self.config
    }
}
