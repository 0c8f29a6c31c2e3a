//! 内存静态解析表：主机名 → 规范名
//! 适用场景：测试替身，或宿主侧的固定覆盖表

use std::collections::HashMap;

use async_trait::async_trait;

use super::CnameResolver;
use crate::error::{CdnResult, CdnSniffError};

#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    records: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一条记录，主机名按小写存储
    pub fn with_record(mut self, hostname: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        self.insert(hostname, canonical_name);
        self
    }

    pub fn insert(&mut self, hostname: impl Into<String>, canonical_name: impl Into<String>) {
        self.records
            .insert(hostname.into().to_ascii_lowercase(), canonical_name.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticResolver
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for (host, cname) in iter {
            resolver.insert(host, cname);
        }
        resolver
    }
}

#[async_trait]
impl CnameResolver for StaticResolver {
    async fn canonical_name(&self, hostname: &str) -> CdnResult<String> {
        self.records
            .get(&hostname.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| CdnSniffError::DnsResolveError(format!("no record for {}", hostname)))
    }
}
