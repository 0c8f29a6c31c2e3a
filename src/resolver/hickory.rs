//! 基于 hickory-resolver 的异步规范名解析（需开启 hickory-dns 特性）

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use super::CnameResolver;
use crate::error::{CdnResult, CdnSniffError};

/// 系统 DNS 配置驱动的解析器
/// 查询 A 记录，取应答中 CNAME 链的最后一个目标；无 CNAME 时返回主机名本身
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    /// 使用系统配置（/etc/resolv.conf 等）创建
    pub fn from_system_conf() -> CdnResult<Self> {
        let inner = TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| CdnSniffError::DnsResolveError(format!("load system resolver config: {}", e)))?;
        Ok(Self { inner })
    }

    /// 使用自定义上游与选项创建
    pub fn with_config(config: ResolverConfig, opts: ResolverOpts) -> Self {
        Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl CnameResolver for HickoryResolver {
    async fn canonical_name(&self, hostname: &str) -> CdnResult<String> {
        let lookup = self
            .inner
            .lookup(hostname, RecordType::A)
            .await
            .map_err(|e| CdnSniffError::DnsResolveError(format!("{}: {}", hostname, e)))?;

        let canonical = lookup
            .record_iter()
            .filter_map(|record| match record.data() {
                Some(RData::CNAME(cname)) => Some(cname.0.to_utf8()),
                _ => None,
            })
            .last()
            .unwrap_or_else(|| hostname.to_string());

        let canonical = canonical.trim_end_matches('.').to_string();
        debug!("[DNS] {} -> {}", hostname, canonical);
        Ok(canonical)
    }
}
