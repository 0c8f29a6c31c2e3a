//! DNS 规范名解析：CNAME 回退阶段依赖的外部协作者
pub mod static_resolver;
#[cfg(feature = "hickory-dns")]
pub mod hickory;

use async_trait::async_trait;

use crate::error::CdnResult;

pub use self::static_resolver::StaticResolver;
#[cfg(feature = "hickory-dns")]
pub use self::hickory::HickoryResolver;

/// 规范名解析器
/// 超时与重试由实现方负责，分类器只发起一次调用
#[async_trait]
pub trait CnameResolver: std::fmt::Debug + Send + Sync {
    /// 解析主机名的规范名（追踪 CNAME 链后的最终名称）
    async fn canonical_name(&self, hostname: &str) -> CdnResult<String>;
}
