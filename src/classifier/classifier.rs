//! CDN 分类器核心
//! 核心职责：
//! 1. Header 阶段：同步执行全部 Header 检测器，最后命中者胜出
//! 2. DNS 阶段：Header 未命中时解析规范名并按域名后缀匹配
//! 3. 每个请求至多产出一个结果，解析失败静默吞掉

use std::sync::Arc;

use log::debug;

use super::result::ClassificationResult;
use super::sink::ResultSink;
use crate::config::ClassifierConfig;
use crate::detector::{detect_cname, detect_headers};
use crate::error::CdnResult;
use crate::resolver::CnameResolver;
use crate::response::ResponseView;

/// 单个请求的分类阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyPhase {
    /// 初始阶段：Header 检测
    Header,
    /// Header 未命中后的 CNAME 回退
    Dns,
}

/// CDN 分类器
/// 设计说明：
/// - config: 分类器配置
/// - resolver: DNS 规范名解析器（Arc 共享，可跨任务克隆）
#[derive(Debug, Clone)]
pub struct CdnClassifier {
    config: ClassifierConfig,
    resolver: Arc<dyn CnameResolver>,
}

impl CdnClassifier {
    /// 使用默认配置创建
    pub fn new<R: CnameResolver + 'static>(resolver: R) -> Self {
        Self::with_config(ClassifierConfig::default(), Arc::new(resolver))
    }

    pub fn with_config(config: ClassifierConfig, resolver: Arc<dyn CnameResolver>) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Header 阶段（同步，不挂起）
    pub fn classify_headers(&self, view: &ResponseView) -> Option<ClassificationResult> {
        let hit = detect_headers(view)?;
        let result = ClassificationResult::from_match(&hit, self.config.skip_empty_pop);
        debug!(
            "[Header] classified {} as {} | pop: {:?}",
            view.url(),
            result.slug,
            result.point_of_presence
        );
        Some(result)
    }

    /// DNS 阶段：解析失败或无后缀命中均返回 None，错误不向上传递
    pub async fn classify_cname(&self, hostname: &str) -> Option<ClassificationResult> {
        let canonical_name = match self.resolver.canonical_name(hostname).await {
            Ok(name) => name,
            Err(e) => {
                debug!("[DNS] resolve {} failed, leaving unclassified: {}", hostname, e);
                return None;
            }
        };
        debug!("[DNS] resolved {} to CNAME {}", hostname, canonical_name);

        let detector = detect_cname(&canonical_name)?;
        Some(ClassificationResult::from_cname(detector))
    }

    /// 完整分类流程，返回命中阶段与结果
    /// 仅当 DNS 阶段需要主机名而 URL 中不存在时返回错误
    pub async fn classify_with_phase(
        &self,
        view: &ResponseView,
    ) -> CdnResult<Option<(ClassifyPhase, ClassificationResult)>> {
        if let Some(result) = self.classify_headers(view) {
            return Ok(Some((ClassifyPhase::Header, result)));
        }

        if !self.config.cname_fallback {
            debug!("[Header] no match for {}, CNAME fallback disabled", view.url());
            return Ok(None);
        }

        let hostname = view.hostname()?;
        Ok(self
            .classify_cname(hostname)
            .await
            .map(|result| (ClassifyPhase::Dns, result)))
    }

    /// 完整分类流程
    pub async fn classify(&self, view: &ResponseView) -> CdnResult<Option<ClassificationResult>> {
        Ok(self.classify_with_phase(view).await?.map(|(_, result)| result))
    }

    /// 分类并发布到输出协作者
    /// DNS 阶段返回后若上下文已失效（且配置要求），结果被静默丢弃
    /// 返回是否实际发布
    pub async fn run<C, S>(&self, ctx: &C, view: &ResponseView, sink: &S) -> CdnResult<bool>
    where
        C: ?Sized + Sync,
        S: ResultSink<C> + ?Sized,
    {
        let Some((phase, result)) = self.classify_with_phase(view).await? else {
            return Ok(false);
        };

        if phase == ClassifyPhase::Dns && self.config.drop_stale_results && !sink.is_current(ctx) {
            debug!("[DNS] context for {} is gone, dropping {}", view.url(), result.slug);
            return Ok(false);
        }

        sink.publish(ctx, &result);
        Ok(true)
    }
}
