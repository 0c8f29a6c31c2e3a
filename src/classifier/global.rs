//! 全局分类器单例管理
//! 检测器表本身是静态只读的，这里只保存配置与解析器的进程级实例

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::classifier::CdnClassifier;
use super::result::ClassificationResult;
use crate::config::ClassifierConfig;
use crate::error::{CdnResult, CdnSniffError};
use crate::resolver::CnameResolver;
use crate::response::ResponseView;

/// 全局分类器实例 - 线程安全单例
static GLOBAL_CLASSIFIER: OnceCell<CdnClassifier> = OnceCell::new();

/// 初始化全局分类器
/// 幂等：已初始化则直接返回Ok(())，后续传入的配置被忽略
pub fn init_global_classifier(config: ClassifierConfig, resolver: Arc<dyn CnameResolver>) -> CdnResult<()> {
    if GLOBAL_CLASSIFIER.get().is_some() {
        log::debug!("Global classifier already initialized, skip reinitialization");
        return Ok(());
    }

    GLOBAL_CLASSIFIER
        .set(CdnClassifier::with_config(config, resolver))
        .map_err(|_| {
            CdnSniffError::ClassifierInitError(
                "instance already initialized by another thread".to_string(),
            )
        })?;

    log::info!("Global CdnClassifier initialized successfully");
    Ok(())
}

/// 获取全局分类器实例（无自动初始化）
pub fn global_classifier() -> CdnResult<&'static CdnClassifier> {
    GLOBAL_CLASSIFIER.get().ok_or_else(|| {
        CdnSniffError::ClassifierNotInitialized(
            "call init_global_classifier first".to_string(),
        )
    })
}

/// 使用全局分类器分类
pub async fn classify_global(view: &ResponseView) -> CdnResult<Option<ClassificationResult>> {
    global_classifier()?.classify(view).await
}
