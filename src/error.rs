//! 全局错误类型定义
use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum CdnSniffError {
    // 输入相关错误
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("URL缺少主机名：{0}")]
    MissingHost(String),
    #[error("无效输入：{0}")]
    InvalidInput(String),

    // DNS 相关错误
    #[error("DNS解析失败：{0}")]
    DnsResolveError(String),

    // 分类器相关错误
    #[error("分类器未初始化: {0}")]
    ClassifierNotInitialized(String),
    #[error("分类器初始化失败: {0}")]
    ClassifierInitError(String),

    // 日志相关错误
    #[error("日志桥接初始化失败: {0}")]
    LogBridgeInitError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
}

// 全局Result类型
pub type CdnResult<T> = Result<T, CdnSniffError>;
