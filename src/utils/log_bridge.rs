//! log → tracing 桥接（需开启 tracing 特性）
//! 本库内部统一使用 log 宏，宿主使用 tracing 订阅者时调用一次即可

use crate::error::{CdnResult, CdnSniffError};

/// 将 log 记录转发到 tracing，重复调用返回错误
pub fn init_log_bridge() -> CdnResult<()> {
    tracing_log::LogTracer::init()
        .map_err(|e| CdnSniffError::LogBridgeInitError(format!("logger already installed: {}", e)))?;
    tracing::debug!("log records are now forwarded to tracing");
    Ok(())
}
