//! 工具模块：提供通用工具函数
pub mod header_converter;
#[cfg(feature = "tracing")]
pub mod log_bridge;

pub use self::header_converter::HeaderConverter;
#[cfg(feature = "tracing")]
pub use self::log_bridge::init_log_bridge;
