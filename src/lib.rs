//! cdnsniff - 基于响应 Header 与 DNS 规范名的 CDN 识别库
//!
//! 两阶段分类：先同步执行 Header 签名检测（最后命中者胜出），
//! 未命中时再异步解析主机名的 CNAME，并按 CDN 域名后缀匹配。

pub mod badge;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod resolver;
pub mod response;
pub mod utils;

// 导出全局错误类型
pub use self::error::{CdnResult, CdnSniffError};

// 导出配置模块
pub use self::config::{ClassifierConfig, ConfigBuilder};

// 导出响应视图
pub use self::response::ResponseView;

// 导出检测模块核心接口
pub use self::detector::{
    CnameDetector, HeaderDetector, Match, CNAME_DETECTORS, HEADER_DETECTORS,
    detect_cname, detect_headers, find_cname_detector, find_header_detector, matching_detectors,
};

// 导出分类模块核心接口
pub use self::classifier::{
    CdnClassifier, ClassificationResult, ClassifyPhase, ResultSink,
    classify_global, global_classifier, init_global_classifier,
};

// 导出解析器
pub use self::resolver::{CnameResolver, StaticResolver};
#[cfg(feature = "hickory-dns")]
pub use self::resolver::HickoryResolver;

// 导出工具
pub use self::badge::{Badge, BadgeStyle};
pub use self::utils::HeaderConverter;
