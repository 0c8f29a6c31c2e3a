//! 分类模块：两阶段分类流程、结果结构与输出协作者
pub mod classifier;
pub mod global;
pub mod result;
pub mod sink;

// 导出核心接口
pub use self::classifier::{CdnClassifier, ClassifyPhase};
pub use self::global::{init_global_classifier, global_classifier, classify_global};
pub use self::result::ClassificationResult;
pub use self::sink::ResultSink;
