//! 检测模块：Header 签名检测与 CNAME 后缀检测
pub mod header;
pub mod rules;
pub mod cname;

// 导出核心接口
pub use self::header::{
    HeaderDetector, Match, ExtractFn,
    detect_headers, select_last_match, matching_detectors, find_header_detector,
};
pub use self::rules::HEADER_DETECTORS;
pub use self::cname::{
    CnameDetector, CNAME_DETECTORS,
    detect_cname, select_first_cname, find_cname_detector,
};
