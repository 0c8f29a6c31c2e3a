//! CNAME 检测器：Header 阶段未命中时，按规范名（CNAME）域名后缀识别 CDN

use serde::Serialize;

/// 域名后缀检测器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CnameDetector {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub suffixes: &'static [&'static str],
}

impl CnameDetector {
    /// 规范名以任一后缀结尾即命中（忽略末尾的根域点与大小写）
    pub fn matches(&self, canonical_name: &str) -> bool {
        let name = normalize_name(canonical_name);
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}

/// 内置 CNAME 检测器（按顺序匹配，首个命中者胜出）
pub static CNAME_DETECTORS: [CnameDetector; 1] = [CnameDetector {
    slug: "akamai",
    display_name: "Akamai",
    suffixes: &["akamaiedge.net", "akamai.net"],
}];

fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// 在给定检测器序列中查找首个命中者
pub fn select_first_cname<'a>(detectors: &'a [CnameDetector], canonical_name: &str) -> Option<&'a CnameDetector> {
    detectors.iter().find(|detector| detector.matches(canonical_name))
}

/// 使用内置表匹配规范名
pub fn detect_cname(canonical_name: &str) -> Option<&'static CnameDetector> {
    select_first_cname(&CNAME_DETECTORS, canonical_name)
}

/// 按 slug 查找内置 CNAME 检测器
pub fn find_cname_detector(slug: &str) -> Option<&'static CnameDetector> {
    CNAME_DETECTORS.iter().find(|d| d.slug == slug)
}
