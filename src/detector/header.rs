//! Header 检测器：检测器身份 + 纯函数提取规则，以及"最后命中者胜出"的选择策略

use log::debug;
use serde::Serialize;

use crate::response::ResponseView;
use super::rules::HEADER_DETECTORS;

/// 提取函数：命中返回 Some(原始PoP)，未命中返回 None
pub type ExtractFn = fn(&ResponseView) -> Option<Option<String>>;

/// 单个 CDN 的 Header 签名检测器
/// 无状态，全部实例在进程内静态构建且只读
#[derive(Clone, Copy, Serialize)]
pub struct HeaderDetector {
    pub slug: &'static str,
    pub display_name: &'static str,
    #[serde(skip)]
    extract: ExtractFn,
}

impl HeaderDetector {
    pub const fn new(slug: &'static str, display_name: &'static str, extract: ExtractFn) -> Self {
        Self {
            slug,
            display_name,
            extract,
        }
    }

    /// 对响应执行检测规则
    pub fn detect(&self, view: &ResponseView) -> Option<Match<'_>> {
        (self.extract)(view).map(|point_of_presence| Match {
            detector: self,
            point_of_presence,
        })
    }
}

/// 检测命中：所属检测器 + 未规范化的 PoP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub detector: &'a HeaderDetector,
    pub point_of_presence: Option<String>,
}

impl Match<'_> {
    pub fn slug(&self) -> &'static str {
        self.detector.slug
    }

    pub fn display_name(&self) -> &'static str {
        self.detector.display_name
    }
}

impl std::fmt::Debug for HeaderDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderDetector")
            .field("slug", &self.slug)
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl PartialEq for HeaderDetector {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl Eq for HeaderDetector {}

/// 对给定检测器序列做折叠：全部执行，不提前退出，后命中者覆盖先命中者
pub fn select_last_match<'a>(detectors: &'a [HeaderDetector], view: &ResponseView) -> Option<Match<'a>> {
    detectors.iter().fold(None, |winner, detector| match detector.detect(view) {
        Some(hit) => {
            if let Some(prev) = &winner {
                debug!(
                    "[Header] {} overrides earlier match {} | pop: {:?}",
                    hit.slug(),
                    prev.slug(),
                    hit.point_of_presence
                );
            }
            Some(hit)
        }
        None => winner,
    })
}

/// 使用内置检测器表执行 Header 阶段
pub fn detect_headers(view: &ResponseView) -> Option<Match<'static>> {
    select_last_match(&HEADER_DETECTORS, view)
}

/// 返回所有命中项（按检测器表顺序），用于诊断签名重叠
pub fn matching_detectors(view: &ResponseView) -> Vec<Match<'static>> {
    HEADER_DETECTORS
        .iter()
        .filter_map(|detector| detector.detect(view))
        .collect()
}

/// 按 slug 查找内置 Header 检测器
pub fn find_header_detector(slug: &str) -> Option<&'static HeaderDetector> {
    HEADER_DETECTORS.iter().find(|d| d.slug == slug)
}
