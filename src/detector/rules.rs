//! 内置 Header 检测规则表
//! 表顺序即优先级：多条规则同时命中时，靠后的规则胜出

use once_cell::sync::Lazy;
use regex::Regex;

use super::header::HeaderDetector;
use crate::response::ResponseView;

/// 内置 Header 检测器（顺序固定，勿随意调整）
pub static HEADER_DETECTORS: [HeaderDetector; 6] = [
    HeaderDetector::new("cloudflare", "Cloudflare", detect_cloudflare),
    HeaderDetector::new("cloudfront", "Amazon CloudFront", detect_cloudfront),
    HeaderDetector::new("stackpath", "StackPath", detect_stackpath),
    HeaderDetector::new("bunny", "Bunny CDN", detect_bunny),
    HeaderDetector::new("cdn77", "CDN77", detect_cdn77),
    HeaderDetector::new("fastly", "Fastly", detect_fastly),
];

// 关闭 Unicode 模式：\d 只匹配 ASCII 数字，s 不匹配 ſ
static FASTLY_TIMER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^s\d+\.\d+,vs0,ve\d+$").unwrap());

const BUNNY_SERVER_PREFIX: &str = "BunnyCDN";
const FASTLY_SERVER: &str = "artisanal bits";
const FASTLY_VARY_TOKEN: &str = "fastly-ssl";

/// 取末尾 n 个字符，不足 n 个时返回全部
fn last_chars(value: &str, n: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(n)).collect()
}

/// 取开头 n 个字符
fn first_chars(value: &str, n: usize) -> String {
    value.chars().take(n).collect()
}

// cf-ray: <ray id>-<pop>
fn detect_cloudflare(view: &ResponseView) -> Option<Option<String>> {
    let ray = view.non_empty_header("cf-ray")?;
    Some(Some(last_chars(ray, 3)))
}

fn detect_cloudfront(view: &ResponseView) -> Option<Option<String>> {
    let pop = view.non_empty_header("x-amz-cf-pop")?;
    Some(Some(first_chars(pop, 3)))
}

// x-hw: <ts>.<id>,<ts>.<node>.<pop>.<host>...，取最后一段的倒数第二个点分段
fn detect_stackpath(view: &ResponseView) -> Option<Option<String>> {
    let hw = view.non_empty_header("x-hw")?;
    let last_hop = hw.rsplit(',').next().unwrap_or(hw);
    let parts: Vec<&str> = last_hop.split('.').collect();
    let pop = parts
        .len()
        .checked_sub(2)
        .map(|idx| parts[idx].to_string());
    Some(pop)
}

fn detect_bunny(view: &ResponseView) -> Option<Option<String>> {
    let server = view
        .non_empty_header("server")
        .filter(|s| s.starts_with(BUNNY_SERVER_PREFIX))?;
    Some(server.split('-').nth(1).map(str::to_string))
}

fn detect_cdn77(view: &ResponseView) -> Option<Option<String>> {
    let pop = view.non_empty_header("x-77-pop")?;
    Some(Some(pop.to_string()))
}

// 三个触发条件任一成立即视为 Fastly；x-served-by 缺失时视为未命中
fn detect_fastly(view: &ResponseView) -> Option<Option<String>> {
    let by_server = view
        .header("server")
        .is_some_and(|s| s.to_lowercase() == FASTLY_SERVER);
    let by_timer = view
        .header("x-timer")
        .is_some_and(|t| FASTLY_TIMER_REGEX.is_match(t));
    let by_vary = view
        .header("vary")
        .is_some_and(|v| v.to_ascii_lowercase().contains(FASTLY_VARY_TOKEN));

    if !(by_server || by_timer || by_vary) {
        return None;
    }

    let served_by = view.header("x-served-by")?;
    Some(Some(last_chars(served_by, 3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::detect_headers;

    fn view(headers: &[(&str, &str)]) -> ResponseView {
        ResponseView::new("https://www.example.com/", headers.iter().copied()).unwrap()
    }

    fn pop_of(headers: &[(&str, &str)]) -> Option<(&'static str, Option<String>)> {
        detect_headers(&view(headers)).map(|m| (m.slug(), m.point_of_presence))
    }

    #[test]
    fn test_cloudflare_pop() {
        assert_eq!(
            pop_of(&[("cf-ray", "abcdefgh123")]),
            Some(("cloudflare", Some("123".to_string())))
        );
        assert_eq!(
            pop_of(&[("CF-RAY", "7d1a2b3c4d5e6f70-AMS")]),
            Some(("cloudflare", Some("AMS".to_string())))
        );
        // 不足3个字符时取全部
        assert_eq!(pop_of(&[("cf-ray", "ab")]), Some(("cloudflare", Some("ab".to_string()))));
    }

    #[test]
    fn test_cloudfront_pop() {
        assert_eq!(
            pop_of(&[("x-amz-cf-pop", "SEA19-C1")]),
            Some(("cloudfront", Some("SEA".to_string())))
        );
    }

    #[test]
    fn test_stackpath_pop() {
        assert_eq!(
            pop_of(&[("x-hw", "a,b,cfl3.pop.stackpath.net")]),
            Some(("stackpath", Some("stackpath".to_string())))
        );
        assert_eq!(
            pop_of(&[("X-HW", "1634567890.dop014.fr8.t,1634567890.cds020.fr8.c")]),
            Some(("stackpath", Some("fr8".to_string())))
        );
        // 无点分段时仍判定命中，但无 PoP
        assert_eq!(pop_of(&[("x-hw", "nodots")]), Some(("stackpath", None)));
    }

    #[test]
    fn test_bunny_pop() {
        assert_eq!(
            pop_of(&[("server", "BunnyCDN-LAX1-1049")]),
            Some(("bunny", Some("LAX1".to_string())))
        );
        assert_eq!(pop_of(&[("server", "BunnyCDN")]), Some(("bunny", None)));
        // 前缀大小写敏感
        assert_eq!(pop_of(&[("server", "bunnycdn-LAX1-1049")]), None);
        assert_eq!(pop_of(&[("server", "nginx")]), None);
    }

    #[test]
    fn test_cdn77_pop() {
        assert_eq!(
            pop_of(&[("x-77-pop", "frankfurtDE")]),
            Some(("cdn77", Some("frankfurtDE".to_string())))
        );
    }

    #[test]
    fn test_fastly_triggers() {
        let served_by = ("x-served-by", "cache-lcy19234-LCY");

        assert_eq!(
            pop_of(&[("Server", "ARTISANAL BITS"), served_by]),
            Some(("fastly", Some("LCY".to_string())))
        );
        assert_eq!(
            pop_of(&[("x-timer", "S1634567890.123456,VS0,VE12"), served_by]),
            Some(("fastly", Some("LCY".to_string())))
        );
        assert_eq!(
            pop_of(&[("vary", "Accept-Encoding, FASTLY-SSL"), served_by]),
            Some(("fastly", Some("LCY".to_string())))
        );
    }

    #[test]
    fn test_fastly_timer_must_match_fully() {
        let served_by = ("x-served-by", "cache-lcy19234-LCY");
        assert_eq!(pop_of(&[("x-timer", "S1634567890.123456,VS0,VE12,extra"), served_by]), None);
        assert_eq!(pop_of(&[("x-timer", "S1634567890,VS0,VE12"), served_by]), None);
    }

    #[test]
    fn test_fastly_timer_ascii_only() {
        let served_by = ("x-served-by", "cache-lcy19234-LCY");
        assert_eq!(pop_of(&[("x-timer", "S١٢.٣٤,VS0,VE٥"), served_by]), None);
        assert_eq!(pop_of(&[("x-timer", "ſ12.34,vs0,ve5"), served_by]), None);
        assert_eq!(
            pop_of(&[("x-timer", "s12.34,vs0,ve5"), served_by]),
            Some(("fastly", Some("LCY".to_string())))
        );
    }

    #[test]
    fn test_fastly_without_served_by_is_no_match() {
        assert_eq!(pop_of(&[("server", "artisanal bits")]), None);
    }

    #[test]
    fn test_empty_values_do_not_trigger() {
        assert_eq!(pop_of(&[("cf-ray", "")]), None);
        assert_eq!(pop_of(&[("x-amz-cf-pop", "")]), None);
        assert_eq!(pop_of(&[("x-hw", "")]), None);
        assert_eq!(pop_of(&[("x-77-pop", "")]), None);
    }

    #[test]
    fn test_char_helpers() {
        assert_eq!(last_chars("abcdef", 3), "def");
        assert_eq!(last_chars("", 3), "");
        assert_eq!(first_chars("SE", 3), "SE");
        assert_eq!(last_chars("东京机房", 3), "京机房");
    }
}
