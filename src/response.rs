//! 响应视图：检测器可见的响应元数据（URL + Header）

use http::header::HeaderMap;
use url::Url;

use crate::error::{CdnResult, CdnSniffError};
use crate::utils::HeaderConverter;

/// 一次已完成请求的只读响应视图
/// Header 按线上接收顺序保存，名称比较不区分大小写
#[derive(Debug, Clone)]
pub struct ResponseView {
    url: Url,
    headers: Vec<(String, String)>,
}

impl ResponseView {
    /// 由 URL 字符串与 (名称, 值) 列表构建
    pub fn new<I, K, V>(url: &str, headers: I) -> CdnResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let url = Url::parse(url)?;
        Ok(Self::with_url(url, headers))
    }

    /// 由已解析的 URL 构建
    pub fn with_url<I, K, V>(url: Url, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            url,
            headers: HeaderConverter::collect_pairs(headers),
        }
    }

    /// 由 http::HeaderMap 构建
    pub fn from_header_map(url: &str, headers: &HeaderMap) -> CdnResult<Self> {
        let url = Url::parse(url)?;
        Ok(Self {
            url,
            headers: HeaderConverter::to_entries(headers),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// 按名称查找 Header（不区分大小写），仅返回第一个匹配项，后续重复项忽略
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// 查找非空 Header，空值与缺失同等对待
    pub fn non_empty_header(&self, name: &str) -> Option<&str> {
        self.header(name).filter(|value| !value.is_empty())
    }

    /// 请求主机名，用于 CNAME 回退
    pub fn hostname(&self) -> CdnResult<&str> {
        self.url
            .host_str()
            .ok_or_else(|| CdnSniffError::MissingHost(self.url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_case_insensitive() {
        let view = ResponseView::new(
            "https://example.com/",
            [("CF-Ray", "abc-AMS"), ("Server", "cloudflare")],
        )
        .unwrap();

        assert_eq!(view.header("cf-ray"), Some("abc-AMS"));
        assert_eq!(view.header("SERVER"), Some("cloudflare"));
        assert_eq!(view.header("x-served-by"), None);
    }

    #[test]
    fn test_header_lookup_first_duplicate_wins() {
        let view = ResponseView::new(
            "https://example.com/",
            [("server", "first"), ("Server", "second")],
        )
        .unwrap();

        assert_eq!(view.header("server"), Some("first"));
    }

    #[test]
    fn test_empty_header_treated_as_missing() {
        let view = ResponseView::new("https://example.com/", [("x-77-pop", "")]).unwrap();

        assert_eq!(view.header("x-77-pop"), Some(""));
        assert_eq!(view.non_empty_header("x-77-pop"), None);
    }

    #[test]
    fn test_hostname() {
        let view = ResponseView::new("https://www.example.com:8443/a?b=c", Vec::<(String, String)>::new()).unwrap();
        assert_eq!(view.hostname().unwrap(), "www.example.com");

        let no_host = ResponseView::new("data:text/plain,hello", Vec::<(String, String)>::new()).unwrap();
        assert!(matches!(no_host.hostname(), Err(CdnSniffError::MissingHost(_))));
    }

    #[test]
    fn test_invalid_url_fails_fast() {
        let res = ResponseView::new("not a url", Vec::<(String, String)>::new());
        assert!(matches!(res, Err(CdnSniffError::UrlError(_))));
    }
}
