//! Header格式转换工具
use http::header::HeaderMap;
use log::debug;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 将HeaderMap转换为按接收顺序排列的 (名称, 值) 列表
    /// 保留全部条目；非UTF-8的值按空字符串处理，名称保留 http 库的小写形式
    pub fn to_entries(header_map: &HeaderMap) -> Vec<(String, String)> {
        let mut entries = Vec::with_capacity(header_map.len());

        for (key, value) in header_map.iter() {
            let value_str = match value.to_str() {
                Ok(v) => v.to_string(),
                Err(_) => {
                    debug!("Header {} is not valid UTF-8, treated as empty", key);
                    String::new()
                }
            };
            entries.push((key.as_str().to_string(), value_str));
        }

        entries
    }

    /// 将任意 (名称, 值) 迭代器转换为 Header 列表
    pub fn collect_pairs<I, K, V>(pairs: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    #[test]
    fn test_to_entries_keeps_duplicates_in_order() {
        let mut map = HeaderMap::new();
        map.append("vary", HeaderValue::from_static("Accept-Encoding"));
        map.append("vary", HeaderValue::from_static("Fastly-SSL"));
        map.insert("cf-ray", HeaderValue::from_static("7d1a2b3c4d5e6f70-AMS"));

        let entries = HeaderConverter::to_entries(&map);
        let vary: Vec<&str> = entries
            .iter()
            .filter(|(k, _)| k == "vary")
            .map(|(_, v)| v.as_str())
            .collect();

        assert_eq!(entries.len(), 3);
        assert_eq!(vary, vec!["Accept-Encoding", "Fastly-SSL"]);
    }

    #[test]
    fn test_large_header_sets_are_kept_whole() {
        let mut pairs: Vec<(String, String)> = (0..1000)
            .map(|i| (format!("x-pad-{}", i), "v".to_string()))
            .collect();
        pairs.push(("cf-ray".to_string(), "abcdefgh123".to_string()));

        let entries = HeaderConverter::collect_pairs(pairs);
        assert_eq!(entries.len(), 1001);
        assert_eq!(entries[1000], ("cf-ray".to_string(), "abcdefgh123".to_string()));

        let mut map = HeaderMap::new();
        for i in 0..1200 {
            let name = HeaderName::from_bytes(format!("x-pad-{}", i).as_bytes()).unwrap();
            map.insert(name, HeaderValue::from_static("v"));
        }
        assert_eq!(HeaderConverter::to_entries(&map).len(), 1200);
    }

    #[test]
    fn test_to_entries_non_utf8_value_is_empty() {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-77-pop"),
            HeaderValue::from_bytes(b"\xffbad").unwrap(),
        );

        let entries = HeaderConverter::to_entries(&map);
        assert_eq!(entries, vec![("x-77-pop".to_string(), String::new())]);
    }
}
