//! CDN detection demonstration for cdnsniff
//! cdnsniff CDN 识别演示程序
//! 功能说明：
//! 1. 构造几组典型 CDN 响应 Header
//! 2. 使用静态解析表演示 CNAME 回退
//! 3. 输出分类结果与徽标内容（JSON）
//!
//! 运行命令：
//! cargo run --example detect_demo

use std::error::Error;

use cdnsniff::{Badge, CdnClassifier, ClassificationResult, ResponseView, StaticResolver};
use env_logger::{Builder, Env, Target};
use serde_json::to_string_pretty;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 构造分类器（静态解析表代替真实 DNS） ==========
    let resolver = StaticResolver::new()
        .with_record("www.akamai-site.com", "www.akamai-site.com.edgekey.net.e123.akamaiedge.net");
    let classifier = CdnClassifier::new(resolver);

    // ========== 3. 测试数据 ==========
    let samples = vec![
        ResponseView::new("https://blog.example.com/", [("CF-RAY", "7d1a2b3c4d5e6f70-AMS")])?,
        ResponseView::new("https://shop.example.com/", [("X-Amz-Cf-Pop", "SEA19-C1")])?,
        ResponseView::new(
            "https://news.example.com/",
            [
                ("Via", "1.1 varnish"),
                ("X-Served-By", "cache-lcy19234-LCY"),
                ("X-Timer", "S1634567890.123456,VS0,VE12"),
            ],
        )?,
        ResponseView::new("https://www.akamai-site.com/", [("Server", "AkamaiGHost")])?,
        ResponseView::new("https://plain.example.org/", [("Server", "nginx")])?,
    ];

    // ========== 4. 执行分类并输出 ==========
    for view in &samples {
        let result: Option<ClassificationResult> = classifier.classify(view).await?;
        match result {
            Some(result) => {
                let badge = Badge::from_result(&result);
                println!("✅ {} -> {}", view.url(), result);
                println!("{}", to_string_pretty(&badge)?);
            }
            None => println!("❔ {} -> unknown", view.url()),
        }
    }

    Ok(())
}
