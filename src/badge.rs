//! 徽标展示数据：由分类结果推导图标路径、徽标文字与标题
//! 只计算数据，不负责实际绘制

use serde::{Deserialize, Serialize};

use crate::classifier::ClassificationResult;

/// 徽标配色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStyle {
    pub background_color: String,
    pub text_color: String,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            background_color: "rgba(243, 128, 32, 0.5)".to_string(),
            text_color: "#fff".to_string(),
        }
    }
}

/// 单个请求的徽标内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// 图标资源路径：icons/<slug>.png
    pub icon_path: String,
    /// 徽标文字：大写 PoP，无 PoP 时为空
    pub text: Option<String>,
    /// 标题：名称 (PoP)
    pub title: String,
}

impl Badge {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let text = result
            .point_of_presence
            .as_deref()
            .filter(|pop| !pop.is_empty())
            .map(str::to_uppercase);

        let title = match &text {
            Some(pop) => format!("{} ({})", result.display_name, pop),
            None => result.display_name.clone(),
        };

        Self {
            icon_path: format!("icons/{}.png", result.slug),
            text,
            title,
        }
    }
}

impl From<&ClassificationResult> for Badge {
    fn from(result: &ClassificationResult) -> Self {
        Self::from_result(result)
    }
}
