//! 输出协作者：接收分类结果（如徽标渲染）

use super::result::ClassificationResult;

/// 分类结果接收方，C 为宿主侧的不透明上下文令牌（如标签页 ID）
pub trait ResultSink<C: ?Sized>: Send + Sync {
    /// 发布一次分类结果，每个请求至多调用一次
    fn publish(&self, ctx: &C, result: &ClassificationResult);

    /// 上下文是否仍然有效；DNS 阶段返回后会再次确认
    fn is_current(&self, _ctx: &C) -> bool {
        true
    }
}

impl<C, F> ResultSink<C> for F
where
    C: ?Sized,
    F: Fn(&C, &ClassificationResult) + Send + Sync,
{
    fn publish(&self, ctx: &C, result: &ClassificationResult) {
        self(ctx, result)
    }
}
