use std::fmt;

/// 词法状态 trait
///
/// 规则表按 `Into<usize>` 得到的下标存放各状态的规则
pub trait StateTrait: fmt::Debug + Copy + Eq + Into<usize> + Send + Sync + 'static {
    /// 全部状态（用于校验规则表是否完整）
    fn all() -> &'static [Self];

    /// 状态栈的永久栈底
    fn base() -> Self;

    /// 只能经 `Push` 进入、靠 `Pop` 离开的状态；不能放在栈底，否则永远出不去
    fn is_push_only(self) -> bool {
        false
    }
}

/// Token 类型 trait
pub trait TokenKindTrait: fmt::Debug + Copy + Eq + Send + Sync + 'static {
    /// 没有任何规则匹配时使用的兜底类型
    fn plain_text() -> Self;
}
