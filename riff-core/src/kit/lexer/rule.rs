//! 规则与规则表
//!
//! 每条规则是 (正则, token 类型, 状态转移)。同一状态内按声明顺序尝试，
//! 第一条在当前位置匹配成功的规则胜出，后面的规则不再考虑。

use regex::Regex;
use thiserror::Error;

use super::types::{StateTrait, TokenKindTrait};

/// 规则匹配后对状态栈的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<S> {
    /// 保持当前状态
    Stay,
    /// 替换栈顶
    GoTo(S),
    /// 压入新状态，记住调用者状态
    Push(S),
    /// 弹出栈顶（只剩栈底时无操作）
    Pop,
}

/// 规则表构建错误
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid pattern {pattern:?} in state {state}: {source}")]
    InvalidPattern {
        state: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("state {0} has no rule list")]
    MissingState(String),

    #[error("state {0} is declared twice")]
    DuplicateState(String),

    #[error("state {0} has an empty rule list")]
    EmptyState(String),

    #[error("last rule of state {0} cannot match the empty string, scanning could stall")]
    MissingFallback(String),
}

/// 未编译的规则声明
#[derive(Debug, Clone)]
pub struct RuleSpec<S, K> {
    pattern: String,
    kind: K,
    action: Action<S>,
}

/// 声明一条规则
pub fn rule<S, K>(pattern: impl Into<String>, kind: K, action: Action<S>) -> RuleSpec<S, K> {
    RuleSpec {
        pattern: pattern.into(),
        kind,
        action,
    }
}

/// 已编译的规则
#[derive(Debug, Clone)]
pub struct Rule<S, K> {
    /// 以 `^` 锚定的正则
    regex: Regex,
    /// 声明时的原始模式
    pattern: String,
    kind: K,
    action: Action<S>,
}

impl<S: Copy, K: Copy> Rule<S, K> {
    fn compile(spec: RuleSpec<S, K>) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", spec.pattern))?;
        Ok(Self {
            regex,
            pattern: spec.pattern,
            kind: spec.kind,
            action: spec.action,
        })
    }

    /// 在 `rest` 开头尝试匹配，返回匹配长度（字节，可能为 0）
    ///
    /// `rest` 是从当前位置切出的剩余输入，`\b` 因此看不到左侧上下文
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end())
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn action(&self) -> Action<S> {
        self.action
    }

    /// 能否匹配空串（兜底规则）
    pub fn is_fallback(&self) -> bool {
        self.regex.is_match("")
    }
}

/// 规则表：每个状态一组有序规则
#[derive(Debug, Clone)]
pub struct RuleTable<S, K> {
    states: Vec<Vec<Rule<S, K>>>,
}

impl<S, K> RuleTable<S, K>
where
    S: StateTrait,
    K: TokenKindTrait,
{
    pub fn builder() -> RuleTableBuilder<S, K> {
        RuleTableBuilder {
            entries: Vec::new(),
        }
    }

    /// 指定状态的规则（按优先级排列）
    pub fn rules(&self, state: S) -> &[Rule<S, K>] {
        self.states
            .get(state.into())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 规则总数
    pub fn len(&self) -> usize {
        self.states.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 规则表构建器
pub struct RuleTableBuilder<S, K> {
    entries: Vec<(S, Vec<RuleSpec<S, K>>)>,
}

impl<S, K> RuleTableBuilder<S, K>
where
    S: StateTrait,
    K: TokenKindTrait,
{
    /// 声明一个状态的规则列表
    pub fn state(mut self, state: S, rules: Vec<RuleSpec<S, K>>) -> Self {
        self.entries.push((state, rules));
        self
    }

    /// 编译所有规则并校验表的完整性
    pub fn build(self) -> Result<RuleTable<S, K>, RuleError> {
        let mut states: Vec<Option<Vec<Rule<S, K>>>> = S::all().iter().map(|_| None).collect();

        for (state, specs) in self.entries {
            let index: usize = state.into();
            let slot = states
                .get_mut(index)
                .ok_or_else(|| RuleError::MissingState(format!("{state:?}")))?;
            if slot.is_some() {
                return Err(RuleError::DuplicateState(format!("{state:?}")));
            }

            let mut rules = Vec::with_capacity(specs.len());
            for spec in specs {
                let pattern = spec.pattern.clone();
                let compiled = Rule::compile(spec).map_err(|source| RuleError::InvalidPattern {
                    state: format!("{state:?}"),
                    pattern,
                    source,
                })?;
                rules.push(compiled);
            }

            match rules.last() {
                None => return Err(RuleError::EmptyState(format!("{state:?}"))),
                Some(last) if !last.is_fallback() => {
                    return Err(RuleError::MissingFallback(format!("{state:?}")))
                }
                Some(_) => {}
            }

            *slot = Some(rules);
        }

        let mut table = Vec::with_capacity(states.len());
        for (state, rules) in S::all().iter().zip(states) {
            table.push(rules.ok_or_else(|| RuleError::MissingState(format!("{state:?}")))?);
        }

        Ok(RuleTable { states: table })
    }
}
