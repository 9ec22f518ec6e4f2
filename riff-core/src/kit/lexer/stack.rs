//! 状态栈
//!
//! 栈永不为空：栈底由 `StateTrait::base()` 初始化，`Pop` 不会移除它。
//! `GoTo` 替换栈顶，栈里只有一个元素时替换的就是栈底这一格。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rule::Action;
use super::types::StateTrait;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("state stack cannot be empty")]
    Empty,
    #[error("state {0} cannot sit at the bottom of the stack")]
    PushOnlyBottom(String),
}

/// 词法状态栈（可序列化，供宿主在增量扫描之间保存）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<S>",
    into = "Vec<S>",
    bound(
        serialize = "S: Serialize + Clone",
        deserialize = "S: StateTrait + Deserialize<'de>"
    )
)]
pub struct StateStack<S> {
    states: Vec<S>,
}

impl<S: StateTrait> StateStack<S> {
    /// 只含栈底状态的新栈
    pub fn new() -> Self {
        Self {
            states: vec![S::base()],
        }
    }

    /// 当前生效的状态
    pub fn top(&self) -> S {
        // 不变式保证非空
        self.states[self.states.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.states
    }

    pub fn push(&mut self, state: S) {
        self.states.push(state);
    }

    /// 弹出栈顶，栈底永远保留
    pub fn pop(&mut self) -> Option<S> {
        if self.states.len() > 1 {
            self.states.pop()
        } else {
            None
        }
    }

    pub fn goto(&mut self, state: S) {
        let last = self.states.len() - 1;
        self.states[last] = state;
    }

    /// 执行规则的转移动作
    pub fn apply(&mut self, action: Action<S>) {
        match action {
            Action::Stay => {}
            Action::GoTo(state) => self.goto(state),
            Action::Push(state) => self.push(state),
            Action::Pop => {
                self.pop();
            }
        }
    }
}

impl<S: StateTrait> Default for StateStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateTrait> TryFrom<Vec<S>> for StateStack<S> {
    type Error = StackError;

    fn try_from(states: Vec<S>) -> Result<Self, Self::Error> {
        let bottom = *states.first().ok_or(StackError::Empty)?;
        if bottom.is_push_only() {
            return Err(StackError::PushOnlyBottom(format!("{:?}", bottom)));
        }
        Ok(Self { states })
    }
}

impl<S> From<StateStack<S>> for Vec<S> {
    fn from(stack: StateStack<S>) -> Self {
        stack.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::rule::tests::Mini;

    #[test]
    fn test_new_stack() {
        let stack = StateStack::<Mini>::new();
        assert_eq!(stack.top(), Mini::Outer);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_push_pop_restores_caller() {
        let mut stack = StateStack::<Mini>::new();
        stack.apply(Action::Push(Mini::Inner));
        stack.apply(Action::Push(Mini::Inner));
        assert_eq!(stack.depth(), 3);
        stack.apply(Action::Pop);
        assert_eq!(stack.top(), Mini::Inner);
        stack.apply(Action::Pop);
        assert_eq!(stack, StateStack::new());
    }

    #[test]
    fn test_pop_keeps_base() {
        let mut stack = StateStack::<Mini>::new();
        assert_eq!(stack.pop(), None);
        stack.apply(Action::Pop);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Mini::Outer);
    }

    #[test]
    fn test_goto_replaces_top() {
        let mut stack = StateStack::<Mini>::new();
        stack.apply(Action::GoTo(Mini::Inner));
        assert_eq!(stack.as_slice(), &[Mini::Inner]);

        stack.apply(Action::Push(Mini::Outer));
        stack.apply(Action::GoTo(Mini::Inner));
        assert_eq!(stack.as_slice(), &[Mini::Inner, Mini::Inner]);

        stack.apply(Action::Stay);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_try_from_empty() {
        let result = StateStack::<Mini>::try_from(Vec::new());
        assert_eq!(result, Err(StackError::Empty));
    }
}
