//! Modal dialogs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::info;

/// Modal message boxes
pub trait Dialogs {
    /// Show a message and wait for acknowledgement
    fn alert(&self, message: &str);

    /// Ask a yes/no question
    fn ask(&self, message: &str) -> bool;
}

#[derive(Default)]
struct Script {
    messages: Vec<String>,
    answers: VecDeque<bool>,
}

/// Dialogs answered from a queue.
///
/// Clones share state, so a test can keep one clone and hand the other to
/// the toolkit. An empty answer queue answers `false`.
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    script: Rc<RefCell<Script>>,
}

impl ScriptedDialogs {
    /// Dialogs with no queued answers
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for `ask`
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        let dialogs = Self::new();
        dialogs.script.borrow_mut().answers.extend(answers);
        dialogs
    }

    /// Every message shown so far
    pub fn messages(&self) -> Vec<String> {
        self.script.borrow().messages.clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&self, message: &str) {
        info!(message, "alert");
        self.script.borrow_mut().messages.push(message.to_string());
    }

    fn ask(&self, message: &str) -> bool {
        let mut script = self.script.borrow_mut();
        script.messages.push(message.to_string());
        let answer = script.answers.pop_front().unwrap_or(false);
        info!(message, answer, "ask");
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_in_order() {
        let dialogs = ScriptedDialogs::with_answers([true, false]);
        let shared = dialogs.clone();
        assert!(dialogs.ask("first?"));
        assert!(!dialogs.ask("second?"));
        assert!(!dialogs.ask("third?"));
        dialogs.alert("done");
        assert_eq!(shared.messages(), vec!["first?", "second?", "third?", "done"]);
    }
}
