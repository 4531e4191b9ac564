//! Scripted console for testing.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use crate::session::Console;

/// Console that answers prompts from a fixed script.
///
/// Each `read_line` pops the next scripted line; once the script runs out it
/// reports a closed input stream. Prompts and messages are recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    messages: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        let console = Self::default();
        for input in inputs {
            console.push_input(input);
        }
        console
    }

    /// Append a line to the script.
    pub fn push_input(&self, input: &str) {
        self.inputs.lock().unwrap().push_back(input.to_string());
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Messages shown so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Scripted lines not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.inputs.lock().unwrap().pop_front())
    }

    fn say(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
