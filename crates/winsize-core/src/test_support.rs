//! Test doubles for the permission, window and prompt seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::permissions::PermissionGate;
use crate::selector::SelectorError;
use crate::selector::prompter::{Prompter, TextValidator};
use crate::window::{Bounds, WindowError, WindowHandle, WindowSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCall {
    SetBounds { id: u32, bounds: Bounds },
    BringToTop { id: u32 },
}

/// Window that records every mutation into a log shared with the test.
#[derive(Debug)]
pub struct FakeWindow {
    id: u32,
    path: String,
    title: String,
    fail_set_bounds: bool,
    calls: Rc<RefCell<Vec<WindowCall>>>,
}

impl FakeWindow {
    pub fn new(id: u32, path: &str, title: &str) -> Self {
        Self {
            id,
            path: path.to_string(),
            title: title.to_string(),
            fail_set_bounds: false,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn failing_set_bounds(mut self) -> Self {
        self.fail_set_bounds = true;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Shared call log; stays readable after the window is moved away.
    pub fn calls(&self) -> Rc<RefCell<Vec<WindowCall>>> {
        Rc::clone(&self.calls)
    }
}

impl WindowHandle for FakeWindow {
    fn path(&self) -> &str {
        &self.path
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_bounds(&self, bounds: Bounds) -> Result<(), WindowError> {
        self.calls
            .borrow_mut()
            .push(WindowCall::SetBounds { id: self.id, bounds });
        if self.fail_set_bounds {
            return Err(WindowError::SetBoundsFailed {
                attribute: "AXPosition",
                code: -25200,
            });
        }
        Ok(())
    }

    fn bring_to_top(&self) -> Result<(), WindowError> {
        self.calls
            .borrow_mut()
            .push(WindowCall::BringToTop { id: self.id });
        Ok(())
    }
}

/// Source handing out a fixed window list once.
pub struct FakeSource {
    windows: RefCell<Option<Vec<FakeWindow>>>,
    fail: bool,
    list_calls: Cell<usize>,
}

impl FakeSource {
    pub fn new(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows: RefCell::new(Some(windows)),
            fail: false,
            list_calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            windows: RefCell::new(None),
            fail: true,
            list_calls: Cell::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }
}

impl WindowSource for FakeSource {
    type Window = FakeWindow;

    fn list_windows(&self) -> Result<Vec<FakeWindow>, WindowError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail {
            return Err(WindowError::EnumerationFailed {
                message: "window server unavailable".to_string(),
            });
        }
        Ok(self.windows.borrow_mut().take().unwrap_or_default())
    }
}

pub struct FakeGate {
    screen_capture: bool,
    accessibility_requests: Cell<usize>,
}

impl FakeGate {
    pub fn granted() -> Self {
        Self {
            screen_capture: true,
            accessibility_requests: Cell::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            screen_capture: false,
            accessibility_requests: Cell::new(0),
        }
    }

    pub fn accessibility_requests(&self) -> usize {
        self.accessibility_requests.get()
    }
}

impl PermissionGate for FakeGate {
    fn request_accessibility(&self) {
        self.accessibility_requests
            .set(self.accessibility_requests.get() + 1);
    }

    fn has_screen_capture_permission(&self) -> bool {
        self.screen_capture
    }
}

/// Prompter replaying typed answers the way a user would enter them.
///
/// Rejected answers are recorded and the next scripted answer is tried, like
/// a re-prompt. Running out of answers behaves like the user cancelling.
pub struct ScriptedPrompter {
    pick_label: String,
    pick_index: Option<usize>,
    answers: VecDeque<String>,
    offered: Vec<String>,
    defaults: Vec<Option<String>>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(pick_label: &str, answers: &[&str]) -> Self {
        Self {
            pick_label: pick_label.to_string(),
            pick_index: None,
            answers: answers.iter().map(|a| a.to_string()).collect(),
            offered: Vec::new(),
            defaults: Vec::new(),
            rejections: Vec::new(),
        }
    }

    /// Pick by position instead of by label.
    pub fn pick_index(mut self, index: usize) -> Self {
        self.pick_index = Some(index);
        self
    }

    pub fn offered_labels(&self) -> &[String] {
        &self.offered
    }

    pub fn defaults(&self) -> &[Option<String>] {
        &self.defaults
    }

    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _message: &str, options: &[String]) -> Result<usize, SelectorError> {
        self.offered = options.to_vec();
        if let Some(index) = self.pick_index {
            return Ok(index);
        }
        options
            .iter()
            .position(|option| *option == self.pick_label)
            .ok_or(SelectorError::Cancelled)
    }

    fn text(
        &mut self,
        _message: &str,
        default: Option<&str>,
        validator: TextValidator,
    ) -> Result<String, SelectorError> {
        self.defaults.push(default.map(str::to_string));

        while let Some(typed) = self.answers.pop_front() {
            let answer = match default {
                Some(default) if typed.is_empty() => default.to_string(),
                _ => typed,
            };
            match validator(&answer) {
                Ok(()) => return Ok(answer),
                Err(message) => self.rejections.push(message),
            }
        }

        Err(SelectorError::Cancelled)
    }
}
