use log::debug;
use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::state::ScrollRequest;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
}

/// Where scroll requests land. The browser implementation is the only one
/// outside of tests.
pub trait Viewport {
    fn scroll_to_top(&self);
    fn scroll_into_view(&self, id: &str) -> Result<(), ScrollError>;
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), ScrollError> {
        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
        let document = window.document().ok_or(ScrollError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| ScrollError::MissingElement(id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Carry out a scroll request. Missing targets are dropped silently.
pub fn perform(viewport: &impl Viewport, request: ScrollRequest) {
    match request {
        ScrollRequest::Top => viewport.scroll_to_top(),
        ScrollRequest::Section(section) => {
            if let Err(e) = viewport.scroll_into_view(section.id()) {
                debug!("Skipping scroll to #{}: {}", section.id(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Section;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingViewport {
        mounted: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl Viewport for RecordingViewport {
        fn scroll_to_top(&self) {
            self.calls.borrow_mut().push("top".to_string());
        }

        fn scroll_into_view(&self, id: &str) -> Result<(), ScrollError> {
            if self.mounted.contains(&id) {
                self.calls.borrow_mut().push(id.to_string());
                Ok(())
            } else {
                Err(ScrollError::MissingElement(id.to_string()))
            }
        }
    }

    #[test]
    fn top_request_scrolls_to_top() {
        let viewport = RecordingViewport::default();
        perform(&viewport, ScrollRequest::Top);
        assert_eq!(*viewport.calls.borrow(), vec!["top"]);
    }

    #[test]
    fn section_request_scrolls_to_mounted_element() {
        let viewport = RecordingViewport {
            mounted: vec!["features", "process", "contact"],
            ..Default::default()
        };
        perform(&viewport, ScrollRequest::Section(Section::Contact));
        assert_eq!(*viewport.calls.borrow(), vec!["contact"]);
    }

    #[test]
    fn missing_element_is_a_silent_no_op() {
        let viewport = RecordingViewport {
            mounted: vec!["features"],
            ..Default::default()
        };
        perform(&viewport, ScrollRequest::Section(Section::Process));
        assert!(viewport.calls.borrow().is_empty());
    }

    #[test]
    fn error_messages_name_the_target() {
        let err = ScrollError::MissingElement("nonexistent-id".to_string());
        assert_eq!(err.to_string(), "no element with id `nonexistent-id`");
    }
}
