#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::future::Future;
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::autocomplete::{
        AutocompleteOptions, InputController, ListTarget, MessageKind, RenderTarget,
    };
    use crate::form::TextField;
    use crate::suggest::{FetchError, SuggestionService};

    /// One call made on a [`RecordingTarget`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RenderOp {
        Clear,
        Append(String),
        MarkSelected(Option<usize>),
        Message(MessageKind, String),
        Show,
        Hide,
    }

    /// Render target that logs every call
    #[derive(Debug, Default)]
    pub struct RecordingTarget {
        pub ops: Vec<RenderOp>,
    }

    impl RecordingTarget {
        /// Appended names since the last clear or message
        pub fn visible_items(&self) -> Vec<String> {
            let mut items = Vec::new();
            for op in &self.ops {
                match op {
                    RenderOp::Clear | RenderOp::Message(..) => items.clear(),
                    RenderOp::Append(name) => items.push(name.clone()),
                    _ => {}
                }
            }
            items
        }

        pub fn last_message(&self) -> Option<(MessageKind, String)> {
            self.ops.iter().rev().find_map(|op| match op {
                RenderOp::Message(kind, text) => Some((*kind, text.clone())),
                _ => None,
            })
        }
    }

    impl RenderTarget for RecordingTarget {
        fn clear(&mut self) {
            self.ops.push(RenderOp::Clear);
        }

        fn append_item(&mut self, name: &str) {
            self.ops.push(RenderOp::Append(name.to_string()));
        }

        fn mark_selected(&mut self, index: Option<usize>) {
            self.ops.push(RenderOp::MarkSelected(index));
        }

        fn show_message(&mut self, kind: MessageKind, text: &str) {
            self.ops.push(RenderOp::Message(kind, text.to_string()));
        }

        fn show(&mut self) {
            self.ops.push(RenderOp::Show);
        }

        fn hide(&mut self) {
            self.ops.push(RenderOp::Hide);
        }
    }

    /// Suggestion service answering from a fixed keyword table
    ///
    /// Keywords missing from the table yield an empty list. A keyword mapped
    /// to `None` fails with a 500 status.
    #[derive(Debug, Default, Clone)]
    pub struct StaticService {
        pub answers: HashMap<String, Option<Vec<String>>>,
        pub delays: HashMap<String, Duration>,
    }

    impl StaticService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answer(mut self, keyword: &str, names: &[&str]) -> Self {
            self.answers.insert(
                keyword.to_string(),
                Some(names.iter().map(|n| n.to_string()).collect()),
            );
            self
        }

        pub fn fail(mut self, keyword: &str) -> Self {
            self.answers.insert(keyword.to_string(), None);
            self
        }

        pub fn delay(mut self, keyword: &str, delay: Duration) -> Self {
            self.delays.insert(keyword.to_string(), delay);
            self
        }
    }

    impl SuggestionService for StaticService {
        fn suggest(
            &self,
            keyword: &str,
        ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send {
            let delay = self.delays.get(keyword).copied();
            let answer = self.answers.get(keyword).cloned();
            async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                match answer {
                    Some(Some(names)) => Ok(names),
                    Some(None) => Err(FetchError::Status(500)),
                    None => Ok(Vec::new()),
                }
            }
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn test_options() -> AutocompleteOptions {
        AutocompleteOptions::default()
    }

    /// Tag controller over `value`, cursor at the end
    pub fn controller_with(value: &str) -> InputController<ListTarget> {
        InputController::new(
            TextField::new("tags", "Tags").with_value(value),
            test_options(),
            ListTarget::new(),
        )
    }

    /// Type `text` one character at a time, `gap` apart, starting at `start`
    ///
    /// Returns the instant of the last keystroke.
    pub fn type_text<R: RenderTarget>(
        controller: &mut InputController<R>,
        text: &str,
        start: Instant,
        gap: Duration,
    ) -> Instant {
        let mut now = start;
        for (i, c) in text.chars().enumerate() {
            now = start + gap * i as u32;
            controller.edit(key(KeyCode::Char(c)), now);
        }
        now
    }

    pub fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Draft form app backed by `service`, focus on the title field
    pub fn test_app(title: &str, tags: &str, service: StaticService) -> App {
        App::new(title, tags, test_options(), service).unwrap()
    }

    /// Wait for the next worker response and apply it
    pub fn settle(app: &mut App) -> bool {
        let response = app
            .worker()
            .recv_timeout(Duration::from_secs(2))
            .expect("worker response");
        app.apply_response(response)
    }
}
