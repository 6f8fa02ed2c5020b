//! Page navigation

use super::View;

/// Path of the home page listing questions
pub const HOME_PATH: &str = "/";

/// Path of the ask-a-question page
pub const ASK_QUESTION_PATH: &str = "/ask-question";

/// Performs page transitions by path
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Current view plus the history needed to go back
#[derive(Debug, Default)]
pub struct Router {
    current_view: View,
    history: Vec<View>,
}

impl Router {
    pub fn current_view(&self) -> &View {
        &self.current_view
    }

    /// Path of the current page
    pub fn current_path(&self) -> &'static str {
        self.current_view.path()
    }

    /// Navigate to a view, remembering where we came from
    pub fn navigate_to(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        let previous = std::mem::replace(&mut self.current_view, view);
        self.history.push(previous);
    }

    /// Go back to the last non-form view
    pub fn go_back(&mut self) {
        while let Some(view) = self.history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.current_view = view;
            return;
        }
        self.current_view = View::default();
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) {
        match View::from_path(path) {
            Some(view) => self.navigate_to(view),
            None => tracing::warn!("No page for path {path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let router = Router::default();
        assert_eq!(router.current_view(), &View::Questions);
        assert_eq!(router.current_path(), HOME_PATH);
    }

    #[test]
    fn test_navigate_by_path() {
        let mut router = Router::default();
        router.navigate(ASK_QUESTION_PATH);
        assert_eq!(router.current_view(), &View::AskQuestion);
        assert_eq!(router.current_path(), ASK_QUESTION_PATH);
    }

    #[test]
    fn test_unknown_path_stays_put() {
        let mut router = Router::default();
        router.navigate("/profile/123");
        assert_eq!(router.current_view(), &View::Questions);
    }

    #[test]
    fn test_go_back_returns_to_listing() {
        let mut router = Router::default();
        router.navigate(ASK_QUESTION_PATH);
        router.go_back();
        assert_eq!(router.current_view(), &View::Questions);
    }

    #[test]
    fn test_go_back_skips_form_views() {
        let mut router = Router::default();
        router.navigate_to(View::AskQuestion);
        router.navigate_to(View::Questions);
        router.navigate_to(View::AskQuestion);
        router.navigate_to(View::Questions);
        router.go_back();
        assert_eq!(router.current_view(), &View::Questions);
    }

    #[test]
    fn test_go_back_with_empty_history_goes_home() {
        let mut router = Router::default();
        router.go_back();
        assert_eq!(router.current_view(), &View::Questions);
    }

    #[test]
    fn test_navigate_to_same_view_does_not_grow_history() {
        let mut router = Router::default();
        router.navigate(HOME_PATH);
        router.navigate(HOME_PATH);
        assert!(router.history.is_empty());
    }
}
