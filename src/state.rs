//! View state for the whole site.
//!
//! Three independent axes (theme, page, mobile menu) plus the bookkeeping
//! for scroll requests. Transitions are pure so they can be exercised
//! without a browser; `App` drives them through `use_reducer`.

use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class placed on the root element; dark-variant styles hang off it.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Privacy,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Privacy => "privacy",
        }
    }
}

/// In-page anchors on the home view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    Process,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Features, Section::Process, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Process => "process",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Process => "Process",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    Top,
    Section(Section),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    ToggleTheme,
    NavigateTo(Page),
    ScrollToSection(Section),
    ToggleMenu,
    /// Fired by the home view once it is in the DOM.
    HomeMounted,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub theme: Theme,
    pub page: Page,
    pub menu_open: bool,
    /// Section scroll waiting for the home view to mount.
    pub deferred: Option<Section>,
    /// Latest scroll the rendering layer has to carry out after commit.
    pub scroll: Option<ScrollRequest>,
    /// Bumped every time `scroll` is (re)armed, so repeated requests for the
    /// same target still fire.
    pub scroll_ticket: u64,
}

impl ViewState {
    pub fn apply(&self, action: ViewAction) -> ViewState {
        let mut next = self.clone();
        match action {
            ViewAction::ToggleTheme => {
                next.theme = self.theme.toggled();
            }
            ViewAction::NavigateTo(page) => {
                next.page = page;
                next.deferred = None;
                next.menu_open = false;
                next.arm(ScrollRequest::Top);
            }
            ViewAction::ScrollToSection(section) => {
                if self.page == Page::Home {
                    next.arm(ScrollRequest::Section(section));
                } else {
                    next.page = Page::Home;
                    next.deferred = Some(section);
                }
                next.menu_open = false;
            }
            ViewAction::ToggleMenu => {
                next.menu_open = !self.menu_open;
            }
            ViewAction::HomeMounted => {
                if self.page == Page::Home {
                    if let Some(section) = next.deferred.take() {
                        next.arm(ScrollRequest::Section(section));
                    }
                }
            }
        }
        next
    }

    fn arm(&mut self, request: ScrollRequest) {
        self.scroll = Some(request);
        self.scroll_ticket = self.scroll_ticket.wrapping_add(1);
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[ViewAction]) -> ViewState {
        actions
            .iter()
            .fold(ViewState::default(), |state, action| state.apply(*action))
    }

    #[test]
    fn initial_state_is_light_home_closed() {
        let state = ViewState::default();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu_open);
        assert_eq!(state.scroll, None);
    }

    #[test]
    fn navigate_sets_page_closes_menu_and_scrolls_top() {
        let sequences = [
            vec![Page::Privacy],
            vec![Page::Home],
            vec![Page::Privacy, Page::Privacy, Page::Home],
            vec![Page::Home, Page::Privacy],
        ];
        for pages in sequences {
            let mut state = ViewState::default();
            for page in pages {
                state = state.apply(ViewAction::ToggleMenu);
                state = state.apply(ViewAction::NavigateTo(page));
                assert_eq!(state.page, page);
                assert!(!state.menu_open);
                assert_eq!(state.scroll, Some(ScrollRequest::Top));
            }
        }
    }

    #[test]
    fn open_menu_on_home_then_privacy() {
        let state = run(&[ViewAction::ToggleMenu]);
        assert!(state.menu_open);

        let state = state.apply(ViewAction::NavigateTo(Page::Privacy));
        assert_eq!(state.page, Page::Privacy);
        assert!(!state.menu_open);
        assert_eq!(state.scroll, Some(ScrollRequest::Top));
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        let start = ViewState::default();
        let once = start.apply(ViewAction::ToggleTheme);
        assert_eq!(once.theme, Theme::Dark);
        let twice = once.apply(ViewAction::ToggleTheme);
        assert_eq!(twice.theme, start.theme);
        assert_eq!(twice, start);
    }

    #[test]
    fn theme_survives_navigation() {
        let state = run(&[
            ViewAction::ToggleTheme,
            ViewAction::NavigateTo(Page::Privacy),
            ViewAction::ScrollToSection(Section::Process),
            ViewAction::HomeMounted,
        ]);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn menu_parity() {
        for n in 0..7 {
            let actions = vec![ViewAction::ToggleMenu; n];
            assert_eq!(run(&actions).menu_open, n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn scroll_on_home_is_immediate() {
        let state = run(&[ViewAction::ToggleMenu, ViewAction::ScrollToSection(Section::Features)]);
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu_open);
        assert_eq!(state.deferred, None);
        assert_eq!(state.scroll, Some(ScrollRequest::Section(Section::Features)));
    }

    #[test]
    fn scroll_from_privacy_waits_for_home_mount() {
        let state = run(&[
            ViewAction::NavigateTo(Page::Privacy),
            ViewAction::ScrollToSection(Section::Contact),
        ]);
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu_open);
        assert_eq!(state.deferred, Some(Section::Contact));
        assert_eq!(state.scroll, Some(ScrollRequest::Top));

        let ticket = state.scroll_ticket;
        let mounted = state.apply(ViewAction::HomeMounted);
        assert_eq!(mounted.deferred, None);
        assert_eq!(mounted.scroll, Some(ScrollRequest::Section(Section::Contact)));
        assert_eq!(mounted.scroll_ticket, ticket + 1);
    }

    #[test]
    fn home_mounted_without_deferred_scroll_changes_nothing() {
        let state = run(&[ViewAction::ScrollToSection(Section::Process)]);
        assert_eq!(state.apply(ViewAction::HomeMounted), state);
        assert_eq!(ViewState::default().apply(ViewAction::HomeMounted), ViewState::default());
    }

    #[test]
    fn navigate_cancels_deferred_scroll() {
        let state = run(&[
            ViewAction::NavigateTo(Page::Privacy),
            ViewAction::ScrollToSection(Section::Contact),
            ViewAction::NavigateTo(Page::Privacy),
            ViewAction::NavigateTo(Page::Home),
            ViewAction::HomeMounted,
        ]);
        assert_eq!(state.deferred, None);
        assert_eq!(state.scroll, Some(ScrollRequest::Top));
    }

    #[test]
    fn repeated_scroll_to_same_section_rearms() {
        let first = run(&[ViewAction::ScrollToSection(Section::Process)]);
        let second = first.apply(ViewAction::ScrollToSection(Section::Process));
        assert_eq!(first.scroll, second.scroll);
        assert_ne!(first.scroll_ticket, second.scroll_ticket);
    }

    #[test]
    fn identifiers() {
        assert_eq!(Page::Home.name(), "home");
        assert_eq!(Page::Privacy.name(), "privacy");
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["features", "process", "contact"]);
        assert_eq!(Theme::Dark.css_class(), Some("dark"));
        assert_eq!(Theme::Light.css_class(), None);
    }
}
