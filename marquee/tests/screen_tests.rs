//! Whole-screen tests: reducer-driven state rendered through `MarqueeUi`,
//! and key presses mapped back to actions.

use marquee::MarqueeUi;
use marquee_core::testing::{key_event, type_text, RenderHarness, TestHarness};
use marquee_core::{
    assert_emitted, Action, AppState, Category, CategoryContainer, Movie, MovieContainer, Pane,
    Route,
};

fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.into(),
        overview: format!("{title} overview."),
        poster_path: Some(format!("/{id}.jpg")),
        vote_average: 7.5,
        genres: vec![Category {
            id: 18,
            name: "Drama".into(),
        }],
    }
}

fn action_category() -> Category {
    Category {
        id: 28,
        name: "Action".into(),
    }
}

fn render(ui: &mut MarqueeUi, state: &AppState) -> String {
    let mut harness = RenderHarness::new(100, 30);
    harness.render_to_string_plain(|frame| ui.render(frame, state))
}

/// Map an event through the UI and run the resulting actions
fn press(harness: &mut TestHarness, ui: &mut MarqueeUi, key: &str) -> Vec<Action> {
    let actions = ui.map_event(&key_event(key), &harness.state).actions;
    harness.dispatch_all(actions.clone());
    actions
}

fn loaded_home() -> TestHarness {
    let mut harness = TestHarness::default();
    harness.dispatch(Action::RouteFragmentChanged(String::new()));
    let generation = harness.state.generation;
    harness.dispatch(Action::MoviesDidLoad {
        generation,
        target: MovieContainer::TrendingPreview,
        movies: vec![movie(550, "Fight Club"), movie(680, "Pulp Fiction")],
    });
    harness.dispatch(Action::CategoriesDidLoad {
        generation,
        target: CategoryContainer::CategoriesPreview,
        categories: vec![action_category()],
    });
    harness
}

#[test]
fn test_home_screen() {
    let harness = loaded_home();
    let mut ui = MarqueeUi::new();

    let screen = render(&mut ui, &harness.state);

    assert!(screen.contains("MARQUEE"));
    assert!(screen.contains("Search"));
    assert!(screen.contains("Trending"));
    assert!(screen.contains("Fight Club"));
    assert!(screen.contains("• Action"));
    assert!(screen.contains("t trends"));
    assert!(!screen.contains("Loading..."));
}

#[test]
fn test_loading_placeholder_before_results() {
    let mut harness = TestHarness::default();
    harness.dispatch(Action::RouteFragmentChanged("#trends".into()));
    let mut ui = MarqueeUi::new();

    let screen = render(&mut ui, &harness.state);

    assert!(screen.contains("Trends"));
    assert!(screen.contains("Loading..."));
}

#[test]
fn test_enter_on_trending_opens_movie() {
    let mut harness = loaded_home();
    let mut ui = MarqueeUi::new();
    assert_eq!(harness.state.focus, Some(Pane::Trending));

    press(&mut harness, &mut ui, "j");
    let actions = press(&mut harness, &mut ui, "enter");

    assert_emitted!(actions, Action::NavigateTo(f) if f == "#movie=680");
    assert_eq!(harness.state.route, Route::MovieDetail { id: 680 });
}

#[test]
fn test_category_row_opens_category() {
    let mut harness = loaded_home();
    let mut ui = MarqueeUi::new();

    press(&mut harness, &mut ui, "tab");
    assert_eq!(harness.state.focus, Some(Pane::Categories));
    let actions = press(&mut harness, &mut ui, "enter");

    assert_emitted!(actions, Action::NavigateTo(f) if f == "#category=28-Action");
    assert_eq!(harness.state.category_title.as_deref(), Some("Action"));

    let screen = render(&mut ui, &harness.state);
    assert!(screen.contains("< Action"));
}

#[test]
fn test_search_flow() {
    let mut harness = loaded_home();
    let mut ui = MarqueeUi::new();

    press(&mut harness, &mut ui, "/");
    assert_eq!(harness.state.focus, Some(Pane::Search));

    for event in type_text("Deadpool") {
        let actions = ui.map_event(&event, &harness.state).actions;
        harness.dispatch_all(actions);
    }
    assert_eq!(harness.state.search_input, "Deadpool");

    // Global keys are plain text while the form has focus
    let actions = press(&mut harness, &mut ui, "q");
    assert_eq!(actions, vec![Action::SearchInputChange("Deadpoolq".into())]);
    press(&mut harness, &mut ui, "backspace");

    let actions = press(&mut harness, &mut ui, "enter");
    assert_emitted!(actions, Action::NavigateTo(f) if f == "#search=Deadpool");
    assert_eq!(
        harness.state.route,
        Route::Search {
            query: "Deadpool".into()
        }
    );
    assert_eq!(harness.state.focus, Some(Pane::List));

    let screen = render(&mut ui, &harness.state);
    assert!(screen.contains("Results for \"Deadpool\""));
}

#[test]
fn test_trends_then_back() {
    let mut harness = loaded_home();
    let mut ui = MarqueeUi::new();

    press(&mut harness, &mut ui, "t");
    assert_eq!(harness.state.route, Route::Trends);

    let actions = press(&mut harness, &mut ui, "esc");
    assert_eq!(actions, vec![Action::HistoryBack]);
    assert_eq!(harness.state.route, Route::Home);

    // No back arrow on home
    let actions = press(&mut harness, &mut ui, "esc");
    assert!(actions.is_empty());
}

#[test]
fn test_movie_screen() {
    let mut harness = TestHarness::default();
    harness.dispatch(Action::RouteFragmentChanged("#movie=550".into()));
    let generation = harness.state.generation;

    let result = harness.dispatch(Action::MovieDidLoad {
        generation,
        movie: movie(550, "Fight Club"),
    });
    assert_eq!(result.effects.len(), 1);
    harness.dispatch(Action::MoviesDidLoad {
        generation,
        target: MovieContainer::RelatedMovies,
        movies: vec![movie(807, "Se7en")],
    });

    let mut ui = MarqueeUi::new();
    let screen = render(&mut ui, &harness.state);

    assert!(screen.contains("Fight Club overview."));
    assert!(screen.contains("https://image.tmdb.org/t/p/w500/550.jpg"));
    assert!(screen.contains("• Drama"));
    assert!(screen.contains("Related movies"));
    assert!(screen.contains("Se7en"));
    assert!(screen.contains("Esc back"));
    assert!(!screen.contains("MARQUEE"));
}

#[test]
fn test_page_down_scrolls_detail() {
    let mut harness = TestHarness::default();
    harness.dispatch(Action::RouteFragmentChanged("#movie=550".into()));
    let generation = harness.state.generation;
    harness.dispatch(Action::MovieDidLoad {
        generation,
        movie: movie(550, "Fight Club"),
    });
    let mut ui = MarqueeUi::new();

    press(&mut harness, &mut ui, "pagedown");
    assert_eq!(harness.state.detail_scroll, 5);
}

#[test]
fn test_address_bar_navigation() {
    let mut harness = loaded_home();
    let mut ui = MarqueeUi::new();

    press(&mut harness, &mut ui, ":");
    assert_eq!(harness.state.address_bar.as_deref(), Some(""));

    for event in type_text("#movie=550") {
        let actions = ui.map_event(&event, &harness.state).actions;
        harness.dispatch_all(actions);
    }
    let screen = render(&mut ui, &harness.state);
    assert!(screen.contains("Go to"));
    assert!(screen.contains("#movie=550"));

    let actions = press(&mut harness, &mut ui, "enter");
    assert_emitted!(actions, Action::NavigateTo(f) if f == "#movie=550");
    assert_eq!(harness.state.route, Route::MovieDetail { id: 550 });
    assert_eq!(harness.state.address_bar, None);
}

#[test]
fn test_address_bar_malformed_fragment_goes_home() {
    let mut harness = TestHarness::default();
    harness.dispatch(Action::RouteFragmentChanged("#trends".into()));
    let mut ui = MarqueeUi::new();

    press(&mut harness, &mut ui, ":");
    press(&mut harness, &mut ui, "ctrl+u");
    for event in type_text("#movie=abc") {
        let actions = ui.map_event(&event, &harness.state).actions;
        harness.dispatch_all(actions);
    }
    press(&mut harness, &mut ui, "enter");

    assert_eq!(harness.state.route, Route::Home);
    assert_eq!(harness.state.fragment, "#movie=abc");
}

#[test]
fn test_stale_result_does_not_reach_screen() {
    let mut harness = TestHarness::default();
    harness.dispatch(Action::RouteFragmentChanged("#trends".into()));
    let stale = harness.state.generation;
    harness.dispatch(Action::NavigateTo("#search=Alien".into()));

    harness.dispatch(Action::MoviesDidLoad {
        generation: stale,
        target: MovieContainer::GenericList,
        movies: vec![movie(1, "Stale Trend")],
    });

    let mut ui = MarqueeUi::new();
    let screen = render(&mut ui, &harness.state);
    assert!(!screen.contains("Stale Trend"));
    assert!(harness.state.containers.generic_list.is_empty());
}

#[test]
fn test_quit_keys() {
    let harness = loaded_home();
    let mut ui = MarqueeUi::new();

    assert_eq!(
        ui.map_event(&key_event("q"), &harness.state).actions,
        vec![Action::Quit]
    );
    assert_eq!(
        ui.map_event(&key_event("ctrl+c"), &harness.state).actions,
        vec![Action::Quit]
    );
}
