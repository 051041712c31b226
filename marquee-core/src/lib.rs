//! Core of the marquee movie browser
//!
//! Follows a Redux/Elm-style loop:
//!
//! - **Route**: parsed from the location fragment, the only routing signal
//! - **Action**: intents from the UI and results from the movie gateway
//! - **Reducer**: the single place state changes; returns [`Effect`]s
//! - **Store**: owns [`AppState`] and runs middleware around the reducer
//! - **Component**: pure UI elements that render from props
//!
//! # Fetch results and generations
//!
//! Every route change bumps [`Generation`]. Each fetch effect carries the
//! generation it was issued under, and its result action carries it back.
//! The reducer applies a result only while its generation is current, so
//! a slow response for a page the user already left is dropped.
//!
//! ```ignore
//! use marquee_core::{Action, AppState, Store};
//!
//! let mut store = Store::new(AppState::default());
//! let result = store.dispatch(Action::RouteFragmentChanged("#movie=550".into()));
//! // result.effects == [Effect::Fetch { generation: Generation(1),
//! //                                    request: FetchRequest::MovieDetail { id: 550 } }]
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod history;
pub mod layout;
pub mod model;
pub mod reducer;
pub mod route;
pub mod state;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use effect::{DispatchResult, Effect, FetchRequest};
pub use event::{parse_key_string, EventKind};
pub use history::History;
pub use layout::LayoutFlags;
pub use model::{poster_url, Category, ImageSize, Movie, DEFAULT_IMAGE_BASE_URL};
pub use reducer::{fetches_for, reducer};
pub use route::{Route, RouteError};
pub use state::{AppState, CategoryContainer, Containers, Generation, MovieContainer, Pane};
pub use store::{LoggingMiddleware, Middleware, NoopMiddleware, Store};
