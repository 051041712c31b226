//! Effect handling: turn fetch requests into gateway calls and result actions

use std::sync::Arc;

use marquee_api::{GatewayError, MovieGateway};
use marquee_core::{Action, Effect, FetchRequest, Generation, Movie, MovieContainer};

use crate::tasks::TaskManager;

/// Run one request against the gateway and wrap the outcome in an action
/// tagged with `generation`.
pub async fn run_fetch(
    gateway: Arc<dyn MovieGateway>,
    generation: Generation,
    request: FetchRequest,
) -> Action {
    let outcome = match &request {
        FetchRequest::TrendingMovies { target } => {
            movies(gateway.trending_movies().await, generation, *target)
        }
        FetchRequest::Categories { target } => {
            gateway
                .categories()
                .await
                .map(|categories| Action::CategoriesDidLoad {
                    generation,
                    target: *target,
                    categories,
                })
        }
        FetchRequest::MoviesByCategory { category_id } => movies(
            gateway.movies_by_category(*category_id).await,
            generation,
            MovieContainer::GenericList,
        ),
        FetchRequest::SearchMovies { query } => movies(
            gateway.search_movies(query).await,
            generation,
            MovieContainer::GenericList,
        ),
        FetchRequest::MovieDetail { id } => gateway
            .movie(*id)
            .await
            .map(|movie| Action::MovieDidLoad { generation, movie }),
        FetchRequest::Recommendations { id } => movies(
            gateway.recommendations(*id).await,
            generation,
            MovieContainer::RelatedMovies,
        ),
    };

    outcome.unwrap_or_else(|err| Action::FetchDidFail {
        generation,
        error: err.report(),
        request,
    })
}

fn movies(
    result: Result<Vec<Movie>, GatewayError>,
    generation: Generation,
    target: MovieContainer,
) -> Result<Action, GatewayError> {
    result.map(|movies| Action::MoviesDidLoad {
        generation,
        target,
        movies,
    })
}

/// Spawn the work an effect asks for.
///
/// Tasks are keyed by destination container; a newer fetch into the same
/// container aborts the one it supersedes.
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager, gateway: &Arc<dyn MovieGateway>) {
    match effect {
        Effect::Fetch {
            generation,
            request,
        } => {
            tracing::debug!(
                request = request.name(),
                generation = generation.0,
                "Spawning fetch"
            );
            let key = request.task_key();
            let gateway = Arc::clone(gateway);
            tasks.spawn(key, run_fetch(gateway, generation, request));
        }
    }
}
