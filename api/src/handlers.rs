use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_poem::{GraphQLRequest, GraphQLResponse};
use poem::{
    handler,
    web::{Data, Html, Json},
    IntoResponse, Result,
};

use crate::{invocation::Invocation, objects::Customer, AppState};

#[handler]
pub fn health() {}

#[handler]
pub fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

#[handler]
pub async fn graphql_handler(Data(state): Data<&AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.0).await.into()
}

/// Entry point for gateway field invocations forwarded by the function runtime.
#[handler]
pub async fn invoke(
    Data(state): Data<&AppState>,
    Json(invocation): Json<Invocation>,
) -> Result<Json<Customer>> {
    let customer = state.resolver.handle(invocation).await?;

    Ok(Json(customer))
}
