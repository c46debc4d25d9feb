//! Static shopping list page

use axum::{Router, response::Html, routing::get};

const SHOPPING_LIST_HTML: &str = include_str!("../../static/shopping-list.html");

async fn shopping_list() -> Html<&'static str> {
    Html(SHOPPING_LIST_HTML)
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(shopping_list))
        .route("/index", get(shopping_list))
        .route("/home", get(shopping_list))
        .route("/shopping-list.html", get(shopping_list))
}
