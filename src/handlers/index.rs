//! Index route listing the available API routes.

use axum::response::Html;

/// Body served at `/`
pub const INDEX_PAGE: &str = "Welcome to the Climate API!<br/><br/>\
Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;<br/>";

/// Handle GET / requests
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
