//! Liveness greeting

use super::Route;

/// GET /
async fn hello_get() -> &'static str {
    "Hello World\n"
}

/// POST /
async fn hello_post() -> &'static str {
    "Hello World - POST\n"
}

pub fn routes() -> Vec<Route> {
    vec![Route::get("/", hello_get), Route::post("/", hello_post)]
}
