#[utoipa::path(
    get,
    path = "/hello",
    tag = "Greetings",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hello() -> &'static str {
    "Hello world!"
}

#[utoipa::path(
    get,
    path = "/hi",
    tag = "Greetings",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hi() -> &'static str {
    "Hi! How're you?"
}
