//! Root redirect and the static API reference page.

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Notes Service API</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    code { background: #f4f4f4; padding: 0.1rem 0.3rem; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
  </style>
</head>
<body>
  <h1>Notes Service API</h1>
  <p>A note is <code>{id, title, content, createdAt}</code>. <code>content</code> may be null.</p>
  <table>
    <tr><th>Method</th><th>Path</th><th>Body</th><th>Success</th><th>Failure</th></tr>
    <tr><td>POST</td><td>/notes</td><td><code>{title, content?}</code></td><td>201 + note</td><td>400 + <code>{errors}</code></td></tr>
    <tr><td>GET</td><td>/notes?q=...</td><td>—</td><td>200 + array</td><td>—</td></tr>
    <tr><td>GET</td><td>/notes/{id}</td><td>—</td><td>200 + note</td><td>404 + <code>{message}</code></td></tr>
    <tr><td>PUT</td><td>/notes/{id}</td><td><code>{title, content?}</code></td><td>200 + note</td><td>400 or 404</td></tr>
    <tr><td>DELETE</td><td>/notes/{id}</td><td>—</td><td>200 + <code>{message}</code></td><td>404 + <code>{message}</code></td></tr>
  </table>
  <p>Titles are 1–100 characters after trimming. Blank content is stored as null.
     Listing is newest-first; <code>q</code> filters title and content case-insensitively.</p>
</body>
</html>
"#;

async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/docs"))
        .finish()
}

async fn api_docs() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DOCS_HTML)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect));
    cfg.route("/docs", web::get().to(api_docs));
}
