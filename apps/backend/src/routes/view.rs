//! Unauthenticated HTML listing of the catalog.

use std::fmt::Write as _;

use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::repos::videos::Video;
use crate::services::videos as video_service;
use crate::state::app_state::AppState;

/// Render the catalog as a minimal HTML page. Built by hand rather than a
/// template engine; the markup is a flat list.
async fn show_all(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let videos = video_service::list_videos(&app_state.db).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_listing(&videos)))
}

fn render_listing(videos: &[Video]) -> String {
    let mut html = String::with_capacity(256 + videos.len() * 160);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head><title>Video List</title></head>\n<body>\n<h1>Video List</h1>\n",
    );

    if videos.is_empty() {
        html.push_str("<p>No videos yet.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for video in videos {
            let _ = write!(
                html,
                "<li><a href=\"{url}\">{title}</a> by {author} ({email})</li>\n",
                url = escape_html(&video.url),
                title = escape_html(&video.title),
                author = escape_html(&video.author.name),
                email = escape_html(&video.author.email),
            );
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/view/").route(web::get().to(show_all)));
}
