//! Sitemap Handler
//!
//! 根路径返回可用接口列表（HTML）

use axum::response::Html;

/// (method, path, description)
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/ping", "Health check"),
    ("GET", "/members", "List all family members"),
    ("GET", "/members/{id}", "Get a member by id"),
    ("POST", "/members", "Add a member (first_name, age, lucky_numbers)"),
    ("DELETE", "/members/{id}", "Delete a member by id"),
];

/// 生成 sitemap
pub async fn sitemap() -> Html<String> {
    let items: String = ENDPOINTS
        .iter()
        .map(|(method, path, description)| {
            if path.contains('{') || *method != "GET" {
                format!("<li><code>{} {}</code> {}</li>", method, path, description)
            } else {
                format!(
                    "<li><code>{} <a href=\"{}\">{}</a></code> {}</li>",
                    method, path, path, description
                )
            }
        })
        .collect();

    Html(format!(
        "<!DOCTYPE html><html><head><title>Family API</title></head>\
         <body><h1>Family API</h1><p>Endpoints:</p><ul>{}</ul></body></html>",
        items
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sitemap_lists_endpoints() {
        let Html(body) = sitemap().await;

        assert!(body.contains("<a href=\"/members\">/members</a>"));
        assert!(body.contains("DELETE /members/{id}"));
        assert_eq!(body.matches("<li>").count(), ENDPOINTS.len());
    }
}
