//! Server-rendered HTML pages. The JSON endpoints do the real work; these
//! only give a browser something to click.

use axum::response::Html;
use compute::{FurnitureType, Material};
use tracing::instrument;

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
label{display:block;margin:.5rem 0}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{PAGE_STYLE}</style></head><body>{body}</body></html>"
    )
}

fn select(name: &str, options: impl Iterator<Item = &'static str>) -> String {
    let options: String = options
        .map(|value| format!("<option value=\"{value}\">{value}</option>"))
        .collect();
    format!("<select name=\"{name}\">{options}</select>")
}

/// Landing page with the price calculator.
#[instrument]
pub async fn landing() -> Html<String> {
    let materials = select("material", Material::ALL.iter().map(Material::as_str));
    let types = select("type", FurnitureType::ALL.iter().map(FurnitureType::as_str));

    let body = format!(
        "<h1>Custom furniture</h1>\
         <form method=\"get\" action=\"/calc\">\
         <label>Name <input name=\"name\" required></label>\
         <label>Phone <input name=\"phone\" required></label>\
         <label>City <input name=\"city\" required></label>\
         <label>Width, m <input name=\"width\" required></label>\
         <label>Height, m <input name=\"height\" required></label>\
         <label>Type {types}</label>\
         <label>Material {materials}</label>\
         <button type=\"submit\">Calculate and order</button>\
         </form>\
         <p><a href=\"/login\">Staff sign-in</a> | <a href=\"/dashboard\">Dashboard</a></p>"
    );
    Html(layout("Furniture workshop", &body))
}

/// The staff sign-in form. Served both on GET and after a failed attempt.
pub fn login_page() -> Html<String> {
    let body = "<h1>Staff sign-in</h1>\
                <form method=\"post\" action=\"/login\">\
                <label>Username <input name=\"username\" required></label>\
                <label>Password <input name=\"password\" type=\"password\" required></label>\
                <button type=\"submit\">Sign in</button>\
                </form>\
                <p><a href=\"/\">Back</a></p>";
    Html(layout("Sign in", body))
}
