//! HTML rendering of a dashboard snapshot.
//!
//! The page is a single self-contained document: inline styles, no scripts,
//! no external assets besides the map image.

use crate::dashboard::DashboardSnapshot;
use crate::fixtures::{
    ContactSample, BRAND, DEVICE_INFO, DEVICE_SYNC_NOTE, FOOTER_TEXT, MAP_ASSET_PATH, MAP_CAPTION,
    SAMPLE_CONTACTS, SAMPLE_MESSAGES,
};
use crate::navigation::DashboardCard;

const STYLE: &str = r##"
:root { --accent: #2563eb; --muted: #9ca3af; --panel: #f8f8f8; --bg: #f2f4f7; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; height: 100vh; display: flex; flex-direction: column; }
header { display: flex; justify-content: space-between; align-items: center; padding: 12px 32px; border-bottom: 1px solid #e5e7eb; }
header .brand { font-size: 24px; font-weight: 700; color: var(--accent); letter-spacing: 1px; }
.layout { display: flex; flex: 1; overflow: hidden; background: var(--bg); }
aside { width: 256px; background: var(--panel); border-right: 1px solid #e5e7eb; }
aside.closed { display: none; }
aside .updated { font-size: 12px; color: var(--muted); padding: 16px; }
aside button { width: 100%; text-align: left; padding: 8px 24px; border: 0; background: none; }
aside button.current { font-weight: 600; color: var(--accent); background: #e8f0fe; }
.badge { margin-left: 8px; background: var(--accent); color: #fff; font-size: 10px; padding: 0 8px; border-radius: 999px; font-weight: 700; }
main { flex: 1; overflow-y: auto; padding: 32px; }
main.blocked { pointer-events: none; user-select: none; filter: blur(4px); }
.card { background: #fff; padding: 24px; border-radius: 12px; border: 1px solid #f3f4f6; }
.grid { display: grid; gap: 24px; margin-bottom: 28px; }
.bar { display: inline-block; width: 96px; height: 8px; background: #dbeafe; border-radius: 999px; overflow: hidden; }
.bar span { display: block; height: 8px; background: var(--accent); }
.overlay { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,.4); backdrop-filter: blur(4px); }
.dialog { background: #fff; border-radius: 8px; padding: 32px; max-width: 320px; text-align: center; }
.error { color: #dc2626; font-size: 12px; }
footer { text-align: center; padding: 16px; border-top: 1px solid #e5e7eb; background: var(--panel); }
footer span { color: #dc2626; text-decoration: line-through; font-weight: 700; }
"##;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render the whole page for `snapshot`.
pub fn render_html(snapshot: &DashboardSnapshot) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{BRAND} Dashboard</title>\n<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_header(snapshot));
    html.push_str("<div class=\"layout\">\n");
    html.push_str(&render_sidebar(snapshot));

    let main_class = if snapshot.content_blocked { " class=\"blocked\"" } else { "" };
    html.push_str(&format!("<main{main_class}>\n"));
    html.push_str(&render_dashboard(snapshot));
    html.push_str("</main>\n");

    if let Some(modal) = &snapshot.modal {
        html.push_str(&format!(
            "<div class=\"overlay\" id=\"restricted-modal\"><div class=\"dialog\">\
             <h2>{}</h2><p>{}</p>\
             <a href=\"{}\">{}</a>\
             <button type=\"button\" name=\"close-modal\">{}</button>\
             </div></div>\n",
            escape_html(modal.title),
            escape_html(modal.body),
            escape_html(&modal.mailto()),
            escape_html(modal.contact_label),
            escape_html(modal.back_label),
        ));
    }

    if !snapshot.authenticated {
        html.push_str(&render_login(snapshot));
    }

    html.push_str("</div>\n");
    html.push_str(&format!("<footer><span>{}</span></footer>\n", escape_html(FOOTER_TEXT)));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(snapshot: &DashboardSnapshot) -> String {
    let options: String = snapshot
        .languages
        .iter()
        .map(|lang| {
            let selected = if *lang == snapshot.selected_language { " selected" } else { "" };
            format!("<option{selected}>{}</option>", escape_html(lang))
        })
        .collect();

    format!(
        "<header><span class=\"brand\">{BRAND}</span>\
         <select name=\"language\"{}>{options}</select></header>\n",
        disabled_attr(!snapshot.authenticated),
    )
}

fn render_sidebar(snapshot: &DashboardSnapshot) -> String {
    let class = if snapshot.view.sidebar_open { "open" } else { "closed" };
    let mut html = format!(
        "<aside class=\"{class}\" data-layout=\"{}\">\
         <div class=\"updated\">Updated: {}</div>\
         <div class=\"device\">📱 {}</div>\n<nav><ul>\n",
        match snapshot.layout {
            crate::navigation::Layout::Wide => "wide",
            crate::navigation::Layout::Narrow => "narrow",
        },
        escape_html(&snapshot.updated),
        escape_html(snapshot.device_name),
    );

    for entry in &snapshot.nav_items {
        let class = if entry.current { " class=\"current\"" } else { "" };
        let badge = if entry.is_new { "<span class=\"badge\">NEW</span>" } else { "" };
        html.push_str(&format!(
            "<li><button type=\"button\"{class}{}>{} {}{badge}</button></li>\n",
            disabled_attr(entry.current || !snapshot.authenticated),
            entry.icon,
            escape_html(entry.name),
        ));
    }

    html.push_str("</ul></nav></aside>\n");
    html
}

fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut html = String::from("<h1>Dashboard</h1>\n<div class=\"grid\">\n");

    html.push_str("<div class=\"card\"><h3>Device information</h3>");
    for field in DEVICE_INFO.iter() {
        html.push_str(&format!(
            "<div><strong>{}</strong> : {}</div>",
            escape_html(field.label),
            escape_html(field.value)
        ));
    }
    html.push_str(&format!("<small>{}</small></div>\n", escape_html(DEVICE_SYNC_NOTE)));

    html.push_str(&render_preview_card(DashboardCard::RecentCalls, &SAMPLE_CONTACTS));
    html.push_str(&render_preview_card(DashboardCard::RecentMessages, &SAMPLE_MESSAGES));
    html.push_str("</div>\n<div class=\"grid\">\n");

    html.push_str("<div class=\"card\" id=\"phone-activities\"><h3>Phone Activities</h3>\n");
    for bar in &snapshot.bars {
        html.push_str(&format!(
            "<div class=\"activity\">{} <strong>{}</strong> \
             <span class=\"bar\"><span style=\"width: {:.1}%\"></span></span> {}</div>\n",
            bar.icon,
            bar.label,
            bar.width_percent.clamp(0.0, 100.0),
            bar.value,
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"card\"><h3>Last Known Locations</h3>\
         <img src=\"{}\" alt=\"Map\"><small>{}</small></div>\n",
        escape_html(MAP_ASSET_PATH),
        escape_html(MAP_CAPTION),
    ));
    html.push_str("</div>\n");
    html
}

// Only the first sample row is shown; the list is faded out and inert.
fn render_preview_card(card: DashboardCard, samples: &[ContactSample]) -> String {
    let row = samples
        .first()
        .map(|s| {
            format!(
                "<li><strong>{}</strong> <small>{}</small> <span>{}</span></li>",
                escape_html(s.name),
                escape_html(s.phone),
                s.count
            )
        })
        .unwrap_or_default();

    format!(
        "<button type=\"button\" class=\"card\" name=\"{}\"><h3>{} ▶</h3>\
         <ul style=\"opacity: .4; pointer-events: none\">{row}</ul></button>\n",
        match card {
            DashboardCard::RecentCalls => "card-calls",
            DashboardCard::RecentMessages => "card-messages",
        },
        escape_html(card.title()),
    )
}

fn render_login(snapshot: &DashboardSnapshot) -> String {
    let error = snapshot
        .login_error
        .map(|e| format!("<div class=\"error\">{}</div>", escape_html(e)))
        .unwrap_or_default();

    format!(
        "<div class=\"overlay\" id=\"login\"><form class=\"dialog\">\
         <h2>Login Required</h2><p>Enter your access key to continue.</p>\
         <input type=\"password\" name=\"key\" placeholder=\"Enter key\" autofocus>\
         <button type=\"submit\">Login</button>{error}</form></div>\n"
    )
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}
