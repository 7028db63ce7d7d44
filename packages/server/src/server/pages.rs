//! Inline HTML views.
//!
//! Deliberately plain string rendering: three small pages do not
//! justify a template engine. Anything interpolated from data goes
//! through [`escape`].

use crate::domains::directory::{interest_categories, Attendee};

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

pub fn login_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape(message)),
        None => String::new(),
    };
    let body = format!(
        "<h1>Attendee Directory</h1>\n\
         {error_html}\
         <form method=\"post\" action=\"/login\">\n\
         <label for=\"phone\">Phone number</label>\n\
         <input type=\"tel\" id=\"phone\" name=\"phone\" autocomplete=\"tel\" required>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>"
    );
    layout("Log in", &body)
}

pub fn expired_page() -> String {
    let body = "<h1>This directory has expired</h1>\n\
                <p>The attendee directory is no longer available.</p>";
    layout("Directory expired", body)
}

pub fn directory_page(attendees: &[&Attendee]) -> String {
    let mut body = String::from("<h1>Attendee Directory</h1>\n<p><a href=\"/logout\">Log out</a></p>\n");

    // Filter dropdown over the full interest catalog.
    body.push_str("<select id=\"interest-filter\">\n<option value=\"\">All interests</option>\n");
    for (category, interests) in interest_categories() {
        body.push_str(&format!("<optgroup label=\"{}\">\n", escape(category)));
        for interest in interests {
            body.push_str(&format!(
                "<option value=\"{0}\">{0}</option>\n",
                escape(interest)
            ));
        }
        body.push_str("</optgroup>\n");
    }
    body.push_str("</select>\n");

    body.push_str("<ul class=\"attendees\">\n");
    for attendee in attendees {
        let tags: Vec<String> = attendee
            .interests
            .iter()
            .filter(|(_, &interested)| interested)
            .map(|(interest, _)| format!("<span class=\"tag\">{}</span>", escape(interest)))
            .collect();
        body.push_str(&format!(
            "<li data-phone=\"{phone}\">\
             <strong>{name}</strong> \
             <a class=\"phone\" href=\"tel:{phone}\">{display}</a> \
             {tags}</li>\n",
            phone = escape(attendee.phone.as_str()),
            name = escape(&attendee.name),
            display = escape(&attendee.display_phone),
            tags = tags.join(" "),
        ));
    }
    body.push_str("</ul>");

    layout("Attendee Directory", &body)
}
