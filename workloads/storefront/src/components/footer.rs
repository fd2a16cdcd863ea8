use chrono::{Datelike, Local};
use leptos::prelude::*;

const LINKS: [(&str, &str); 3] = [
    ("Terms of Service", "/terms"),
    ("Privacy Policy", "/privacy"),
    ("Help", "/help"),
];

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {} Amazon Clone. All rights reserved.", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let line = copyright_line(Local::now().year());
    let links = LINKS
        .iter()
        .map(|(label, href)| view! { <a href=*href>{*label}</a> })
        .collect::<Vec<_>>();

    view! {
        <footer>
            <nav class="footer-links">{links}</nav>
            <p>{line}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2024), "© 2024 Amazon Clone. All rights reserved.");
    }

    #[test]
    fn test_links_point_at_static_pages() {
        let hrefs: Vec<_> = LINKS.iter().map(|(_, href)| *href).collect();
        assert_eq!(hrefs, vec!["/terms", "/privacy", "/help"]);
    }
}
