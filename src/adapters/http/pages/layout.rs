use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const SITE_NAME: &str = "Conexus";
pub const SITE_DESCRIPTION: &str = "Faster multifamily maintenance\u{2014}without the chaos.";
const THEME_COLOR: &str = "#14213D";

/// Wraps page content in the shared document shell. `title` renders as "<title> · Conexus".
pub fn page(title: Option<&str>, extra_css: &str, content: Markup) -> Markup {
    let full_title = match title {
        Some(t) => format!("{t} \u{b7} {SITE_NAME}"),
        None => SITE_NAME.to_string(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover";
                meta name="theme-color" content=(THEME_COLOR);
                title { (full_title) }
                meta name="description" content=(SITE_DESCRIPTION);
                meta property="og:title" content=(SITE_NAME);
                meta property="og:description" content=(SITE_DESCRIPTION);
                meta property="og:type" content="website";
                style { (PreEscaped(PAGE_CSS)) }
                @if !extra_css.is_empty() {
                    style { (PreEscaped(extra_css)) }
                }
            }
            body {
                (content)
            }
        }
    }
}

const PAGE_CSS: &str = r#"
:root{--navy:#14213D;--ink:#1F1F1F;--accent:#EDDC0B;--fg:#fff;--muted:rgba(255,255,255,.75);--border:rgba(255,255,255,.12)}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:Inter,system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;min-height:100vh;padding-bottom:env(safe-area-inset-bottom);-webkit-font-smoothing:antialiased;color:var(--ink)}
a{color:inherit}
.dark{background:linear-gradient(135deg,var(--navy),var(--ink));color:var(--fg)}
.wrap{max-width:80rem;margin:0 auto;padding:3rem 1.5rem}
.grid-2{display:grid;gap:2.5rem;align-items:start}
@media(min-width:1024px){.grid-2{grid-template-columns:1fr 1fr}}
.btn{display:inline-block;border:0;border-radius:.75rem;padding:.75rem 1.25rem;font-weight:700;cursor:pointer;text-decoration:none}
.btn-accent{background:var(--accent);color:var(--ink)}
.btn-navy{background:var(--navy);color:#fff}
"#;
