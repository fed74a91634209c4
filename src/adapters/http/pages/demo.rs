use axum::extract::Query;
use maud::{Markup, html};

use super::{
    DemoQuery,
    layout::page,
    phone_demo::{DEMO_CSS, DemoLinks, phone_demo},
};
use crate::domain::phone_demo::PhoneFrame;

/// Height the demo page asks for when the URL does not say otherwise.
const DEMO_PAGE_HEIGHT: u32 = 800;

pub async fn demo_page(Query(query): Query<DemoQuery>) -> Markup {
    let height = query.height();
    let frame = PhoneFrame::from_height(height.unwrap_or(DEMO_PAGE_HEIGHT));
    let links = DemoLinks {
        base_path: "/demo",
        height,
    };

    let content = html! {
        main class="dark" style="min-height:100vh" {
            div class="wrap" style="max-width:72rem;padding-top:4rem;padding-bottom:4rem" {
                header class="demo-header" {
                    h1 { "Conexus Demo" }
                    a href="/" { "\u{2190} Back" }
                }
                div class="grid-2" style="align-items:center" {
                    div {
                        h2 class="demo-title" {
                            "See how owners, tenants, and contractors flow through repairs"
                        }
                        p class="demo-lede" {
                            "Tap through each role\u{2019}s screens in the live phone. Use the tabs to switch roles, "
                            "swipe or use your arrow keys to step through."
                        }
                        a class="btn btn-accent" href="/#waitlist" { "Join the Waitlist" }
                    }
                    div {
                        (phone_demo(query.state(), frame, links))
                    }
                }
            }
        }
    };

    page(Some("Demo"), &format!("{DEMO_CSS}{DEMO_PAGE_CSS}"), content)
}

const DEMO_PAGE_CSS: &str = r#"
.demo-header{display:flex;align-items:center;justify-content:space-between;margin-bottom:2.5rem}
.demo-header h1{font-size:1.875rem}
.demo-header a{text-underline-offset:4px}
.demo-title{font-size:2.25rem;font-weight:800;line-height:1.15;margin-bottom:1rem}
.demo-lede{color:rgba(255,255,255,.9);margin-bottom:1.5rem}
"#;
