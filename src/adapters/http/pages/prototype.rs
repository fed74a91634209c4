use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use super::layout::page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Step {
    #[default]
    Tenant,
    Pm,
    Contractor,
}

impl Step {
    const ALL: [Step; 3] = [Step::Tenant, Step::Pm, Step::Contractor];

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("pm") => Step::Pm,
            Some("contractor") => Step::Contractor,
            _ => Step::Tenant,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Step::Tenant => "tenant",
            Step::Pm => "pm",
            Step::Contractor => "contractor",
        }
    }

    fn button_label(&self) -> &'static str {
        match self {
            Step::Tenant => "Tenant",
            Step::Pm => "Property Manager",
            Step::Contractor => "Contractor",
        }
    }

    fn card(&self) -> (&'static str, &'static str) {
        match self {
            Step::Tenant => ("Tenant Flow", "Submit a repair with photos and preferred times."),
            Step::Pm => (
                "PM Dashboard",
                "Review SLAs, approve jobs, and track status in real time.",
            ),
            Step::Contractor => (
                "Contractor App",
                "Claim nearby jobs, chat, and get paid on completion.",
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PrototypeQuery {
    step: Option<String>,
}

pub async fn prototype_page(Query(query): Query<PrototypeQuery>) -> Markup {
    let step = Step::parse(query.step.as_deref());
    let (title, body) = step.card();

    let content = html! {
        div class="proto" {
            nav class="proto-steps" {
                @for s in Step::ALL {
                    a.proto-btn.active[s == step] href=(format!("/prototype?step={}", s.as_str())) {
                        (s.button_label())
                    }
                }
            }
            div class="proto-card" {
                h2 { (title) }
                p { (body) }
            }
        }
    };

    page(Some("Prototype"), PROTOTYPE_CSS, content)
}

const PROTOTYPE_CSS: &str = r#"
.proto{padding:24px}
.proto-steps{display:flex;gap:12px;margin-bottom:12px}
.proto-btn{padding:10px 14px;border-radius:10px;border:1px solid #DDD;background:#FFF;text-decoration:none;color:#1F1F1F}
.proto-btn.active{border-color:#14213D}
.proto-card{background:#FFF;border:1px solid #EEE;border-radius:14px;padding:16px}
.proto-card h2{margin-bottom:.5rem}
"#;
