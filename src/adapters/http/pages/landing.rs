//! Landing page: hero with the waitlist form and embedded phone demo,
//! how-it-works, audience segments, a second call to action and the footer.

use axum::extract::Query;
use maud::{Markup, PreEscaped, html};
use time::OffsetDateTime;

use super::{
    DemoQuery,
    layout::{SITE_NAME, page},
    phone_demo::{DEMO_CSS, DemoLinks, phone_demo},
};
use crate::domain::phone_demo::PhoneFrame;

const HERO_DEMO_HEIGHT: u32 = 800;

const HERO_ROLES: &[&str] = &["Landlord / PM", "Contractor", "Investor"];
const CTA_ROLES: &[&str] = &["Landlord / PM", "Contractor", "Investor", "Tenant"];

pub async fn landing_page(Query(query): Query<DemoQuery>) -> Markup {
    let height = query.height();
    let frame = PhoneFrame::from_height(height.unwrap_or(HERO_DEMO_HEIGHT));
    let links = DemoLinks {
        base_path: "/",
        height,
    };
    let year = OffsetDateTime::now_utc().year();

    let content = html! {
        main class="dark" {
            section class="wrap grid-2" {
                div class="hero-copy" {
                    img class="logo" src="/logo.svg" alt=(SITE_NAME) width="400" height="96";
                    h1 class="hero-title" {
                        "Faster multifamily maintenance\u{2014}"
                        span class="accent" { "without the chaos" }
                    }
                    p class="hero-lede" {
                        "Post a repair, auto\u{2011}dispatch a vetted pro, track progress, and pay instantly. "
                        "Owners, PMs, and trades get a reliable, modern workflow."
                    }
                    ul class="bullets" {
                        li { span { "\u{26a1}" } span { strong { "Instant dispatch" } " to trusted contractors" } }
                        li { span { "\u{1f512}" } span { strong { "Secure payments" } " and transparent pricing" } }
                        li { span { "\u{1f4ca}" } span { strong { "Portfolio analytics" } " for owners & PMs" } }
                        li { span { "\u{1f4f1}" } span { strong { "Mobile\u{2011}first experience" } " tenants love" } }
                    }
                    (waitlist_form("hero", HERO_ROLES, "btn btn-accent"))
                    div class="chips" {
                        span class="chip" { "Stripe payouts" }
                        span class="chip" { "Supabase security" }
                        span class="chip" { "Contractor vetting" }
                    }
                }
                div class="hero-demo" {
                    div class="demo-card" {
                        div class="demo-card-head" {
                            a href="/demo" { "Open full screen \u{2192}" }
                        }
                        (phone_demo(query.state(), frame, links))
                    }
                }
            }
        }

        section class="light" {
            div class="wrap" {
                h2 class="section-title" { "How Conexus Works" }
                div class="cards" {
                    div class="card" {
                        div class="card-head" { "1\u{fe0f}\u{20e3} Create a request" }
                        p { "Tenants or PMs submit the issue in seconds, with photos and priority level." }
                    }
                    div class="card" {
                        div class="card-head" { "2\u{fe0f}\u{20e3} Auto\u{2011}dispatch & updates" }
                        p { "We match the job to a vetted pro, notify stakeholders, and keep everyone in the loop." }
                    }
                    div class="card" {
                        div class="card-head" { "3\u{fe0f}\u{20e3} Close & pay instantly" }
                        p { "Approve work, capture proof, and issue payment instantly\u{2014}clean records ready for accounting." }
                    }
                }
            }
        }

        section class="segments" {
            div class="wrap" {
                h2 class="section-title" { "Made for every side of maintenance" }
                div class="cards" {
                    (segment("Owners & PMs", &["Centralized work orders", "ETA & SLA visibility", "Unit\u{2011}level analytics"]))
                    (segment("Tenants", &["Modern, simple requests", "Real\u{2011}time updates", "Photo/video proofs"]))
                    (segment("Contractors", &["Steady, vetted jobs", "Clear scope & checklists", "Fast payouts"]))
                }
            }
        }

        section id="waitlist" class="light" {
            div class="wrap cta" {
                h2 class="section-title" { "Be first to try Conexus" }
                p class="cta-lede" {
                    "We\u{2019}re onboarding pilot customers now. Join the waitlist and we\u{2019}ll reach out with details."
                }
                (waitlist_form("cta", CTA_ROLES, "btn btn-navy"))
                p class="fineprint" {
                    "No spam. We\u{2019}ll only email about early access and product updates."
                }
            }
        }

        footer class="footer" {
            div class="wrap footer-row" {
                div class="footer-brand" {
                    img src="/logo.svg" alt=(SITE_NAME) width="28" height="28";
                    span { "\u{a9} " (year) " Conexus. All rights reserved." }
                }
                div class="footer-links" {
                    a href="/prototype" { "Prototype" }
                    a href="mailto:hello@conexusfix.com" { "Contact" }
                    span class="chip" { "Built with Rust" }
                }
            }
        }
        script { (PreEscaped(WAITLIST_JS)) }
    };

    page(None, &format!("{DEMO_CSS}{LANDING_CSS}"), content)
}

fn waitlist_form(id: &str, roles: &[&str], button_class: &str) -> Markup {
    html! {
        form class="waitlist-form" id=(format!("waitlist-{id}")) action="/api/waitlist" method="post" {
            input type="text" name="name" placeholder="Name (optional)" autocomplete="name";
            input type="email" name="email" placeholder="Email" required autocomplete="email";
            select name="role" {
                @for role in roles {
                    option { (role) }
                }
            }
            button type="submit" class=(button_class) { "Join the Waitlist" }
            div class="form-feedback" role="status" aria-live="polite" {}
        }
    }
}

fn segment(title: &str, points: &[&str]) -> Markup {
    html! {
        div class="card card-dark" {
            h3 { (title) }
            ul {
                @for point in points {
                    li { "\u{2022} " (point) }
                }
            }
        }
    }
}

/// Submits a waitlist form as JSON and shows the server's `error` on failure.
const WAITLIST_JS: &str = r#"
(function(){
  var OK="🎉 You’re on the list! We’ll be in touch.";
  document.querySelectorAll('form.waitlist-form').forEach(function(form){
    var feedback=form.querySelector('.form-feedback');
    var button=form.querySelector('button[type=submit]');
    form.addEventListener('submit',function(e){
      e.preventDefault();
      feedback.className='form-feedback';feedback.textContent='';
      button.disabled=true;
      var field=function(n){return form.querySelector('[name='+n+']').value;};
      var body={email:field('email'),name:field('name'),role:field('role')};
      fetch('/api/waitlist',{method:'POST',headers:{'Content-Type':'application/json'},body:JSON.stringify(body)})
        .then(function(res){
          return res.json().catch(function(){return {};}).then(function(data){
            if(!res.ok)throw new Error(data&&data.error?String(data.error):'Failed');
          });
        })
        .then(function(){
          feedback.className='form-feedback ok';feedback.textContent=OK;
          form.reset();
        })
        .catch(function(err){
          feedback.className='form-feedback err';
          feedback.textContent=(err&&err.message)||'Something went wrong.';
        })
        .finally(function(){button.disabled=false;});
    });
  });
})();
"#;

const LANDING_CSS: &str = r#"
.logo{width:auto;height:auto;max-width:400px;margin-bottom:1.5rem}
.hero-title{font-size:42px;font-weight:600;line-height:1.05;letter-spacing:-.02em;margin-bottom:1rem}
@media(min-width:640px){.hero-title{font-size:3.75rem}}
.accent{display:block;color:var(--accent)}
.hero-lede{font-size:1.125rem;color:rgba(255,255,255,.85);max-width:36rem;margin-bottom:1.5rem}
.bullets{list-style:none;display:grid;gap:.75rem;margin-bottom:1.75rem}
@media(min-width:640px){.bullets{grid-template-columns:1fr 1fr}}
.bullets li{display:flex;gap:.5rem}
.waitlist-form{display:flex;flex-wrap:wrap;align-items:center;gap:.75rem}
.waitlist-form input,.waitlist-form select{border-radius:.75rem;padding:.75rem 1rem;font:inherit}
.dark .waitlist-form input,.dark .waitlist-form select{border:1px solid rgba(255,255,255,.15);background:rgba(255,255,255,.05);color:#fff}
.dark .waitlist-form option{color:#000}
.light .waitlist-form{justify-content:center}
.light .waitlist-form input,.light .waitlist-form select{border:1px solid rgba(0,0,0,.1);background:#fff}
.waitlist-form input[type=text]{min-width:220px}
.waitlist-form input[type=email]{min-width:260px}
.form-feedback{flex-basis:100%;min-height:28px}
.form-feedback.ok,.form-feedback.err{display:inline-block;flex-basis:auto;border-radius:.375rem;padding:.5rem .75rem}
.form-feedback.ok{border:1px solid #B7E4C7;background:#E8F9EE;color:#064E3B}
.form-feedback.err{border:1px solid #FFB3B3;background:#FFE8E8;color:#7F1D1D}
.chips{margin-top:2rem;display:flex;flex-wrap:wrap;gap:1rem;font-size:.875rem;color:rgba(255,255,255,.7)}
.chip{border-radius:9999px;background:rgba(255,255,255,.05);padding:.25rem .75rem;border:1px solid var(--border)}
.demo-card{border-radius:1.5rem;background:rgba(255,255,255,.05);padding:1.5rem;border:1px solid var(--border)}
.demo-card-head{display:flex;justify-content:flex-end;margin-bottom:.75rem;font-size:.875rem}
.demo-card-head a{color:rgba(255,255,255,.8);text-underline-offset:4px}
.light{background:#fff;color:var(--ink)}
.segments{background:#0E1528;color:#fff}
.section-title{font-size:2.25rem;font-weight:600;letter-spacing:-.02em;margin-bottom:2rem}
.cards{display:grid;gap:1.5rem}
@media(min-width:768px){.cards{grid-template-columns:repeat(3,1fr)}}
.card{border-radius:1rem;border:1px solid rgba(0,0,0,.1);padding:1.5rem;background:#fff}
.card p{color:rgba(0,0,0,.7)}
.card-head{font-size:1.5rem;margin-bottom:.5rem}
.card-dark{border-color:var(--border);background:rgba(255,255,255,.05)}
.card-dark h3{font-size:1.25rem;margin-bottom:.5rem}
.card-dark ul{list-style:none;display:grid;gap:.5rem;color:rgba(255,255,255,.85)}
.cta{max-width:56rem;text-align:center}
.cta .section-title{margin-bottom:.75rem}
.cta-lede{color:rgba(0,0,0,.7);margin-bottom:1.5rem}
.fineprint{margin-top:.75rem;font-size:.875rem;color:rgba(0,0,0,.6)}
.footer{background:#0B0F1E;color:rgba(255,255,255,.8)}
.footer-row{display:flex;flex-wrap:wrap;align-items:center;justify-content:space-between;gap:1rem;padding-top:2rem;padding-bottom:2rem}
.footer-brand,.footer-links{display:flex;align-items:center;gap:.75rem}
.footer-links{gap:1.5rem;font-size:.875rem}
.footer-links a{text-decoration:none}
"#;
