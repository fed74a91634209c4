//! Server-rendered phone demo widget.
//!
//! Every reachable state is computed here and emitted as a link. The inline
//! script only translates keys, swipes and frame messages into those links.

use std::collections::BTreeMap;

use maud::{Markup, PreEscaped, html};

use crate::domain::{
    entities::demo_role::{RoleKey, Screen, ScreenSource},
    phone_demo::{DemoState, NAV_MESSAGE_TYPE, PhoneFrame, SWIPE_THRESHOLD_PX},
};

/// Fragment the widget is anchored at, so navigation keeps it in view.
pub const ANCHOR: &str = "phone-demo";

/// Where the widget lives: the page path and an optional explicit height to keep in links.
#[derive(Debug, Clone, Copy)]
pub struct DemoLinks<'a> {
    pub base_path: &'a str,
    pub height: Option<u32>,
}

impl DemoLinks<'_> {
    pub fn href(&self, state: DemoState) -> String {
        let mut href = format!(
            "{}?role={}&screen={}",
            self.base_path,
            state.role(),
            state.index()
        );
        if let Some(h) = self.height {
            href.push_str(&format!("&height={h}"));
        }
        href.push('#');
        href.push_str(ANCHOR);
        href
    }
}

pub fn phone_demo(state: DemoState, frame: PhoneFrame, links: DemoLinks<'_>) -> Markup {
    let cfg = state.role().config();
    let screen = state.current_screen();

    let targets: BTreeMap<&str, String> = cfg
        .screens
        .iter()
        .map(|s| (s.id, links.href(state.go_to(s.id))))
        .collect();
    let targets_json = serde_json::to_string(&targets).unwrap_or_else(|_| "{}".to_string());

    html! {
        div id=(ANCHOR) class="phone-demo"
            data-next=(links.href(state.next()))
            data-prev=(links.href(state.prev()))
            data-role-landlord=(links.href(state.select_role(RoleKey::Landlord)))
            data-role-tenant=(links.href(state.select_role(RoleKey::Tenant)))
            data-role-contractor=(links.href(state.select_role(RoleKey::Contractor)))
            data-nav-type=(NAV_MESSAGE_TYPE)
            data-nav-targets=(targets_json)
            data-swipe-threshold=(SWIPE_THRESHOLD_PX)
        {
            div class="pd-roles" {
                @for role in RoleKey::ALL {
                    @let active = role == state.role();
                    a.pd-role.active[active]
                        href=(links.href(state.select_role(role)))
                        aria-pressed=(if active { "true" } else { "false" })
                    {
                        (role.config().display_name)
                    }
                }
            }

            div class="pd-phone"
                style=(format!("width:{}px;height:{}px", frame.phone_width, frame.phone_height))
            {
                div class="pd-bezel" style=(format!("padding:{}px", PhoneFrame::BEZEL)) {
                    div class="pd-notch" {}
                    div class="pd-screen"
                        style=(format!("height:{}px", frame.screen_height))
                        role="region"
                        aria-label=(format!("{} screen: {}", cfg.display_name, screen.label))
                    {
                        div class="pd-content" { (screen_body(screen)) }
                        div class="pd-hint" { "Swipe \u{27f7} or use \u{2190}/\u{2192} \u{b7} 1/2/3 to switch roles" }
                    }
                }
            }

            div class="pd-controls" {
                a class="pd-step" href=(links.href(state.prev())) aria-label="Previous screen" { "\u{2190}" }
                span class="pd-count" { (state.index() + 1) " / " (state.total()) }
                a class="pd-step" href=(links.href(state.next())) aria-label="Next screen" { "\u{2192}" }
            }

            div class="pd-caption" {
                (cfg.display_name) " \u{b7} " (screen.label)
            }
        }
        script { (PreEscaped(DEMO_JS)) }
    }
}

fn screen_body(screen: &Screen) -> Markup {
    match screen.source {
        ScreenSource::Frame { src } => html! {
            iframe title=(screen.label) src=(src) allow="clipboard-write; autoplay" {}
        },
        ScreenSource::Image { src } => html! {
            img src=(src) alt=(screen.label) width="1170" height="2532" draggable="false";
        },
        ScreenSource::Inline { title, body } => html! {
            div class="pd-inline" {
                h2 { (title) }
                p { (body) }
            }
        },
    }
}

pub const DEMO_CSS: &str = r#"
.phone-demo{width:100%}
.pd-roles{display:flex;gap:.5rem;margin-bottom:1rem}
.pd-role{padding:.375rem .75rem;border-radius:9999px;font-size:.875rem;font-weight:600;text-decoration:none;background:rgba(229,231,235,.7);color:#111}
.pd-role:hover{background:#d1d5db}
.pd-role.active{background:#000;color:#fff}
.pd-phone{position:relative;margin:0 auto}
.pd-bezel{position:relative;width:100%;height:100%;border-radius:42px;border:1px solid rgba(0,0,0,.1);background:#0B0B0B;box-shadow:0 20px 25px -5px rgba(0,0,0,.3);overflow:hidden}
.pd-notch{position:absolute;left:50%;transform:translateX(-50%);top:.5rem;height:1.5rem;width:7rem;background:rgba(0,0,0,.8);border-radius:0 0 1rem 1rem;z-index:2}
.pd-screen{position:relative;width:100%;background:#000;border-radius:30px;overflow:hidden;touch-action:pan-y}
.pd-content{background:#fff;width:100%;height:100%}
.pd-content iframe{width:100%;height:100%;border:0}
.pd-content img{width:100%;height:100%;object-fit:contain;user-select:none;pointer-events:none}
.pd-inline{padding:2rem 1.25rem;color:#1F1F1F}
.pd-inline h2{margin-bottom:.5rem}
.pd-hint{pointer-events:none;position:absolute;bottom:.5rem;left:0;right:0;text-align:center;font-size:11px;color:rgba(255,255,255,.7)}
.pd-controls{display:flex;justify-content:center;align-items:center;gap:1rem;margin-top:.75rem}
.pd-step{text-decoration:none;font-size:1.25rem;padding:0 .5rem}
.pd-count{font-size:.75rem;opacity:.8}
.pd-caption{margin-top:.5rem;text-align:center;font-size:.75rem;opacity:.75}
"#;

const DEMO_JS: &str = r#"
(function(){
  var root=document.getElementById('phone-demo');
  if(!root)return;
  var d=root.dataset;
  var targets={};
  try{targets=JSON.parse(d.navTargets||'{}');}catch(_){}
  var threshold=parseFloat(d.swipeThreshold)||40;
  function go(href){if(href)window.location.assign(href);}
  window.addEventListener('keydown',function(e){
    var t=e.target&&e.target.tagName;
    if(t==='INPUT'||t==='TEXTAREA'||t==='SELECT')return;
    if(e.key==='ArrowRight')go(d.next);
    else if(e.key==='ArrowLeft')go(d.prev);
    else if(e.key==='1')go(d.roleLandlord);
    else if(e.key==='2')go(d.roleTenant);
    else if(e.key==='3')go(d.roleContractor);
  });
  var screen=root.querySelector('.pd-screen');
  var startX=null;
  if(screen){
    screen.addEventListener('pointerdown',function(e){startX=e.clientX;});
    screen.addEventListener('pointerup',function(e){
      if(startX===null)return;
      var dx=e.clientX-startX;startX=null;
      if(Math.abs(dx)>threshold)go(dx<0?d.next:d.prev);
    });
  }
  window.addEventListener('message',function(e){
    var m=e.data;
    if(m&&typeof m==='object'&&m.type===d.navType&&typeof m.to==='string'&&m.to)go(targets[m.to]);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> DemoLinks<'static> {
        DemoLinks {
            base_path: "/demo",
            height: None,
        }
    }

    #[test]
    fn href_carries_state_and_anchor() {
        let state = DemoState::new(RoleKey::Contractor).next();
        assert_eq!(links().href(state), "/demo?role=contractor&screen=1#phone-demo");

        let with_height = DemoLinks {
            base_path: "/",
            height: Some(900),
        };
        assert_eq!(
            with_height.href(DemoState::default()),
            "/?role=tenant&screen=0&height=900#phone-demo"
        );
    }

    #[test]
    fn renders_current_screen_and_caption() {
        let state = DemoState::new(RoleKey::Landlord).go_to("l-02");
        let html = phone_demo(state, PhoneFrame::from_height(800), links()).into_string();

        assert!(html.contains(r#"src="/interactive/landlord/pm-job.html""#));
        assert!(html.contains("Landlords \u{b7} Work Order"));
        assert!(html.contains(r#"aria-label="Landlords screen: Work Order""#));
        assert!(html.contains("width:369px;height:800px"));
        assert!(html.contains("height:772px"));
        assert!(html.contains("2 / 4"));
    }

    #[test]
    fn links_point_at_wrapped_neighbours() {
        let state = DemoState::new(RoleKey::Tenant);
        let html = phone_demo(state, PhoneFrame::default(), links()).into_string();

        assert!(html.contains(r#"data-next="/demo?role=tenant&amp;screen=1#phone-demo""#));
        assert!(html.contains(r#"data-prev="/demo?role=tenant&amp;screen=1#phone-demo""#));
        assert!(html.contains(r#"data-role-landlord="/demo?role=landlord&amp;screen=0#phone-demo""#));
    }

    #[test]
    fn only_active_role_is_pressed() {
        let html = phone_demo(DemoState::new(RoleKey::Contractor), PhoneFrame::default(), links())
            .into_string();
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 2);
    }

    #[test]
    fn nav_targets_cover_active_role_only() {
        let html = phone_demo(DemoState::new(RoleKey::Tenant), PhoneFrame::default(), links())
            .into_string();
        assert!(html.contains("t-02"));
        assert!(!html.contains("c-01"));
    }

    #[test]
    fn renders_image_and_inline_sources() {
        let image = Screen {
            id: "x-01",
            label: "Shot",
            source: ScreenSource::Image { src: "/shots/a.png" },
        };
        let html = screen_body(&image).into_string();
        assert!(html.contains(r#"<img src="/shots/a.png" alt="Shot""#));

        let inline = Screen {
            id: "x-02",
            label: "Card",
            source: ScreenSource::Inline {
                title: "Tenant Flow",
                body: "Submit a repair.",
            },
        };
        let html = screen_body(&inline).into_string();
        assert!(html.contains("<h2>Tenant Flow</h2>"));
        assert!(!html.contains("iframe"));
    }
}
