//! End-to-end checks of the DOM-free rules the shell renders from.

use floatchat_ui::core::config::ShellConfig;
use floatchat_ui::core::fixtures::KPIS;
use floatchat_ui::core::nav::{NAVIGATION, NavId, is_active, resolve_active, validate};
use floatchat_ui::core::sidebar::{ShellAction, ShellState};
use floatchat_ui::core::transition::{PageTransition, PhaseKind, TransitionEffect};
use floatchat_ui::core::trend::{Trend, delta_badge};

fn active_id(path: &str) -> Option<NavId> {
    resolve_active(path, &NAVIGATION).map(|entry| entry.id)
}

#[test]
fn chat_sub_route_keeps_chat_highlighted() {
    assert_eq!(active_id("/chat/old-session"), Some(NavId::Chat));
    assert_eq!(active_id("/"), Some(NavId::Dashboard));
    assert_eq!(active_id("/unknown"), None);
    assert_eq!(active_id("/chatter"), None);
}

#[test]
fn bundled_navigation_table_is_unambiguous() {
    assert_eq!(validate(&NAVIGATION), Ok(()));
    for entry in &NAVIGATION {
        let hits = NAVIGATION
            .iter()
            .filter(|candidate| is_active(candidate.route, entry.route))
            .count();
        assert_eq!(hits, 1, "{} highlights more than one entry", entry.route);
    }
}

#[test]
fn collapsing_hides_labels_but_keeps_every_entry() {
    let expanded = ShellState::default();
    let collapsed = expanded.apply(ShellAction::ToggleSidebar);

    let labels = |state: ShellState| {
        NAVIGATION
            .iter()
            .map(|entry| state.sidebar.label_for(entry))
            .collect::<Vec<_>>()
    };
    assert!(labels(expanded).iter().all(Option::is_some));
    assert!(labels(collapsed).iter().all(Option::is_none));
    assert_eq!(labels(expanded).len(), labels(collapsed).len());
    assert_eq!(collapsed.apply(ShellAction::ToggleSidebar), expanded);
}

#[test]
fn navigating_closes_the_mobile_drawer_without_touching_the_sidebar() {
    let state = ShellState::default()
        .apply(ShellAction::ToggleSidebar)
        .apply(ShellAction::OpenMobileMenu);
    assert!(state.mobile_menu.is_open());

    let after = state.apply(ShellAction::RouteChanged);
    assert!(!after.mobile_menu.is_open());
    assert_eq!(after.sidebar, state.sidebar);
}

#[test]
fn tapping_the_shown_page_in_the_drawer_closes_it_without_a_transition() {
    let mut transition = PageTransition::new("/map");
    transition.enter_finished();
    let state = ShellState::default().apply(ShellAction::OpenMobileMenu);

    // Same path: the router reports nothing, only the tap itself is seen.
    assert_eq!(transition.navigate("/map"), TransitionEffect::None);
    let after = state.apply(ShellAction::NavSelected);
    assert!(!after.mobile_menu.is_open());
    assert_eq!(transition.exits(), 0);
}

#[test]
fn route_change_runs_one_exit_and_one_enter() {
    let mut transition = PageTransition::new("/chat");
    transition.enter_finished();

    assert_eq!(transition.navigate("/chat"), TransitionEffect::None);
    assert_eq!(transition.enters(), 1);

    assert_eq!(transition.navigate("/map"), TransitionEffect::Exit);
    assert_eq!(transition.displayed(), "/chat");
    assert_eq!(transition.exit_finished(), TransitionEffect::Enter);
    assert_eq!(transition.enter_finished(), TransitionEffect::Settle);

    assert_eq!(transition.displayed(), "/map");
    assert_eq!(transition.phase().kind(), PhaseKind::Settled);
    assert_eq!((transition.exits(), transition.enters()), (1, 2));
}

#[test]
fn dashboard_badges_follow_trend() {
    let badges: Vec<Option<&str>> = KPIS
        .iter()
        .map(|kpi| delta_badge(kpi.change, kpi.trend).map(|badge| badge.classes))
        .collect();
    assert_eq!(
        badges,
        [
            Some(Trend::Positive.badge_classes()),
            Some(Trend::Positive.badge_classes()),
            Some(Trend::Neutral.badge_classes()),
            Some(Trend::Neutral.badge_classes()),
        ]
    );

    assert!(delta_badge(None, Trend::Positive).is_none());
    let negative = delta_badge(Some("-2%"), Trend::Negative);
    assert_eq!(
        negative.map(|badge| badge.classes),
        Some("bg-red-500/20 text-red-400")
    );
}

#[test]
fn bundled_config_loads() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShellConfig::bundled()?;
    assert_eq!(config.brand.title, "FloatChat");
    assert!(config.sidebar.collapsed_width < config.sidebar.expanded_width);
    Ok(())
}

#[test]
fn page_loads_tailwind_utilities_built_from_the_sources() {
    let page = include_str!("../index.html");
    let config = include_str!("../tailwind.config.js");
    let entry = include_str!("../static/tailwind.css");

    let tailwind = page
        .find(r#"rel="tailwind-css" href="static/tailwind.css""#)
        .expect("tailwind link");
    let overrides = page
        .find(r#"rel="css" href="static/floatchat.css""#)
        .expect("stylesheet link");
    assert!(tailwind < overrides);
    assert!(config.contains(r#""./src/**/*.rs""#));
    assert!(entry.contains("@tailwind utilities;"));
}
