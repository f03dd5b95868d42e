//! Integration tests - HTML in, widget behaviour out
//!
//! Pages are parsed from real markup and driven through `Page` the way a
//! browser would drive them: clicks, keys, hover, fragments and time.

use std::cell::RefCell;
use std::rc::Rc;

use hinge_engine::dom::Key;
use hinge_engine::widgets::autoplay::MAX_DELAY_MS;
use hinge_engine::widgets::{DataLayer, DataLayerEvent};
use hinge_engine::{Config, Page};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// FIXTURES
// ============================================================================

fn accordion(items: usize, single: bool, expanded: &[usize]) -> String {
    let mut html = format!(
        r#"<div id="acc" class="cmp-accordion" data-cmp-is="accordion" {}>"#,
        if single { "data-cmp-single-expansion" } else { "" }
    );
    for i in 0..items {
        let marker = if expanded.contains(&i) { "data-cmp-expanded" } else { "" };
        html.push_str(&format!(
            r#"<div id="item-{i}" class="cmp-accordion__item" data-cmp-hook-accordion="item" {marker}>
                 <h3><button id="button-{i}" data-cmp-hook-accordion="button">Item {i}</button></h3>
                 <div id="panel-{i}" data-cmp-hook-accordion="panel">Panel {i}</div>
               </div>"#
        ));
    }
    html.push_str("</div>");
    html
}

fn tabs(count: usize) -> String {
    let mut tabs = String::new();
    let mut panels = String::new();
    for i in 0..count {
        tabs.push_str(&format!(r#"<li id="tab-{i}" data-cmp-hook-tabs="tab">Tab {i}</li>"#));
        panels.push_str(&format!(r#"<div id="tabpanel-{i}" data-cmp-hook-tabs="tabpanel">Panel {i}</div>"#));
    }
    format!(
        r#"<div id="tabs" class="cmp-tabs" data-cmp-is="tabs" data-cmp-panelcontainer-id="tabs-1">
             <ol role="tablist">{tabs}</ol>{panels}
           </div>"#
    )
}

fn carousel(count: usize, options: &str) -> String {
    let mut items = String::new();
    let mut indicators = String::new();
    for i in 0..count {
        items.push_str(&format!(r#"<div id="slide-{i}" data-cmp-hook-carousel="item">Slide {i}</div>"#));
        indicators.push_str(&format!(r#"<li id="indicator-{i}" data-cmp-hook-carousel="indicator"></li>"#));
    }
    format!(
        r#"<div id="car" class="cmp-carousel" data-cmp-is="carousel" {options}>
             <div id="content" data-cmp-hook-carousel="content">{items}</div>
             <button id="prev" data-cmp-hook-carousel="previous">Prev</button>
             <button id="next" data-cmp-hook-carousel="next">Next</button>
             <button id="pause" data-cmp-hook-carousel="pause">Pause</button>
             <button id="play" data-cmp-hook-carousel="play">Play</button>
             <ol id="indicators" data-cmp-hook-carousel="indicators">{indicators}</ol>
           </div>"#
    )
}

fn load(html: &str) -> Page {
    let mut page = Page::from_html(html, Config::default()).unwrap();
    page.ready();
    page
}

fn load_at(html: &str, url: &str) -> Page {
    let mut page = Page::from_html_at(html, url, Config::default()).unwrap();
    page.ready();
    page
}

fn click(page: &mut Page, id: &str) {
    let target = page.element(id).unwrap();
    page.click(target);
}

fn key(page: &mut Page, id: &str, key: Key) {
    let target = page.element(id).unwrap();
    page.key_down(target, key);
}

fn active(page: &Page, id: &str) -> Vec<usize> {
    page.active_indices(id).unwrap()
}

fn attr<'a>(page: &'a Page, id: &str, name: &str) -> Option<&'a str> {
    let node = page.element(id).unwrap();
    page.document().get_attribute(node, name)
}

fn has_class(page: &Page, id: &str, class: &str) -> bool {
    page.document().has_class(page.element(id).unwrap(), class)
}

// ============================================================================
// DISCLOSURE INVARIANTS
// ============================================================================

#[test]
fn test_single_expansion_invariant() {
    let html = accordion(3, true, &[]);
    for n in 0..81usize {
        let mut page = load(&html);
        let sequence = [n % 3, n / 3 % 3, n / 9 % 3, n / 27 % 3];
        for i in sequence {
            click(&mut page, &format!("button-{i}"));
            assert!(active(&page, "acc").len() <= 1, "after {:?}", sequence);
        }
        let expanded_in_dom = (0..3)
            .filter(|i| attr(&page, &format!("item-{i}"), "data-cmp-expanded").is_some())
            .count();
        assert_eq!(expanded_in_dom, active(&page, "acc").len());
    }
}

#[test]
fn test_exactly_one_active_tab() {
    let mut page = load(&tabs(3));
    assert_eq!(active(&page, "tabs"), vec![0]);

    let steps: [(&str, Option<Key>); 6] = [
        ("tab-2", None),
        ("tab-2", Some(Key::ArrowLeft)),
        ("tab-1", Some(Key::Home)),
        ("tab-0", Some(Key::End)),
        ("tab-1", None),
        ("tab-1", Some(Key::Enter)),
    ];
    for (id, k) in steps {
        match k {
            Some(k) => key(&mut page, id, k),
            None => click(&mut page, id),
        }
        assert_eq!(active(&page, "tabs").len(), 1);
        let marked = (0..3).filter(|i| has_class(&page, &format!("tab-{i}"), "cmp-tabs__tab--active")).count();
        assert_eq!(marked, 1);
    }
    assert_eq!(active(&page, "tabs"), vec![1]);
}

#[test]
fn test_exactly_one_active_slide() {
    let mut page = load(&carousel(4, ""));
    for id in ["next", "next", "prev", "indicator-3", "next", "prev", "prev"] {
        click(&mut page, id);
        assert_eq!(active(&page, "car").len(), 1);
        let marked = (0..4)
            .filter(|i| has_class(&page, &format!("slide-{i}"), "cmp-carousel__item--active"))
            .count();
        assert_eq!(marked, 1);
    }
    assert_eq!(active(&page, "car"), vec![2]);
}

#[test]
fn test_double_toggle_restores_state() {
    let mut page = load(&accordion(3, false, &[1]));
    for i in 0..3 {
        let before = active(&page, "acc");
        click(&mut page, &format!("button-{i}"));
        click(&mut page, &format!("button-{i}"));
        assert_eq!(active(&page, "acc"), before);
    }
}

#[test]
fn test_accordion_aria_follows_after_delay() {
    let mut page = load(&accordion(2, false, &[]));
    assert_eq!(attr(&page, "button-0", "aria-expanded"), Some("false"));
    assert_eq!(attr(&page, "panel-0", "aria-hidden"), Some("true"));
    assert!(has_class(&page, "panel-0", "cmp-accordion__panel--hidden"));

    click(&mut page, "button-0");
    assert!(has_class(&page, "button-0", "cmp-accordion__button--expanded"));
    assert!(has_class(&page, "panel-0", "cmp-accordion__panel--expanded"));
    assert!(!has_class(&page, "panel-0", "cmp-accordion__panel--hidden"));
    assert_eq!(attr(&page, "button-0", "aria-expanded"), Some("false"));

    page.advance(99);
    assert_eq!(attr(&page, "button-0", "aria-expanded"), Some("false"));
    page.advance(1);
    assert_eq!(attr(&page, "button-0", "aria-expanded"), Some("true"));
    assert_eq!(attr(&page, "panel-0", "aria-hidden"), Some("false"));
}

// ============================================================================
// DEEP LINKS
// ============================================================================

#[test]
fn test_deep_link_on_init_keeps_hash() {
    let mut page = load_at(&accordion(4, true, &[0]), "https://site.test/page#item-2");

    assert_eq!(active(&page, "acc"), vec![2]);
    assert_eq!(page.fragment(), Some("item-2"));
    assert_eq!(page.document().history().len(), 1);
    assert_eq!(page.document().scrolled(), &[page.element("item-2").unwrap()]);

    // ARIA deferrals from the deep-link expansion still land
    page.advance(100);
    assert_eq!(attr(&page, "button-0", "aria-expanded"), Some("false"));
    assert_eq!(attr(&page, "button-2", "aria-expanded"), Some("true"));
}

#[test]
fn test_user_toggle_writes_hash() {
    let mut page = load(&accordion(3, false, &[]));

    click(&mut page, "button-1");
    assert_eq!(page.fragment(), Some("item-1"));
    assert_eq!(page.document().history().len(), 1);

    click(&mut page, "button-1");
    assert_eq!(page.fragment(), None);
}

#[test]
fn test_hashchange_expands_target() {
    let mut page = load(&accordion(4, false, &[]));

    assert!(page.navigate_to_fragment("panel-3"));
    assert_eq!(active(&page, "acc"), vec![3]);
    assert!(!page.navigate_to_fragment("panel-3"));

    assert!(page.navigate_to_fragment("item-1"));
    assert_eq!(active(&page, "acc"), vec![1, 3]);

    assert!(page.back());
    assert_eq!(page.fragment(), Some("panel-3"));
    assert_eq!(active(&page, "acc"), vec![1, 3]);
}

#[test]
fn test_tabs_deep_link_selects_and_focuses() {
    let page = load_at(&tabs(3), "https://site.test/#tabpanel-2");
    assert_eq!(active(&page, "tabs"), vec![2]);
    assert_eq!(page.document().focused(), Some(page.element("tab-2").unwrap()));
    assert_eq!(page.fragment(), Some("tabpanel-2"));
}

#[test]
fn test_without_deep_links_hash_is_untouched() {
    let mut page = Page::from_html_at(&accordion(2, false, &[]), "https://site.test/#item-1", Config::default())
        .unwrap()
        .without_deep_links();
    page.ready();

    assert!(active(&page, "acc").is_empty());
    click(&mut page, "button-0");
    assert_eq!(active(&page, "acc"), vec![0]);
    assert_eq!(page.fragment(), Some("item-1"));
}

// ============================================================================
// AUTOPLAY
// ============================================================================

#[test]
fn test_autoplay_wraps_around() {
    let mut page = load(&carousel(3, r#"data-cmp-autoplay data-cmp-delay="1000""#));
    assert_eq!(active(&page, "car"), vec![0]);
    assert_eq!(attr(&page, "content", "aria-live"), Some("off"));

    page.advance(1000);
    assert_eq!(active(&page, "car"), vec![1]);
    page.advance(2000);
    assert_eq!(active(&page, "car"), vec![0]);
    assert_eq!(page.pending_timers(), 1);
}

#[test]
fn test_autoplay_pauses_on_hover_and_focus() {
    let mut page = load(&carousel(3, r#"data-cmp-autoplay data-cmp-delay="1000""#));

    let slide = page.element("slide-0").unwrap();
    page.hover(Some(slide));
    page.advance(5000);
    assert_eq!(active(&page, "car"), vec![0]);

    page.hover(None);
    page.advance(1000);
    assert_eq!(active(&page, "car"), vec![1]);

    let next = page.element("next").unwrap();
    page.focus(next);
    page.advance(5000);
    assert_eq!(active(&page, "car"), vec![1]);

    page.blur();
    page.advance(1000);
    assert_eq!(active(&page, "car"), vec![2]);
}

#[test]
fn test_autopause_disabled_keeps_running() {
    let mut page = load(&carousel(
        3,
        r#"data-cmp-autoplay data-cmp-delay="1000" data-cmp-autopause-disabled"#,
    ));
    let indicator = page.element("indicator-0").unwrap();
    page.focus(indicator);
    page.hover(Some(indicator));

    page.advance(1000);
    assert_eq!(active(&page, "car"), vec![1]);
    // Focus follows the active indicator
    assert_eq!(page.document().focused(), Some(page.element("indicator-1").unwrap()));
}

#[test]
fn test_hidden_page_skips_ticks() {
    let mut page = load(&carousel(3, r#"data-cmp-autoplay data-cmp-delay="1000""#));
    page.set_hidden(true);
    page.advance(3000);
    assert_eq!(active(&page, "car"), vec![0]);

    page.set_hidden(false);
    page.advance(1000);
    assert_eq!(active(&page, "car"), vec![1]);
}

#[test]
fn test_space_toggles_play_pause() {
    let mut page = load(&carousel(3, r#"data-cmp-autoplay data-cmp-delay="1000""#));
    assert!(attr(&page, "pause", "disabled").is_none());
    assert!(attr(&page, "play", "disabled").is_some());

    key(&mut page, "slide-0", Key::Space);
    assert!(page.widget("car").unwrap().as_carousel().unwrap().autoplay().is_paused());
    assert!(attr(&page, "pause", "disabled").is_some());
    assert!(has_class(&page, "pause", "cmp-carousel__action--disabled"));
    assert!(!has_class(&page, "play", "cmp-carousel__action--disabled"));
    assert_eq!(attr(&page, "content", "aria-live"), Some("polite"));
    assert_eq!(page.pending_timers(), 0);

    page.advance(3000);
    assert_eq!(active(&page, "car"), vec![0]);

    key(&mut page, "slide-0", Key::Space);
    assert_eq!(attr(&page, "content", "aria-live"), Some("off"));
    page.advance(1000);
    assert_eq!(active(&page, "car"), vec![1]);

    // Space on the step controls is left to the button
    let next = page.element("next").unwrap();
    let event = page.key_down(next, Key::Space);
    assert!(!event.is_default_prevented());
}

#[test]
fn test_pause_button_click() {
    let mut page = load(&carousel(2, r#"data-cmp-autoplay data-cmp-delay="500""#));
    click(&mut page, "pause");
    page.advance(2000);
    assert_eq!(active(&page, "car"), vec![0]);

    click(&mut page, "play");
    page.advance(500);
    assert_eq!(active(&page, "car"), vec![1]);
}

// ============================================================================
// KEYBOARD
// ============================================================================

#[test]
fn test_keyboard_bounds_on_tabs() {
    let mut page = load(&tabs(3));

    let target = page.element("tab-0").unwrap();
    let event = page.key_down(target, Key::ArrowLeft);
    assert!(event.is_default_prevented());
    assert_eq!(active(&page, "tabs"), vec![0]);

    key(&mut page, "tab-0", Key::End);
    assert_eq!(active(&page, "tabs"), vec![2]);
    assert_eq!(page.document().focused(), Some(page.element("tab-2").unwrap()));
    assert_eq!(attr(&page, "tab-2", "tabindex"), Some("0"));
    assert_eq!(attr(&page, "tab-0", "tabindex"), Some("-1"));

    key(&mut page, "tab-2", Key::ArrowRight);
    assert_eq!(active(&page, "tabs"), vec![2]);

    key(&mut page, "tab-2", Key::ArrowUp);
    assert_eq!(active(&page, "tabs"), vec![1]);
}

#[test]
fn test_keyboard_bounds_on_accordion() {
    let mut page = load(&accordion(3, false, &[]));
    let first = page.element("button-0").unwrap();
    page.focus(first);

    page.press(Key::ArrowLeft);
    assert_eq!(page.document().focused(), Some(first));

    page.press(Key::End);
    page.press(Key::ArrowDown);
    let last = page.element("button-2").unwrap();
    assert_eq!(page.document().focused(), Some(last));
    assert!(active(&page, "acc").is_empty());

    page.press(Key::Enter);
    assert_eq!(active(&page, "acc"), vec![2]);
    page.press(Key::Space);
    assert!(active(&page, "acc").is_empty());
}

#[test]
fn test_carousel_keyboard_does_not_wrap() {
    let mut page = load(&carousel(3, ""));
    key(&mut page, "indicator-0", Key::ArrowLeft);
    assert_eq!(active(&page, "car"), vec![0]);

    key(&mut page, "indicator-0", Key::End);
    assert_eq!(active(&page, "car"), vec![2]);
    assert_eq!(page.document().focused(), Some(page.element("indicator-2").unwrap()));

    key(&mut page, "indicator-2", Key::ArrowRight);
    assert_eq!(active(&page, "car"), vec![2]);

    // The buttons do wrap
    click(&mut page, "next");
    assert_eq!(active(&page, "car"), vec![0]);
}

#[test]
fn test_carousel_keys_inside_slides_are_left_alone() {
    let html = carousel(3, "").replace(
        r#"Slide 0</div>"#,
        r#"Slide 0 <input id="field"></div>"#,
    );
    let mut page = load(&html);

    for k in [Key::ArrowRight, Key::End, Key::Home] {
        let field = page.element("field").unwrap();
        let event = page.key_down(field, k);
        assert!(!event.is_default_prevented());
        assert_eq!(active(&page, "car"), vec![0]);
    }

    let event = page.key_down(page.element("content").unwrap(), Key::ArrowRight);
    assert!(!event.is_default_prevented());
    assert_eq!(active(&page, "car"), vec![0]);

    let indicators = page.element("indicators").unwrap();
    let event = page.key_down(indicators, Key::ArrowRight);
    assert!(event.is_default_prevented());
    assert_eq!(active(&page, "car"), vec![1]);
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_delay_defaults() {
    for options in ["data-cmp-autoplay", r#"data-cmp-autoplay data-cmp-delay="abc""#] {
        let page = load(&carousel(2, options));
        let carousel = page.widget("car").unwrap().as_carousel().unwrap();
        assert_eq!(carousel.properties().number("delay"), Some(5000.0));
        assert_eq!(carousel.autoplay().delay_ms(), 5000);
    }

    let page = load(&carousel(2, r#"data-cmp-delay="250ms""#));
    let carousel = page.widget("car").unwrap().as_carousel().unwrap();
    assert_eq!(carousel.autoplay().delay_ms(), 250);
    assert!(!carousel.autoplay().is_enabled());
}

#[test]
fn test_delay_edges() {
    let cases = [
        ("1e20", MAX_DELAY_MS),
        ("Infinity", MAX_DELAY_MS),
        ("-500", 0),
        ("0", 0),
        ("250ms", 250),
    ];
    for (raw, expected) in cases {
        let page = load(&carousel(3, &format!(r#"data-cmp-autoplay data-cmp-delay="{raw}""#)));
        let carousel = page.widget("car").unwrap().as_carousel().unwrap();
        assert_eq!(carousel.autoplay().delay_ms(), expected, "delay {raw:?}");
    }
}

#[test]
fn test_huge_delay_keeps_running() {
    let mut page = load(&carousel(3, r#"data-cmp-autoplay data-cmp-delay="1e20""#));
    page.advance(10);
    click(&mut page, "next");
    assert_eq!(active(&page, "car"), vec![1]);

    assert_eq!(page.advance(60_000), 0);
    assert_eq!(active(&page, "car"), vec![1]);
    assert_eq!(page.pending_timers(), 1);
}

#[test]
fn test_zero_delay_ticks_every_millisecond() {
    let mut page = load(&carousel(3, r#"data-cmp-autoplay data-cmp-delay="0""#));
    assert_eq!(page.advance(2), 2);
    assert_eq!(active(&page, "car"), vec![2]);
    page.advance(1);
    assert_eq!(active(&page, "car"), vec![0]);
}

// ============================================================================
// HOOK SCOPING
// ============================================================================

const NESTED: &str = r#"
    <div id="outer" class="cmp-accordion" data-cmp-is="accordion">
      <div id="o0" data-cmp-hook-accordion="item">
        <button id="ob0" data-cmp-hook-accordion="button"></button>
        <div id="op0" data-cmp-hook-accordion="panel">
          <div id="inner" class="cmp-accordion" data-cmp-is="accordion">
            <div id="i0" data-cmp-hook-accordion="item">
              <button id="ib0" data-cmp-hook-accordion="button"></button>
              <div id="ip0" data-cmp-hook-accordion="panel"></div>
            </div>
            <div id="i1" data-cmp-hook-accordion="item">
              <button id="ib1" data-cmp-hook-accordion="button"></button>
              <div id="ip1" data-cmp-hook-accordion="panel"></div>
            </div>
          </div>
        </div>
      </div>
      <div id="o1" data-cmp-hook-accordion="item">
        <button id="ob1" data-cmp-hook-accordion="button"></button>
        <div id="op1" data-cmp-hook-accordion="panel"></div>
      </div>
    </div>"#;

#[test]
fn test_nested_widgets_are_independent() {
    let mut page = load(NESTED);
    assert_eq!(page.registry().len(), 2);
    assert_eq!(page.widget("outer").unwrap().items().len(), 2);
    assert_eq!(page.widget("inner").unwrap().items().len(), 2);

    click(&mut page, "ib1");
    assert_eq!(active(&page, "inner"), vec![1]);
    assert!(active(&page, "outer").is_empty());

    click(&mut page, "ob1");
    assert_eq!(active(&page, "outer"), vec![1]);
    assert_eq!(active(&page, "inner"), vec![1]);
}

// ============================================================================
// BOOTSTRAP AND LIFECYCLE
// ============================================================================

#[test]
fn test_inserted_and_removed_widgets() {
    let mut page = load(r#"<main id="main"></main>"#);
    assert!(page.registry().is_empty());

    let main = page.element("main").unwrap();
    page.insert_html(main, &carousel(2, r#"data-cmp-autoplay"#)).unwrap();
    page.insert_html(main, &tabs(2)).unwrap();
    assert_eq!(page.registry().len(), 2);
    assert_eq!(page.pending_timers(), 1);
    assert!(attr(&page, "car", "data-cmp-is").is_none());

    let car = page.element("car").unwrap();
    page.remove(car).unwrap();
    assert_eq!(page.registry().len(), 1);
    assert_eq!(page.pending_timers(), 0);
    assert_eq!(page.advance(20_000), 0);
}

#[test]
fn test_removal_cancels_pending_aria() {
    let mut page = load(&accordion(2, false, &[]));
    click(&mut page, "button-0");
    assert_eq!(page.pending_timers(), 2);

    let acc = page.element("acc").unwrap();
    page.remove(acc).unwrap();
    assert_eq!(page.pending_timers(), 0);
}

// ============================================================================
// COLLABORATORS
// ============================================================================

const DATA_LAYER_PAGE: &str = r#"
    <body data-cmp-data-layer-enabled>
      <div id="acc" class="cmp-accordion" data-cmp-is="accordion" data-cmp-data-layer='{"acc-1": {}}'>
        <div id="item-0" data-cmp-hook-accordion="item" data-cmp-data-layer='{"acc-1-item-0": {}}'>
          <button id="button-0" data-cmp-hook-accordion="button"></button>
          <div data-cmp-hook-accordion="panel"></div>
        </div>
      </div>
    </body>"#;

#[test]
fn test_data_layer_events() {
    let layer = Rc::new(RefCell::new(DataLayer::new()));
    let mut page = Page::from_html(DATA_LAYER_PAGE, Config::default())
        .unwrap()
        .with_data_layer(Rc::clone(&layer));
    page.ready();

    click(&mut page, "button-0");
    click(&mut page, "button-0");

    assert_eq!(
        layer.borrow().events(),
        &[
            DataLayerEvent::shown_items("acc-1", vec!["acc-1-item-0".into()]),
            DataLayerEvent::show("acc-1-item-0"),
            DataLayerEvent::shown_items("acc-1", vec![]),
            DataLayerEvent::hide("acc-1-item-0"),
        ]
    );
}

#[test]
fn test_data_layer_off_without_flag() {
    let layer = Rc::new(RefCell::new(DataLayer::new()));
    let html = DATA_LAYER_PAGE.replace("data-cmp-data-layer-enabled", "");
    let mut page = Page::from_html(&html, Config::default())
        .unwrap()
        .with_data_layer(Rc::clone(&layer));
    page.ready();

    click(&mut page, "button-0");
    assert!(layer.borrow().events().is_empty());
}

#[test]
fn test_authoring_navigate() {
    let config = Config {
        authoring: true,
        ..Config::default()
    };
    let mut page = Page::from_html(&tabs(3), config).unwrap();
    page.ready();

    let handled = page.post_message(json!({
        "type": "cmp-tabs", "id": "tabs-1", "operation": "navigate", "index": 2
    }));
    assert_eq!(handled, 1);
    assert_eq!(active(&page, "tabs"), vec![2]);

    assert_eq!(page.post_message(json!({"type": "cmp-tabs", "id": "other", "operation": "navigate", "index": 0})), 0);
    assert_eq!(page.post_message(json!({"type": "cmp-tabs"})), 0);
    assert_eq!(page.post_message(json!({"type": "cmp-tabs", "id": "tabs-1", "operation": "navigate", "index": 7})), 1);
    assert_eq!(active(&page, "tabs"), vec![2]);
}

#[test]
fn test_authoring_requires_subscription() {
    let mut page = load(&tabs(2));
    let handled = page.post_message(json!({
        "type": "cmp-tabs", "id": "tabs-1", "operation": "navigate", "index": 1
    }));
    assert_eq!(handled, 0);
    assert_eq!(active(&page, "tabs"), vec![0]);
}

// ============================================================================
// MISSING HOOKS
// ============================================================================

#[test]
fn test_tab_without_panel_stays_exposed() {
    let html = tabs(3).replace(r#"<div id="tabpanel-2" data-cmp-hook-tabs="tabpanel">Panel 2</div>"#, "");
    let mut page = load(&html);
    assert_eq!(page.widget("tabs").unwrap().items().len(), 3);
    assert_eq!(page.widget("tabs").unwrap().items()[2].content, None);

    for i in 0..3 {
        assert_eq!(attr(&page, &format!("tab-{i}"), "aria-hidden"), None);
    }
    assert_eq!(attr(&page, "tab-2", "aria-selected"), Some("false"));
    assert_eq!(attr(&page, "tabpanel-1", "aria-hidden"), Some("true"));

    click(&mut page, "tab-2");
    assert_eq!(active(&page, "tabs"), vec![2]);
    assert_eq!(attr(&page, "tab-2", "aria-selected"), Some("true"));
    assert_eq!(attr(&page, "tab-2", "tabindex"), Some("0"));
    assert_eq!(attr(&page, "tab-2", "aria-hidden"), None);
    assert!(!has_class(&page, "tab-2", "cmp-tabs__tabpanel--active"));
    assert_eq!(attr(&page, "tabpanel-0", "aria-hidden"), Some("true"));
}

#[test]
fn test_accordion_item_without_panel() {
    let html = accordion(2, false, &[]).replace(r#"<div id="panel-1" data-cmp-hook-accordion="panel">Panel 1</div>"#, "");
    let mut page = load(&html);

    click(&mut page, "button-1");
    page.advance(100);
    assert_eq!(active(&page, "acc"), vec![1]);
    assert_eq!(attr(&page, "button-1", "aria-expanded"), Some("true"));
    assert_eq!(attr(&page, "button-1", "aria-hidden"), None);
    assert_eq!(attr(&page, "panel-0", "aria-hidden"), Some("true"));
}
