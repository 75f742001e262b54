//! End-to-end render pipeline tests: document → VDOM → HTML.

use focal_model::{
    GlobalSettings, MediaRef, OwnerProfile, PortfolioDocument, SectionKind, SectionPatch,
};
use focal_renderer::{compile_html, render, HtmlOptions, PageMeta, RenderOptions};
use serde_json::json;

fn owner() -> OwnerProfile {
    OwnerProfile {
        id: "pro-1".to_string(),
        name: "Ada Marsh".to_string(),
        bio: "Documentary wedding photographer based in Lisbon.".to_string(),
        media: vec![MediaRef {
            url: "https://img.example/golden-hour.jpg".to_string(),
            caption: "Golden hour".to_string(),
        }],
        ..Default::default()
    }
}

fn config(doc: &mut PortfolioDocument, order: usize, patch: serde_json::Value) {
    let id = doc.section_at(order).unwrap().id.clone();
    let serde_json::Value::Object(map) = patch else {
        panic!("expected object");
    };
    doc.update_section(&id, SectionPatch::config(map));
}

#[test]
fn test_published_page_contains_configured_content() {
    let mut doc = PortfolioDocument::starter("owner-1");
    config(
        &mut doc,
        0,
        json!({"heading": "Weddings, told honestly", "tagline": "Lisbon & beyond"}),
    );
    config(&mut doc, 2, json!({"yearsExperience": 9, "startingPrice": "€900"}));

    let page = render(&doc, &owner(), &RenderOptions::publishing());
    let html = compile_html(&page, &PageMeta::new("Ada Marsh"), HtmlOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Weddings, told honestly"));
    assert!(html.contains("Lisbon &amp; beyond"));
    assert!(html.contains("9 years behind the camera"));
    assert!(html.contains("id=\"section-contact\""));
    assert!(html.contains("class=\"lightbox-overlay\""));
}

#[test]
fn test_theme_override_reaches_the_stylesheet() {
    let mut doc = PortfolioDocument::starter("owner-1");
    doc.set_global_settings(GlobalSettings {
        primary_color: Some("#FF0000".to_string()),
        ..Default::default()
    });

    let page = render(&doc, &owner(), &RenderOptions::publishing());
    let html = compile_html(&page, &PageMeta::new("Ada Marsh"), HtmlOptions::default());

    assert!(html.contains(".accent { color: #FF0000; }"));
}

#[test]
fn test_editing_preview_is_selectable_not_publishable() {
    let mut doc = PortfolioDocument::starter("owner-1");
    doc.add_section(SectionKind::Packages);
    let selected = doc.section_at(4).unwrap().id.clone();

    let options = RenderOptions::editing().with_selected(Some(selected.clone()));
    let page = render(&doc, &owner(), &options);
    let html = compile_html(&page, &PageMeta::new("Preview"), HtmlOptions::default());

    assert!(html.contains(&format!("data-section-id=\"{}\"", selected)));
    assert!(html.contains("builder-section--selected"));
    assert!(!html.contains("lightbox-overlay"));
}

#[test]
fn test_section_order_is_render_order() {
    let mut doc = PortfolioDocument::starter("owner-1");
    doc.move_section(3, 0); // contact first

    let page = render(&doc, &owner(), &RenderOptions::publishing());
    let html = compile_html(&page, &PageMeta::new("Ada Marsh"), HtmlOptions::default());

    let contact = html.find("id=\"section-contact\"").unwrap();
    let hero = html.find("id=\"section-hero\"").unwrap();
    assert!(contact < hero);
}

#[test]
fn test_unknown_config_keys_are_ignored_by_rendering() {
    let mut doc = PortfolioDocument::starter("owner-1");
    config(
        &mut doc,
        0,
        json!({"heading": "Hello", "experimentalBanner": "<script>alert(1)</script>"}),
    );

    let page = render(&doc, &owner(), &RenderOptions::publishing());
    let html = compile_html(&page, &PageMeta::new("Ada Marsh"), HtmlOptions::default());

    assert!(html.contains("Hello"));
    assert!(!html.contains("<script>alert(1)</script>"));
}
