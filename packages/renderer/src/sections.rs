//! Per-kind section renderers.
//!
//! Each renderer is a pure function from `(config, context)` to a VNode
//! subtree. Configuration goes through the typed defaulted read, so a
//! sparse or damaged config map still renders. Owner data fills the gaps
//! the owner has not configured yet: an empty gallery falls back to the
//! profile's media, an empty bio to the profile's bio.

use crate::registry::{RenderContext, RenderMode};
use crate::vdom::VNode;
use focal_model::{
    AboutConfig, ConfigMap, ContactConfig, GalleryConfig, GalleryImage, HeroConfig,
    PackagesConfig, ReviewsConfig, ServicesConfig, TestimonialsConfig,
};

pub(crate) fn render_hero(config: &ConfigMap, ctx: &RenderContext) -> VNode {
    let config = HeroConfig::read(config);

    let mut hero = VNode::element("header")
        .with_class("hero")
        .with_style("text-align", config.alignment.as_str());

    if !config.background_image.is_empty() {
        hero = hero
            .with_class("hero--with-image")
            .with_style(
                "background-image",
                format!("url('{}')", config.background_image),
            )
            .with_style("background-size", "cover")
            .with_style("background-position", "center");
    }

    let heading = if config.heading.is_empty() {
        ctx.owner.name.clone()
    } else {
        config.heading
    };

    hero = hero
        .with_child(VNode::element("h1").with_child(VNode::text(heading)))
        .with_child(
            VNode::element("p")
                .with_class("hero-tagline")
                .with_child(VNode::text(config.tagline)),
        );

    if config.show_booking_button {
        hero = hero.with_child(
            VNode::element("a")
                .with_class("button")
                .with_attr("href", "#section-contact")
                .with_child(VNode::text(config.button_label)),
        );
    }

    hero
}

pub(crate) fn render_gallery(config: &ConfigMap, ctx: &RenderContext) -> VNode {
    let config = GalleryConfig::read(config);

    // Unconfigured galleries show the owner's media so the preview is
    // never an empty box.
    let images: Vec<GalleryImage> = if config.images.is_empty() {
        ctx.owner
            .media
            .iter()
            .map(|media| GalleryImage {
                url: media.url.clone(),
                caption: media.caption.clone(),
                category: String::new(),
            })
            .collect()
    } else {
        config.images.clone()
    };

    let mut gallery = VNode::element("div")
        .with_class("gallery")
        .with_class(format!("gallery--{}", config.layout.as_str()))
        .with_class(format!("gallery--gap-{}", config.spacing.as_str()))
        .with_style("--gallery-columns", config.columns.count().to_string());

    if !config.categories.is_empty() {
        let mut filters = VNode::element("ul").with_class("gallery-filters");
        for category in &config.categories {
            filters = filters.with_child(
                VNode::element("li")
                    .with_class("gallery-filter")
                    .with_attr("data-category", category)
                    .with_child(VNode::text(category)),
            );
        }
        gallery = gallery.with_child(filters);
    }

    let mut grid = VNode::element("div").with_class("gallery-grid");
    for image in &images {
        let mut img = VNode::element("img")
            .with_attr("src", &image.url)
            .with_attr("alt", &image.caption)
            .with_attr("loading", "lazy");
        if !image.category.is_empty() {
            img = img.with_attr("data-category", &image.category);
        }

        let mut figure = VNode::element("figure").with_class("gallery-item");
        figure = match ctx.mode {
            RenderMode::Publishing => figure.with_child(
                VNode::element("a")
                    .with_class("lightbox-trigger")
                    .with_attr("href", "#lightbox")
                    .with_attr("data-full", &image.url)
                    .with_child(img),
            ),
            RenderMode::Editing => figure.with_child(img),
        };

        if config.show_captions && !image.caption.is_empty() {
            figure = figure
                .with_child(VNode::element("figcaption").with_child(VNode::text(&image.caption)));
        }
        grid = grid.with_child(figure);
    }

    gallery.with_child(grid)
}

pub(crate) fn render_about(config: &ConfigMap, ctx: &RenderContext) -> VNode {
    let config = AboutConfig::read(config);

    let mut about = VNode::element("div")
        .with_class("about")
        .with_style("text-align", config.text_alignment.as_str());

    // Per-section override: an explicit background beats the theme token.
    if !config.background_color.is_empty() {
        about = about.with_style("background-color", &config.background_color);
    }

    if !ctx.owner.avatar.is_empty() {
        about = about.with_child(
            VNode::element("img")
                .with_class("about-avatar")
                .with_attr("src", &ctx.owner.avatar)
                .with_attr("alt", &ctx.owner.name),
        );
    }

    about = about.with_child(
        VNode::element("h2").with_child(VNode::text(format!("About {}", ctx.owner.name))),
    );

    let bio = if config.bio.is_empty() {
        ctx.owner.bio.clone()
    } else {
        config.bio
    };
    about = about.with_child(
        VNode::element("p")
            .with_class("about-bio")
            .with_child(VNode::text(bio)),
    );

    let mut facts = VNode::element("ul").with_class("about-facts");
    if config.years_experience > 0 {
        facts = facts.with_child(VNode::element("li").with_child(VNode::text(format!(
            "{} years behind the camera",
            config.years_experience
        ))));
    }
    if !config.starting_price.is_empty() {
        facts = facts.with_child(
            VNode::element("li")
                .with_child(VNode::text(format!("Sessions from {}", config.starting_price))),
        );
    }
    if !facts.children().is_empty() {
        about = about.with_child(facts);
    }

    let services = if config.services.is_empty() {
        ctx.owner.skills.clone()
    } else {
        config.services
    };
    if !services.is_empty() {
        let mut list = VNode::element("ul").with_class("about-services");
        for service in &services {
            list = list.with_child(
                VNode::element("li")
                    .with_class("tag")
                    .with_child(VNode::text(service)),
            );
        }
        about = about.with_child(list);
    }

    about
}

pub(crate) fn render_services(config: &ConfigMap, _ctx: &RenderContext) -> VNode {
    let config = ServicesConfig::read(config);

    let mut services = VNode::element("div")
        .with_class("services")
        .with_child(VNode::element("h2").with_child(VNode::text(config.heading)));

    let mut grid = VNode::element("div").with_class("services-grid");
    for item in &config.items {
        let mut card = VNode::element("div")
            .with_class("service-card")
            .with_child(VNode::element("h3").with_child(VNode::text(&item.name)))
            .with_child(VNode::element("p").with_child(VNode::text(&item.description)));
        if config.show_prices && !item.price.is_empty() {
            card = card.with_child(
                VNode::element("span")
                    .with_class("service-price accent")
                    .with_child(VNode::text(&item.price)),
            );
        }
        grid = grid.with_child(card);
    }

    services.with_child(grid)
}

pub(crate) fn render_packages(config: &ConfigMap, ctx: &RenderContext) -> VNode {
    let config = PackagesConfig::read(config);

    let mut packages = VNode::element("div")
        .with_class("packages")
        .with_child(VNode::element("h2").with_child(VNode::text(config.heading)));

    let mut grid = VNode::element("div").with_class("packages-grid");
    for tier in &config.tiers {
        let mut card = VNode::element("div").with_class("package-card");
        if tier.highlighted {
            card = card
                .with_class("package-card--highlighted")
                .with_style("border-color", &ctx.theme.accent);
        }
        card = card
            .with_child(VNode::element("h3").with_child(VNode::text(&tier.name)))
            .with_child(
                VNode::element("span")
                    .with_class("package-price accent")
                    .with_child(VNode::text(&tier.price)),
            )
            .with_child(VNode::element("p").with_child(VNode::text(&tier.description)));

        if !tier.features.is_empty() {
            let mut list = VNode::element("ul").with_class("package-features");
            for feature in &tier.features {
                list = list.with_child(VNode::element("li").with_child(VNode::text(feature)));
            }
            card = card.with_child(list);
        }
        grid = grid.with_child(card);
    }

    packages.with_child(grid)
}

pub(crate) fn render_testimonials(config: &ConfigMap, _ctx: &RenderContext) -> VNode {
    let config = TestimonialsConfig::read(config);

    let mut testimonials = VNode::element("div")
        .with_class("testimonials")
        .with_child(VNode::element("h2").with_child(VNode::text(config.heading)));

    for entry in &config.entries {
        let mut footer = VNode::element("footer").with_child(VNode::text(&entry.author));
        if !entry.context.is_empty() {
            footer = footer.with_child(
                VNode::element("span")
                    .with_class("testimonial-context")
                    .with_child(VNode::text(format!(" — {}", entry.context))),
            );
        }

        testimonials = testimonials.with_child(
            VNode::element("blockquote")
                .with_class("testimonial")
                .with_child(VNode::element("p").with_child(VNode::text(&entry.quote)))
                .with_child(footer),
        );
    }

    testimonials
}

pub(crate) fn render_reviews(config: &ConfigMap, ctx: &RenderContext) -> VNode {
    let config = ReviewsConfig::read(config);

    let mut reviews = VNode::element("div")
        .with_class("reviews")
        .with_child(VNode::element("h2").with_child(VNode::text(config.heading)));

    let shown = if config.max_count == 0 {
        ctx.owner.reviews.len()
    } else {
        config.max_count as usize
    };

    for review in ctx.owner.reviews.iter().take(shown) {
        let mut card = VNode::element("div").with_class("review");
        if config.show_rating {
            let stars = review.rating.clamp(1, 5) as usize;
            let rating = format!("{}{}", "★".repeat(stars), "☆".repeat(5 - stars));
            card = card.with_child(
                VNode::element("span")
                    .with_class("review-rating accent")
                    .with_attr("aria-label", format!("{stars} out of 5 stars"))
                    .with_child(VNode::text(rating)),
            );
        }
        card = card
            .with_child(VNode::element("p").with_child(VNode::text(&review.comment)))
            .with_child(
                VNode::element("footer")
                    .with_class("review-author")
                    .with_child(VNode::text(&review.author)),
            );
        reviews = reviews.with_child(card);
    }

    reviews
}

pub(crate) fn render_contact(config: &ConfigMap, ctx: &RenderContext) -> VNode {
    let config = ContactConfig::read(config);

    let mut contact = VNode::element("div")
        .with_class("contact")
        .with_child(VNode::element("h2").with_child(VNode::text(config.heading)))
        .with_child(
            VNode::element("p")
                .with_class("contact-blurb")
                .with_child(VNode::text(config.blurb)),
        );

    let mut channels = VNode::element("ul").with_class("contact-channels");
    if !config.email.is_empty() {
        channels = channels.with_child(
            VNode::element("li").with_child(
                VNode::element("a")
                    .with_attr("href", format!("mailto:{}", config.email))
                    .with_child(VNode::text(&config.email)),
            ),
        );
    }
    if !config.phone.is_empty() {
        channels = channels.with_child(
            VNode::element("li").with_child(
                VNode::element("a")
                    .with_attr("href", format!("tel:{}", config.phone))
                    .with_child(VNode::text(&config.phone)),
            ),
        );
    }
    if !channels.children().is_empty() {
        contact = contact.with_child(channels);
    }

    if config.show_social_links && !ctx.settings.social_links.is_empty() {
        let mut social = VNode::element("ul").with_class("contact-social");
        for (channel, target) in &ctx.settings.social_links {
            social = social.with_child(
                VNode::element("li").with_child(
                    VNode::element("a")
                        .with_attr("href", target)
                        .with_attr("rel", "noopener")
                        .with_child(VNode::text(channel)),
                ),
            );
        }
        contact = contact.with_child(social);
    }

    if config.show_booking_form {
        contact = contact.with_child(
            VNode::element("form")
                .with_class("booking-form")
                .with_attr("method", "post")
                .with_child(
                    VNode::element("input")
                        .with_attr("name", "name")
                        .with_attr("placeholder", "Your name"),
                )
                .with_child(
                    VNode::element("input")
                        .with_attr("name", "email")
                        .with_attr("type", "email")
                        .with_attr("placeholder", "Email"),
                )
                .with_child(
                    VNode::element("textarea")
                        .with_attr("name", "message")
                        .with_attr("placeholder", "Tell me about your shoot"),
                )
                .with_child(
                    VNode::element("button")
                        .with_class("button")
                        .with_attr("type", "submit")
                        .with_child(VNode::text("Send inquiry")),
                ),
        );
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use focal_model::{
        GlobalSettings, MediaRef, OwnerProfile, OwnerReview, ResolvedTheme, ThemePreset,
    };
    use serde_json::json;

    fn owner() -> OwnerProfile {
        OwnerProfile {
            id: "pro-1".to_string(),
            name: "Ada Marsh".to_string(),
            bio: "Documentary wedding photographer.".to_string(),
            media: vec![MediaRef {
                url: "https://img.example/one.jpg".to_string(),
                caption: "Golden hour".to_string(),
            }],
            reviews: vec![
                OwnerReview {
                    author: "June".to_string(),
                    rating: 5,
                    comment: "Wonderful to work with.".to_string(),
                },
                OwnerReview {
                    author: "Sam".to_string(),
                    rating: 4,
                    comment: "Great photos.".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    fn ctx<'a>(
        mode: RenderMode,
        theme: &'a ResolvedTheme,
        owner: &'a OwnerProfile,
        settings: &'a GlobalSettings,
    ) -> RenderContext<'a> {
        RenderContext {
            mode,
            theme,
            owner,
            settings,
        }
    }

    fn map(value: serde_json::Value) -> ConfigMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_gallery_falls_back_to_owner_media() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let owner = owner();
        let settings = GlobalSettings::default();
        let context = ctx(RenderMode::Editing, &theme, &owner, &settings);

        let node = render_gallery(&ConfigMap::new(), &context);
        let img = node.find(&|n| n.tag() == Some("img")).unwrap();
        assert_eq!(img.attr("src"), Some("https://img.example/one.jpg"));
    }

    #[test]
    fn test_gallery_lightbox_only_in_publishing_mode() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let owner = owner();
        let settings = GlobalSettings::default();

        let editing = render_gallery(
            &ConfigMap::new(),
            &ctx(RenderMode::Editing, &theme, &owner, &settings),
        );
        assert!(editing
            .find(&|n| n.attr("class") == Some("lightbox-trigger"))
            .is_none());

        let publishing = render_gallery(
            &ConfigMap::new(),
            &ctx(RenderMode::Publishing, &theme, &owner, &settings),
        );
        assert!(publishing
            .find(&|n| n.attr("class") == Some("lightbox-trigger"))
            .is_some());
    }

    #[test]
    fn test_about_background_override_beats_theme() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let owner = owner();
        let settings = GlobalSettings::default();
        let context = ctx(RenderMode::Editing, &theme, &owner, &settings);

        let stored = map(json!({"backgroundColor": "#ABCDEF"}));
        let node = render_about(&stored, &context);
        match &node {
            VNode::Element { styles, .. } => {
                assert_eq!(styles.get("background-color").unwrap(), "#ABCDEF");
            }
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn test_reviews_respect_max_count() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let owner = owner();
        let settings = GlobalSettings::default();
        let context = ctx(RenderMode::Publishing, &theme, &owner, &settings);

        let stored = map(json!({"maxCount": 1}));
        let node = render_reviews(&stored, &context);
        let count = node
            .children()
            .iter()
            .filter(|child| child.attr("class") == Some("review"))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_hero_booking_button_can_be_disabled() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let owner = owner();
        let settings = GlobalSettings::default();
        let context = ctx(RenderMode::Publishing, &theme, &owner, &settings);

        let with_button = render_hero(&ConfigMap::new(), &context);
        assert!(with_button.find(&|n| n.tag() == Some("a")).is_some());

        let stored = map(json!({"showBookingButton": false}));
        let without = render_hero(&stored, &context);
        assert!(without.find(&|n| n.tag() == Some("a")).is_none());
    }

    #[test]
    fn test_contact_renders_social_links_from_settings() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let owner = owner();
        let mut settings = GlobalSettings::default();
        settings
            .social_links
            .insert("instagram".to_string(), "https://instagram.com/ada".to_string());
        let context = ctx(RenderMode::Publishing, &theme, &owner, &settings);

        let node = render_contact(&ConfigMap::new(), &context);
        let link = node
            .find(&|n| n.attr("href") == Some("https://instagram.com/ada"))
            .unwrap();
        assert_eq!(link.tag(), Some("a"));

        let hidden = map(json!({"showSocialLinks": false}));
        let without = render_contact(&hidden, &context);
        assert!(without
            .find(&|n| n.attr("href") == Some("https://instagram.com/ada"))
            .is_none());
    }
}
