//! Typed section configuration schemas.
//!
//! Stored configuration is an open JSON map ([`ConfigMap`]) so that writes
//! are total: the editor merges keys without validating them. Reading goes
//! through the typed views in this module, which apply per-field defaults.
//! A missing or ill-typed value never fails a render; it falls back to the
//! kind's default. Unknown keys stay in the stored map untouched.

use crate::section::{ConfigMap, SectionKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read one field from a stored config map, tolerating absence and type
/// mismatches alike.
fn field<T: DeserializeOwned>(map: &ConfigMap, key: &str) -> Option<T> {
    map.get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
        }
    }
}

// ── hero ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroConfig {
    pub heading: String,
    pub tagline: String,
    pub background_image: String,
    pub alignment: TextAlignment,
    pub show_booking_button: bool,
    pub button_label: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: "Capturing your story".to_string(),
            tagline: "Photography for the moments that matter".to_string(),
            background_image: String::new(),
            alignment: TextAlignment::Center,
            show_booking_button: true,
            button_label: "Book a session".to_string(),
        }
    }
}

impl HeroConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            heading: field(map, "heading").unwrap_or(d.heading),
            tagline: field(map, "tagline").unwrap_or(d.tagline),
            background_image: field(map, "backgroundImage").unwrap_or(d.background_image),
            alignment: field(map, "alignment").unwrap_or(d.alignment),
            show_booking_button: field(map, "showBookingButton").unwrap_or(d.show_booking_button),
            button_label: field(map, "buttonLabel").unwrap_or(d.button_label),
        }
    }
}

// ── gallery ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Masonry,
    Slider,
    Carousel,
}

impl GalleryLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryLayout::Grid => "grid",
            GalleryLayout::Masonry => "masonry",
            GalleryLayout::Slider => "slider",
            GalleryLayout::Carousel => "carousel",
        }
    }
}

/// Column count is constrained to the layouts the grid CSS supports.
/// Serializes as a plain number; reads tolerate `"3"` as well as `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "ColumnsRepr")]
pub enum GalleryColumns {
    Two,
    #[default]
    Three,
    Four,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColumnsRepr {
    Number(u64),
    Text(String),
}

impl TryFrom<ColumnsRepr> for GalleryColumns {
    type Error = String;

    fn try_from(repr: ColumnsRepr) -> Result<Self, Self::Error> {
        let count = match repr {
            ColumnsRepr::Number(n) => n,
            ColumnsRepr::Text(s) => s.parse().map_err(|_| format!("bad column count: {s}"))?,
        };
        match count {
            2 => Ok(GalleryColumns::Two),
            3 => Ok(GalleryColumns::Three),
            4 => Ok(GalleryColumns::Four),
            other => Err(format!("unsupported column count: {other}")),
        }
    }
}

impl Serialize for GalleryColumns {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.count() as u64)
    }
}

impl GalleryColumns {
    pub fn count(&self) -> usize {
        match self {
            GalleryColumns::Two => 2,
            GalleryColumns::Three => 3,
            GalleryColumns::Four => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GallerySpacing {
    Tight,
    #[default]
    Normal,
    Wide,
}

impl GallerySpacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySpacing::Tight => "tight",
            GallerySpacing::Normal => "normal",
            GallerySpacing::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    pub layout: GalleryLayout,
    pub columns: GalleryColumns,
    pub spacing: GallerySpacing,
    pub show_captions: bool,
    pub categories: Vec<String>,
    pub images: Vec<GalleryImage>,
}

impl GalleryConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            layout: field(map, "layout").unwrap_or(d.layout),
            columns: field(map, "columns").unwrap_or(d.columns),
            spacing: field(map, "spacing").unwrap_or(d.spacing),
            show_captions: field(map, "showCaptions").unwrap_or(d.show_captions),
            categories: field(map, "categories").unwrap_or(d.categories),
            images: field(map, "images").unwrap_or(d.images),
        }
    }
}

// ── about ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutConfig {
    pub bio: String,
    pub years_experience: u32,
    pub starting_price: String,
    pub services: Vec<String>,
    pub text_alignment: TextAlignment,
    /// Per-section override; empty means "use the resolved theme".
    pub background_color: String,
}

impl AboutConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            bio: field(map, "bio").unwrap_or(d.bio),
            years_experience: field(map, "yearsExperience").unwrap_or(d.years_experience),
            starting_price: field(map, "startingPrice").unwrap_or(d.starting_price),
            services: field(map, "services").unwrap_or(d.services),
            text_alignment: field(map, "textAlignment").unwrap_or(d.text_alignment),
            background_color: field(map, "backgroundColor").unwrap_or(d.background_color),
        }
    }
}

// ── services ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesConfig {
    pub heading: String,
    pub items: Vec<ServiceItem>,
    pub show_prices: bool,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            heading: "Services".to_string(),
            items: Vec::new(),
            show_prices: true,
        }
    }
}

impl ServicesConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            heading: field(map, "heading").unwrap_or(d.heading),
            items: field(map, "items").unwrap_or(d.items),
            show_prices: field(map, "showPrices").unwrap_or(d.show_prices),
        }
    }
}

// ── packages ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageTier {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackagesConfig {
    pub heading: String,
    pub tiers: Vec<PackageTier>,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            heading: "Packages".to_string(),
            tiers: Vec::new(),
        }
    }
}

impl PackagesConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            heading: field(map, "heading").unwrap_or(d.heading),
            tiers: field(map, "tiers").unwrap_or(d.tiers),
        }
    }
}

// ── testimonials ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialEntry {
    pub quote: String,
    pub author: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsConfig {
    pub heading: String,
    pub entries: Vec<TestimonialEntry>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            heading: "Kind words".to_string(),
            entries: Vec::new(),
        }
    }
}

impl TestimonialsConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            heading: field(map, "heading").unwrap_or(d.heading),
            entries: field(map, "entries").unwrap_or(d.entries),
        }
    }
}

// ── reviews ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewsConfig {
    pub heading: String,
    pub show_rating: bool,
    /// 0 means "show all".
    pub max_count: u32,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            heading: "Client reviews".to_string(),
            show_rating: true,
            max_count: 0,
        }
    }
}

impl ReviewsConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            heading: field(map, "heading").unwrap_or(d.heading),
            show_rating: field(map, "showRating").unwrap_or(d.show_rating),
            max_count: field(map, "maxCount").unwrap_or(d.max_count),
        }
    }
}

// ── contact ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactConfig {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub phone: String,
    pub show_social_links: bool,
    pub show_booking_form: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Get in touch".to_string(),
            blurb: "Tell me about your shoot and I'll get back to you within a day.".to_string(),
            email: String::new(),
            phone: String::new(),
            show_social_links: true,
            show_booking_form: true,
        }
    }
}

impl ContactConfig {
    pub fn read(map: &ConfigMap) -> Self {
        let d = Self::default();
        Self {
            heading: field(map, "heading").unwrap_or(d.heading),
            blurb: field(map, "blurb").unwrap_or(d.blurb),
            email: field(map, "email").unwrap_or(d.email),
            phone: field(map, "phone").unwrap_or(d.phone),
            show_social_links: field(map, "showSocialLinks").unwrap_or(d.show_social_links),
            show_booking_form: field(map, "showBookingForm").unwrap_or(d.show_booking_form),
        }
    }
}

// ── tagged union ──

/// Typed read view over a section's stored configuration, discriminated by
/// [`SectionKind`] so lookups stay exhaustive and statically checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionConfig {
    Hero(HeroConfig),
    Gallery(GalleryConfig),
    About(AboutConfig),
    Services(ServicesConfig),
    Packages(PackagesConfig),
    Testimonials(TestimonialsConfig),
    Reviews(ReviewsConfig),
    Contact(ContactConfig),
}

impl SectionConfig {
    /// Defaulted read of a stored map under the given kind's schema.
    pub fn read(kind: SectionKind, map: &ConfigMap) -> Self {
        match kind {
            SectionKind::Hero => SectionConfig::Hero(HeroConfig::read(map)),
            SectionKind::Gallery => SectionConfig::Gallery(GalleryConfig::read(map)),
            SectionKind::About => SectionConfig::About(AboutConfig::read(map)),
            SectionKind::Services => SectionConfig::Services(ServicesConfig::read(map)),
            SectionKind::Packages => SectionConfig::Packages(PackagesConfig::read(map)),
            SectionKind::Testimonials => {
                SectionConfig::Testimonials(TestimonialsConfig::read(map))
            }
            SectionKind::Reviews => SectionConfig::Reviews(ReviewsConfig::read(map)),
            SectionKind::Contact => SectionConfig::Contact(ContactConfig::read(map)),
        }
    }

    pub fn default_for(kind: SectionKind) -> Self {
        Self::read(kind, &ConfigMap::new())
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            SectionConfig::Hero(_) => SectionKind::Hero,
            SectionConfig::Gallery(_) => SectionKind::Gallery,
            SectionConfig::About(_) => SectionKind::About,
            SectionConfig::Services(_) => SectionKind::Services,
            SectionConfig::Packages(_) => SectionKind::Packages,
            SectionConfig::Testimonials(_) => SectionKind::Testimonials,
            SectionConfig::Reviews(_) => SectionKind::Reviews,
            SectionConfig::Contact(_) => SectionKind::Contact,
        }
    }

    /// Serialize back to the open map representation, without the type
    /// tag (the instance carries the kind).
    pub fn to_map(&self) -> ConfigMap {
        let value = match self {
            SectionConfig::Hero(c) => serde_json::to_value(c),
            SectionConfig::Gallery(c) => serde_json::to_value(c),
            SectionConfig::About(c) => serde_json::to_value(c),
            SectionConfig::Services(c) => serde_json::to_value(c),
            SectionConfig::Packages(c) => serde_json::to_value(c),
            SectionConfig::Testimonials(c) => serde_json::to_value(c),
            SectionConfig::Reviews(c) => serde_json::to_value(c),
            SectionConfig::Contact(c) => serde_json::to_value(c),
        };

        match value {
            Ok(Value::Object(map)) => map,
            _ => ConfigMap::new(),
        }
    }
}
