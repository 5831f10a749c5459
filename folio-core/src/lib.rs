pub mod backdrop;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod contact;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod glow;
pub mod locale;
pub mod motion;

pub use backdrop::{is_scrolled, BackdropFrame, Parallax};
pub use catalog::{
    browse, category_label, category_style, featured_by_domain, filter_projects, filter_tabs,
    find_by_slug, sort_projects, unity_projects, Category, CategoryFilter, FilterTab,
    ProjectRecord,
};
pub use clock::ClockZone;
pub use config::FolioConfig;
pub use contact::{validate_contact, ContactCheck, ContactForm, SubmitOutcome, ValidationResult};
pub use content::{NavLink, Portfolio, Profile, Skills};
pub use disclosure::Disclosure;
pub use error::{FolioError, Result};
pub use glow::{ElementKind, ElementRect, GlowAxes, GlowController, PointerEvent, PointerState};
pub use locale::Locale;
pub use motion::{MotionPreference, MotionSubscription};
