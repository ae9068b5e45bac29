use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info  // Production
}

// Gallery
/// Minimum horizontal travel (px) before a touch drag counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
/// How far ahead of the viewport deferred thumbnails start loading.
pub const LAZY_ROOT_MARGIN: &str = "50px";
/// Thumbnails rendered with their real source up front; the rest are deferred.
pub const EAGER_THUMBNAILS: usize = 4;
/// Shown in deferred thumbnails until the real source is swapped in.
pub const PLACEHOLDER_SRC: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

// Navigation
pub const NAV_SHADOW_SCROLL_PX: f64 = 100.0;
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 200.0;
pub const SCROLL_TOP_VISIBLE_PX: f64 = 500.0;

// Fade-in on scroll
pub const FADE_IN_SELECTOR: &str = ".feature-item, .menu-category, .gallery-item, .info-card, .contact-item";
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const FADE_IN_STAGGER_SECS: f64 = 0.1;

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const FORM_MESSAGE_HIDE_MS: u32 = 5_000;
