//! Shared constants for the widgets crate.

// ── Notifications ───────────────────────────────────────────────

/// Delay before a freshly mounted banner slides into view.
pub const NOTIFY_ENTER_DELAY_MS: u32 = 100;

/// Time a banner stays on screen before dismissing itself.
pub const NOTIFY_AUTO_DISMISS_MS: u32 = 5000;

/// Length of the slide-out transition; removal happens when it ends.
pub const NOTIFY_EXIT_MS: u32 = 300;

/// Background for success banners.
pub const COLOR_SUCCESS: &str = "#10b981";

/// Background for error banners.
pub const COLOR_ERROR: &str = "#ef4444";

/// Background for informational banners.
pub const COLOR_INFO: &str = "#3b82f6";

/// Banner transform while off-screen (before entry and while exiting).
pub const BANNER_HIDDEN_TRANSFORM: &str = "translateX(100%)";

/// Banner transform while on screen.
pub const BANNER_SHOWN_TRANSFORM: &str = "translateX(0)";

// ── Header ──────────────────────────────────────────────────────

/// Scroll offset past which the header gets the `scrolled` class.
pub const HEADER_SCROLLED_PX: f64 = 100.0;

/// Scroll offset past which scrolling down hides the header.
pub const HEADER_HIDE_PX: f64 = 200.0;

// ── Scrolling ───────────────────────────────────────────────────

/// Gap left between the fixed header and a smooth-scroll target.
pub const SCROLL_TARGET_GAP_PX: f64 = 20.0;

/// How far above the viewport bottom a `.scroll-reveal` element must rise.
pub const REVEAL_OFFSET_PX: f64 = 150.0;

/// Intersection ratio that triggers the `animate-in` class.
pub const OBSERVER_THRESHOLD: f64 = 0.1;

/// Root margin of the reveal intersection observer.
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Elements animated in by the intersection observer.
pub const ANIMATE_SELECTOR: &str = ".program-card, .service-card, .advantage-item, .gallery-card";

// ── Menu ────────────────────────────────────────────────────────

/// Viewport width above which the mobile menu is force-closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Modal ───────────────────────────────────────────────────────

/// Descendants of the modal that participate in the focus trap.
pub const FOCUSABLE_SELECTOR: &str = r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Query parameter appended to the embedded video source while open.
pub const AUTOPLAY_PARAM: &str = "autoplay=1";

// ── Forms ───────────────────────────────────────────────────────

pub const FORM_SUCCESS_MESSAGE: &str = "Formulario enviado correctamente";
pub const FORM_ERROR_MESSAGE: &str = "Por favor, completa todos los campos requeridos";

// ── Links / storage ─────────────────────────────────────────────

pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";
pub const WHATSAPP_PHONE: &str = "+5491112345678";
pub const WHATSAPP_GREETING: &str =
    "Hola! Me interesa conocer más sobre las carreras del Instituto Tecnológico El Molino.";

/// Local-storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Year literal in the footer markup replaced by the current year.
pub const FOOTER_YEAR_PLACEHOLDER: &str = "2024";
