//! Core application state and mode management

use std::time::Instant;

use folio_core::backdrop::{is_scrolled, Parallax};
use folio_core::catalog::{browse, featured_by_domain, filter_tabs, CategoryFilter, ProjectRecord};
use folio_core::clock::ClockZone;
use folio_core::contact::{ContactForm, SubmitOutcome};
use folio_core::content::Portfolio;
use folio_core::disclosure::Disclosure;
use folio_core::glow::{ElementKind, ElementRect, GlowController, PointerEvent, PointerState};
use folio_core::locale::Locale;
use folio_core::motion::MotionPreference;
use tracing::{debug, info};

/// Pixels of page scroll per wheel notch.
pub const SCROLL_STEP: f64 = 40.0;

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate tabs, lists and toggles
    #[default]
    Normal,
    /// Typing into the contact form
    Edit,
}

/// Page shown in the main area, in nav order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Projects, Tab::About, Tab::Contact];

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Projects => 1,
            Tab::About => 2,
            Tab::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Projects => "Projects",
            Tab::About => "About",
            Tab::Contact => "Contact",
        }
    }

    /// Route a nav link target (`/`, `/projects`, `/about#skills`, ...) to its page.
    pub fn from_href(href: &str) -> Option<Self> {
        let path = href.split(['#', '?']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Some(Tab::Home),
            "/projects" => Some(Tab::Projects),
            "/about" => Some(Tab::About),
            "/contact" => Some(Tab::Contact),
            _ => None,
        }
    }
}

/// Contact form field with input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

/// Result line shown under the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Sent(String),
    Errors(Vec<String>),
}

/// A mouse-reactive surface and the slot it occupies in [`App`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Nav(usize),
    Pill(usize),
    /// Index into `Portfolio::projects`
    Card(usize),
    AboutPanel,
    DetailPanel,
    ContactPanel,
    SendButton,
    DisclosureButton,
}

/// Glow controllers for every surface the UI can draw
#[derive(Debug)]
pub struct Glows {
    pub nav: Vec<GlowController>,
    pub pills: Vec<GlowController>,
    pub cards: Vec<GlowController>,
    pub about_panel: GlowController,
    pub detail_panel: GlowController,
    pub contact_panel: GlowController,
    pub send_button: GlowController,
    pub disclosure_button: GlowController,
}

impl Glows {
    fn new(motion: &MotionPreference, project_count: usize) -> Self {
        let many = |kind: ElementKind, n: usize| -> Vec<GlowController> {
            (0..n).map(|_| GlowController::for_kind(kind, motion)).collect()
        };
        Self {
            nav: many(ElementKind::NavItem, Tab::ALL.len()),
            pills: many(ElementKind::FilterPill, filter_tabs().len()),
            cards: many(ElementKind::Card, project_count),
            about_panel: GlowController::for_kind(ElementKind::Panel, motion),
            detail_panel: GlowController::for_kind(ElementKind::Panel, motion),
            contact_panel: GlowController::for_kind(ElementKind::Panel, motion),
            send_button: GlowController::for_kind(ElementKind::Button, motion),
            disclosure_button: GlowController::for_kind(ElementKind::Button, motion),
        }
    }

    pub fn get(&self, surface: Surface) -> Option<&GlowController> {
        match surface {
            Surface::Nav(i) => self.nav.get(i),
            Surface::Pill(i) => self.pills.get(i),
            Surface::Card(i) => self.cards.get(i),
            Surface::AboutPanel => Some(&self.about_panel),
            Surface::DetailPanel => Some(&self.detail_panel),
            Surface::ContactPanel => Some(&self.contact_panel),
            Surface::SendButton => Some(&self.send_button),
            Surface::DisclosureButton => Some(&self.disclosure_button),
        }
    }

    pub fn get_mut(&mut self, surface: Surface) -> Option<&mut GlowController> {
        match surface {
            Surface::Nav(i) => self.nav.get_mut(i),
            Surface::Pill(i) => self.pills.get_mut(i),
            Surface::Card(i) => self.cards.get_mut(i),
            Surface::AboutPanel => Some(&mut self.about_panel),
            Surface::DetailPanel => Some(&mut self.detail_panel),
            Surface::ContactPanel => Some(&mut self.contact_panel),
            Surface::SendButton => Some(&mut self.send_button),
            Surface::DisclosureButton => Some(&mut self.disclosure_button),
        }
    }

    fn all_mut(&mut self) -> impl Iterator<Item = &mut GlowController> {
        self.nav
            .iter_mut()
            .chain(self.pills.iter_mut())
            .chain(self.cards.iter_mut())
            .chain([
                &mut self.about_panel,
                &mut self.detail_panel,
                &mut self.contact_panel,
                &mut self.send_button,
                &mut self.disclosure_button,
            ])
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub mode: Mode,
    pub tab: Tab,
    pub portfolio: Portfolio,
    pub locale: Locale,
    pub motion: MotionPreference,
    pub glows: Glows,
    /// Surfaces drawn in the last frame, with their hit rectangles
    pub hit_regions: Vec<(Surface, ElementRect)>,
    pub filter_index: usize,
    /// Selection within the filtered project listing
    pub selected_project: usize,
    pub form: ContactForm,
    pub form_field: FormField,
    pub feedback: Option<Feedback>,
    pub disclosure: Disclosure,
    pub parallax: Parallax,
    pub scroll_y: f64,
    /// Terminal size in cells, updated every frame
    pub viewport: (u16, u16),
    pub clock_zone: ClockZone,
    pub clock_text: String,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        locale: Locale,
        motion: MotionPreference,
        clock_zone: ClockZone,
    ) -> Self {
        let glows = Glows::new(&motion, portfolio.projects.len());
        let parallax = Parallax::new(&motion);
        Self {
            mode: Mode::Normal,
            tab: Tab::Home,
            portfolio,
            locale,
            glows,
            hit_regions: Vec::new(),
            filter_index: 0,
            selected_project: 0,
            form: ContactForm::default(),
            form_field: FormField::Name,
            feedback: None,
            disclosure: Disclosure::default(),
            parallax,
            scroll_y: 0.0,
            viewport: (0, 0),
            clock_text: clock_zone.now(),
            clock_zone,
            motion,
            should_quit: false,
            status_message: None,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        debug!(from = ?self.tab, to = ?tab, "switch tab");
        self.tab = tab;
        self.mode = Mode::Normal;
        self.scroll_y = 0.0;
        self.parallax.on_scroll(0.0, Instant::now());
        // Surfaces of the old page are gone: no highlight may linger
        self.release_glows();
    }

    pub fn next_tab(&mut self) {
        let next = (self.tab.index() + 1) % Tab::ALL.len();
        self.switch_tab(Tab::ALL[next]);
    }

    pub fn prev_tab(&mut self) {
        let prev = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.switch_tab(Tab::ALL[prev]);
    }

    // === Projects ===

    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_token(filter_tabs()[self.filter_index].id)
    }

    pub fn set_filter(&mut self, index: usize) {
        if index < filter_tabs().len() {
            self.filter_index = index;
            self.selected_project = 0;
        }
    }

    pub fn next_filter(&mut self) {
        self.set_filter((self.filter_index + 1) % filter_tabs().len());
    }

    pub fn prev_filter(&mut self) {
        let n = filter_tabs().len();
        self.set_filter((self.filter_index + n - 1) % n);
    }

    /// Projects page listing for the active filter.
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        browse(&self.portfolio.projects, &self.filter())
    }

    pub fn featured_projects(&self) -> Vec<&ProjectRecord> {
        featured_by_domain(&self.portfolio.projects)
    }

    pub fn selected(&self) -> Option<&ProjectRecord> {
        self.visible_projects().get(self.selected_project).copied()
    }

    /// Position of a record in `portfolio.projects`, used for card glows.
    pub fn project_slot(&self, slug: &str) -> Option<usize> {
        self.portfolio.projects.iter().position(|p| p.slug == slug)
    }

    pub fn select_next(&mut self) {
        let n = self.visible_projects().len();
        if n > 0 {
            self.selected_project = (self.selected_project + 1) % n;
        }
    }

    pub fn select_prev(&mut self) {
        let n = self.visible_projects().len();
        if n > 0 {
            self.selected_project = self.selected_project.checked_sub(1).unwrap_or(n - 1);
        }
    }

    /// Select a card by its slot in `portfolio.projects`.
    pub fn select_slot(&mut self, slot: usize) {
        let Some(slug) = self.portfolio.projects.get(slot).map(|p| p.slug.clone()) else {
            return;
        };
        let pos = self.visible_projects().iter().position(|p| p.slug == slug);
        if let Some(pos) = pos {
            self.selected_project = pos;
        }
    }

    // === About ===

    pub fn toggle_disclosure(&mut self) {
        self.disclosure.toggle();
    }

    // === Contact ===

    pub fn start_editing(&mut self) {
        self.tab = Tab::Contact;
        self.mode = Mode::Edit;
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.form_field {
            FormField::Name => &mut self.form.name,
            FormField::Email => &mut self.form.email,
            FormField::Message => &mut self.form.message,
        }
    }

    pub fn field_insert(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn field_backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.form_field = self.form_field.next();
    }

    pub fn submit_form(&mut self) {
        match self.form.submit(self.locale) {
            SubmitOutcome::Sent { acknowledgment } => {
                info!("contact form accepted");
                self.feedback = Some(Feedback::Sent(acknowledgment.to_string()));
                self.form_field = FormField::Name;
                self.mode = Mode::Normal;
            }
            SubmitOutcome::Rejected(result) => {
                debug!(failures = result.failures().len(), "contact form rejected");
                self.feedback = Some(Feedback::Errors(result.error_lines().to_vec()));
            }
        }
    }

    // === Pointer, scroll and motion ===

    /// Drop all layout rectangles; the renderer re-registers what it draws.
    pub fn begin_frame(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.hit_regions.clear();
        for glow in self.glows.all_mut() {
            glow.clear_bounds();
        }
    }

    pub fn register(&mut self, surface: Surface, rect: ElementRect) {
        if let Some(glow) = self.glows.get_mut(surface) {
            glow.set_bounds(rect);
            self.hit_regions.push((surface, rect));
        }
    }

    /// Mouse moved to a terminal cell.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let event = PointerEvent::new(f64::from(column), f64::from(row));
        for glow in self.glows.all_mut() {
            glow.track(event);
        }
        let (w, h) = self.viewport;
        self.parallax.on_cursor(
            event.client_x,
            event.client_y,
            f64::from(w),
            f64::from(h),
            Instant::now(),
        );
    }

    /// Surface under a cell, topmost (last drawn) first.
    pub fn surface_at(&self, column: u16, row: u16) -> Option<Surface> {
        let (x, y) = (f64::from(column), f64::from(row));
        self.hit_regions
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(surface, _)| *surface)
    }

    /// Left click on a cell.
    pub fn click(&mut self, column: u16, row: u16) {
        match self.surface_at(column, row) {
            Some(Surface::Nav(i)) => {
                if let Some(tab) = Tab::from_index(i) {
                    self.switch_tab(tab);
                }
            }
            Some(Surface::Pill(i)) => self.set_filter(i),
            Some(Surface::Card(slot)) => {
                if self.tab == Tab::Home {
                    self.switch_tab(Tab::Projects);
                    self.set_filter(0);
                }
                self.select_slot(slot);
            }
            Some(Surface::SendButton) => self.submit_form(),
            Some(Surface::DisclosureButton) => self.toggle_disclosure(),
            Some(Surface::ContactPanel) => self.start_editing(),
            _ => {}
        }
    }

    /// Wheel scroll; positive is down.
    pub fn scroll(&mut self, notches: i32) {
        self.scroll_y = (self.scroll_y + f64::from(notches) * SCROLL_STEP).max(0.0);
        self.parallax.on_scroll(self.scroll_y, Instant::now());
        if self.tab == Tab::Projects {
            if notches > 0 {
                self.select_next();
            } else {
                self.select_prev();
            }
        }
    }

    pub fn header_compact(&self) -> bool {
        is_scrolled(self.scroll_y)
    }

    /// Platform reduced-motion notification.
    pub fn toggle_reduced_motion(&mut self) {
        let reduced = self.motion.toggle();
        self.parallax.sync_motion();
        info!(reduced, "reduced motion toggled");
        self.set_status(if reduced {
            "Reduced motion: on"
        } else {
            "Reduced motion: off"
        });
    }

    /// Label for a nav tab: the content's link routed to it, else the tab title.
    pub fn nav_label(&self, tab: Tab) -> &str {
        self.portfolio
            .navigation
            .iter()
            .find(|link| Tab::from_href(&link.href) == Some(tab))
            .map_or(tab.title(), |link| link.label.as_str())
    }

    /// Glow to paint on `surface`. Nothing is lit while motion is reduced.
    pub fn lit_glow(&self, surface: Surface) -> Option<PointerState> {
        if self.motion.is_reduced() {
            return None;
        }
        self.glows
            .get(surface)
            .map(GlowController::state)
            .filter(PointerState::is_visible)
    }

    /// CSS-style readout of the glow under the pointer, if any is lit.
    pub fn active_glow(&self) -> Option<(Surface, String)> {
        self.hit_regions
            .iter()
            .find_map(|(surface, _)| Some((*surface, self.lit_glow(*surface)?.to_css())))
    }

    fn release_glows(&mut self) {
        let away = PointerEvent::new(-1.0, -1.0);
        for glow in self.glows.all_mut() {
            glow.pointer_leave(away);
            glow.clear_bounds();
        }
        self.hit_regions.clear();
    }

    /// Periodic work between events: clock refresh.
    pub fn tick(&mut self) {
        let now = self.clock_zone.now();
        if now != self.clock_text {
            self.clock_text = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let portfolio = Portfolio::bundled().unwrap();
        App::new(
            portfolio,
            Locale::En,
            MotionPreference::new(false),
            ClockZone::Local,
        )
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.next_tab();
        assert_eq!(app.tab, Tab::Projects);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.tab, Tab::Contact);
    }

    #[test]
    fn test_filter_limits_listing() {
        let mut app = app();
        let all = app.visible_projects().len();
        app.set_filter(1); // ai
        let ai = app.visible_projects();
        assert!(ai.len() < all);
        assert!(ai.iter().all(|p| p.category == "ai"));
    }

    #[test]
    fn test_hover_lights_and_leaves() {
        let mut app = app();
        app.begin_frame(80, 24);
        app.register(Surface::Nav(1), ElementRect::new(10.0, 0.0, 10.0, 1.0));

        app.pointer_moved(15, 0);
        let (surface, css) = app.active_glow().unwrap();
        assert_eq!(surface, Surface::Nav(1));
        assert_eq!(css, "--glow-x: 50%; --glow-opacity: 1");

        app.pointer_moved(40, 10);
        assert!(app.active_glow().is_none());
    }

    #[test]
    fn test_reduced_motion_blocks_hover() {
        let mut app = app();
        app.toggle_reduced_motion();
        app.begin_frame(80, 24);
        app.register(Surface::AboutPanel, ElementRect::new(0.0, 0.0, 20.0, 10.0));
        app.pointer_moved(5, 5);
        assert!(app.active_glow().is_none());
        assert_eq!(app.status_message.as_deref(), Some("Reduced motion: on"));
    }

    #[test]
    fn test_reduced_motion_suppresses_lit_glow() {
        let mut app = app();
        app.begin_frame(80, 24);
        app.register(Surface::AboutPanel, ElementRect::new(0.0, 0.0, 20.0, 10.0));
        app.pointer_moved(5, 5);
        assert!(app.active_glow().is_some());

        app.toggle_reduced_motion();
        app.begin_frame(80, 24);
        app.register(Surface::AboutPanel, ElementRect::new(0.0, 0.0, 20.0, 10.0));
        app.pointer_moved(6, 6);
        assert!(app.glows.about_panel.state().is_visible());
        assert!(app.lit_glow(Surface::AboutPanel).is_none());
        assert!(app.active_glow().is_none());

        app.toggle_reduced_motion();
        assert!(app.lit_glow(Surface::AboutPanel).is_some());
    }

    #[test]
    fn test_nav_labels_follow_link_targets() {
        let mut portfolio = Portfolio::bundled().unwrap();
        portfolio.navigation.reverse();
        portfolio.navigation.retain(|link| link.href != "/projects");
        let app = App::new(
            portfolio,
            Locale::En,
            MotionPreference::new(false),
            ClockZone::Local,
        );
        let about = app
            .portfolio
            .navigation
            .iter()
            .find(|link| link.href == "/about")
            .unwrap()
            .label
            .clone();
        assert_eq!(app.nav_label(Tab::About), about);
        assert_eq!(app.nav_label(Tab::Projects), "Projects");
        assert_eq!(Tab::from_href("/about#skills"), Some(Tab::About));
        assert_eq!(Tab::from_href("/"), Some(Tab::Home));
        assert_eq!(Tab::from_href("https://github.com"), None);
    }

    #[test]
    fn test_switch_tab_releases_glows() {
        let mut app = app();
        app.begin_frame(80, 24);
        app.register(Surface::AboutPanel, ElementRect::new(0.0, 0.0, 20.0, 10.0));
        app.pointer_moved(5, 5);
        assert!(app.glows.about_panel.state().is_visible());

        app.switch_tab(Tab::Contact);
        assert!(!app.glows.about_panel.state().is_visible());
        assert!(app.hit_regions.is_empty());
    }

    #[test]
    fn test_form_submit_flow() {
        let mut app = app();
        app.start_editing();
        app.submit_form();
        assert!(matches!(app.feedback, Some(Feedback::Errors(ref lines)) if lines.len() == 3));

        for c in "Ada".chars() {
            app.field_insert(c);
        }
        app.next_field();
        for c in "ada@example.com".chars() {
            app.field_insert(c);
        }
        app.next_field();
        app.field_insert('x');
        app.submit_form();
        assert_eq!(
            app.feedback,
            Some(Feedback::Sent("Your message was sent successfully.".into()))
        );
        assert_eq!(app.form, ContactForm::default());
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_scroll_compacts_header() {
        let mut app = app();
        app.scroll(1);
        assert!(!app.header_compact());
        app.scroll(1);
        assert!(app.header_compact());
        app.scroll(-5);
        assert_eq!(app.scroll_y, 0.0);
    }

    #[test]
    fn test_click_card_on_home_opens_project() {
        let mut app = app();
        let slot = app.project_slot("robotaxi").unwrap();
        app.begin_frame(80, 24);
        app.register(Surface::Card(slot), ElementRect::new(0.0, 5.0, 30.0, 4.0));
        app.click(3, 6);
        assert_eq!(app.tab, Tab::Projects);
        assert_eq!(app.selected().unwrap().slug, "robotaxi");
    }
}
