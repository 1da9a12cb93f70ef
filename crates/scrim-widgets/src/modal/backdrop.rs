#![forbid(unsafe_code)]

//! The modal backdrop: a dimmed, tap-sensitive scrim behind a dialog.
//!
//! Two modes, decided by the content:
//!
//! - **Dimmed** (default): composites a translucent layer over everything
//!   already painted in the area and registers one hit region so a tap can
//!   dismiss the modal.
//! - **Custom**: paints the same dimmed layer, then renders caller-supplied
//!   content inside it. No hit region, no press action, no accessibility
//!   node; the content owns its own interaction.
//!
//! In both modes the area is marked scrape-hidden and selection-suppressed,
//! so text extraction and drag selection skip the covered cells.
//!
//! Fade playback lives in [`BackdropState`]; the host calls
//! [`BackdropState::show`] / [`BackdropState::hide`] and ticks the state
//! between frames. Rendering never starts a fade on its own.

use std::time::Duration;

use scrim_a11y::{A11yId, A11yRegistry, AccessibleProps, MotionPreference, Role};
use scrim_core::event::{Event, MouseButton, MouseEventKind};
use scrim_core::geometry::Rect;
use scrim_i18n::{LocaleContext, StringCatalog};
use scrim_render::frame::{Frame, HitData, HitId, HitRegion};
use scrim_style::{Style, current_theme};
use web_time::Instant;

use crate::modal::animation::{BackdropAnimation, FadeConfig, KeyframeCache};
use crate::{StatefulWidget, Widget, composite_bg_area, set_style_area};

/// Hit region id for the tap-sensitive scrim surface.
pub const BACKDROP_HIT: HitRegion = HitRegion::Custom(1);

/// Catalog key for the backdrop's accessibility label.
const BACKDROP_LABEL_KEY: &str = "modal.backdropLabel";

/// Content type of a backdrop that only ever dims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;

impl Widget for NoContent {
    fn render(&self, _area: Rect, _frame: &mut Frame) {}
}

/// What fills the backdrop area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropContent<W = NoContent> {
    /// The default dimmed, tap-sensitive scrim.
    Dimmed,
    /// Caller-supplied content rendered inside the animated wrapper.
    Custom(W),
}

/// Action surfaced by [`Backdrop::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropAction {
    /// The user tapped the scrim surface.
    Pressed,
}

/// The backdrop widget. See the module docs for the two modes.
#[derive(Debug, Clone)]
pub struct Backdrop<W = NoContent> {
    content: BackdropContent<W>,
    visible: bool,
    opacity: Option<f32>,
    style: Style,
    fade: FadeConfig,
    hit_id: Option<HitId>,
}

impl Backdrop<NoContent> {
    /// A visible dimmed backdrop with theme-default opacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: BackdropContent::Dimmed,
            visible: true,
            opacity: None,
            style: Style::new(),
            fade: FadeConfig::new(),
            hit_id: None,
        }
    }
}

impl Default for Backdrop<NoContent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Backdrop<W> {
    /// A backdrop that renders `content` inside the animated wrapper
    /// instead of the bare scrim. Custom backdrops are non-interactive.
    #[must_use]
    pub fn custom(content: W) -> Self {
        Self {
            content: BackdropContent::Custom(content),
            visible: true,
            opacity: None,
            style: Style::new(),
            fade: FadeConfig::new(),
            hit_id: None,
        }
    }

    /// Gate the whole backdrop. When false, rendering produces no cells,
    /// hit regions, extraction markers, or accessibility nodes.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Target opacity of the dimmed layer, clamped to `[0, 1]`. Defaults
    /// to the theme's overlay opacity.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Style overrides merged onto the theme's modal-backdrop style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the fade configuration.
    #[must_use]
    pub fn fade(mut self, fade: FadeConfig) -> Self {
        self.fade = fade;
        self
    }

    /// Set the fade-in duration.
    #[must_use]
    pub fn fade_in(mut self, duration: Duration) -> Self {
        self.fade.fade_in = duration;
        self
    }

    /// Set the fade-out duration.
    #[must_use]
    pub fn fade_out(mut self, duration: Duration) -> Self {
        self.fade.fade_out = duration;
        self
    }

    /// Identity for the tap surface on the hit grid. Without one, the
    /// dimmed backdrop paints but cannot be tapped.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Whether this backdrop renders custom content.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self.content, BackdropContent::Custom(_))
    }

    /// The fade configuration.
    #[must_use]
    pub const fn fade_config(&self) -> &FadeConfig {
        &self.fade
    }

    /// The opacity the fade settles at: the explicit override, or the
    /// current theme's overlay opacity.
    #[must_use]
    pub fn opacity_target(&self) -> f32 {
        self.opacity
            .unwrap_or_else(|| current_theme().overlay_opacity())
    }

    /// Accessibility node for the tap surface, labeled through `catalog`
    /// in the active locale. Custom and invisible backdrops expose none.
    #[must_use]
    pub fn accessible_props(&self, catalog: &StringCatalog) -> Option<AccessibleProps> {
        if !self.visible || self.is_custom() {
            return None;
        }
        let locale = LocaleContext::global().current_locale();
        let label = catalog.translate(&locale, BACKDROP_LABEL_KEY);
        Some(AccessibleProps::new(Role::Button, label))
    }

    /// Register the tap surface with an accessibility registry. Returns
    /// the node id when one was produced.
    pub fn register_a11y(
        &self,
        registry: &mut A11yRegistry,
        area: Rect,
        catalog: &StringCatalog,
    ) -> Option<A11yId> {
        let props = self.accessible_props(catalog)?;
        Some(registry.register(area, props))
    }

    /// Route a host event through the backdrop.
    ///
    /// A press is a left-button down followed by a left-button up, both
    /// resolving to this backdrop's hit region. The down arms the press;
    /// the up fires it. Custom and invisible backdrops never fire.
    pub fn handle_event(
        &self,
        state: &mut BackdropState,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> Option<BackdropAction> {
        if !self.visible {
            return None;
        }
        if self.is_custom() {
            #[cfg(feature = "tracing")]
            if let Event::Mouse(mouse) = event
                && mouse.kind == MouseEventKind::Up(MouseButton::Left)
            {
                tracing::trace!("press ignored by custom backdrop");
            }
            return None;
        }

        let on_surface = matches!(
            (hit, self.hit_id),
            (Some((id, region, _)), Some(expected)) if id == expected && region == BACKDROP_HIT
        );

        if let Event::Mouse(mouse) = event {
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    state.press_armed = on_surface;
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    let fired = state.press_armed && on_surface;
                    state.press_armed = false;
                    if fired {
                        #[cfg(feature = "tracing")]
                        tracing::trace!("backdrop pressed");
                        return Some(BackdropAction::Pressed);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// Fade playback and press tracking for one backdrop.
#[derive(Debug, Clone)]
pub struct BackdropState {
    animation: BackdropAnimation,
    cache: KeyframeCache,
    motion: MotionPreference,
    press_armed: bool,
    last_tick: Option<Instant>,
}

impl Default for BackdropState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackdropState {
    /// Hidden state; motion preference detected from the environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            animation: BackdropAnimation::new(),
            cache: KeyframeCache::new(),
            motion: MotionPreference::detect(),
            press_armed: false,
            last_tick: None,
        }
    }

    /// Fully shown state, no fade-in.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            animation: BackdropAnimation::shown(),
            ..Self::new()
        }
    }

    /// The current fade playback.
    #[must_use]
    pub const fn animation(&self) -> &BackdropAnimation {
        &self.animation
    }

    /// Whether a fade is in progress and rendering needs another frame.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Override the detected motion preference.
    pub fn set_motion_preference(&mut self, motion: MotionPreference) {
        self.motion = motion;
    }

    /// Begin fading in.
    pub fn show(&mut self) {
        self.animation.show();
    }

    /// Begin fading out.
    pub fn hide(&mut self) {
        self.animation.hide();
    }

    /// Jump to fully shown.
    pub fn force_show(&mut self) {
        self.animation.force_show();
    }

    /// Jump to fully hidden.
    pub fn force_hide(&mut self) {
        self.animation.force_hide();
    }

    /// Advance the fade by `delta` under the effective configuration
    /// (reduced motion collapses durations). Returns `true` when the
    /// phase changed.
    pub fn tick(&mut self, delta: Duration, config: &FadeConfig) -> bool {
        let effective = config.effective(self.motion);
        self.animation.tick(delta, &effective)
    }

    /// Advance the fade by the wall-clock time since the previous call.
    /// The first call after creation advances by zero.
    pub fn tick_now(&mut self, config: &FadeConfig) -> bool {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_tick = Some(now);
        self.tick(delta, config)
    }

    /// Current opacity toward `target`, sampled through the descriptor
    /// cache.
    pub fn opacity(&mut self, target: f32, config: &FadeConfig) -> f32 {
        self.animation.opacity(target, config, &mut self.cache)
    }

    /// Descriptor rebuild count; useful for asserting cache reuse.
    #[must_use]
    pub const fn keyframe_generation(&self) -> u64 {
        self.cache.generation()
    }
}

impl<W: Widget> StatefulWidget for Backdrop<W> {
    type State = BackdropState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || !self.visible || !state.animation.is_visible() {
            return;
        }

        frame.mark_scrape_hidden(area);
        frame.mark_selection_suppressed(area);

        let theme = current_theme();
        let target = self.opacity.unwrap_or_else(|| theme.overlay_opacity());
        let opacity = state.opacity(target, &self.fade);

        let style = theme.modal_backdrop().merge(self.style);
        if let Some(bg) = style.bg {
            composite_bg_area(&mut frame.buffer, area, bg.resolve().with_opacity(opacity));
        }
        let residual = Style { bg: None, ..style };
        if !residual.is_empty() {
            set_style_area(&mut frame.buffer, area, residual);
        }

        match &self.content {
            BackdropContent::Dimmed => {
                // Hits register after painting so the scrim sits on top.
                if let Some(hit_id) = self.hit_id {
                    frame.register_hit(area, hit_id, BACKDROP_HIT, 0);
                }
            }
            BackdropContent::Custom(content) => content.render(area, frame),
        }
    }
}

impl<W: Widget> Widget for Backdrop<W> {
    /// Stateless rendering shows the backdrop fully faded in.
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = BackdropState::shown();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::animation::{FADE_IN_DEFAULT, FADE_OUT_DEFAULT};
    use scrim_render::cell::{Cell, PackedRgba};
    use scrim_render::grapheme_pool::GraphemePool;
    use scrim_style::Color;

    struct Stub;

    impl Widget for Stub {
        fn render(&self, area: Rect, frame: &mut Frame) {
            frame.buffer.set(area.x, area.y, Cell::from_char('#'));
        }
    }

    fn hit_from(frame: &Frame, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        frame.hit_test(x, y)
    }

    // -------------------------------------------------------------------------
    // Construction and builders
    // -------------------------------------------------------------------------

    #[test]
    fn default_backdrop_is_dimmed_and_visible() {
        let backdrop = Backdrop::new();
        assert!(!backdrop.is_custom());
        assert!(backdrop.visible);
        assert_eq!(backdrop.opacity, None);
        assert_eq!(backdrop.hit_id, None);
    }

    #[test]
    fn custom_backdrop_reports_custom() {
        let backdrop = Backdrop::custom(Stub);
        assert!(backdrop.is_custom());
    }

    #[test]
    fn builders_set_fields() {
        let backdrop = Backdrop::new()
            .visible(false)
            .opacity(0.5)
            .style(Style::new().bold())
            .fade_in(Duration::from_millis(500))
            .fade_out(Duration::from_millis(80))
            .hit_id(HitId::new(7));

        assert!(!backdrop.visible);
        assert_eq!(backdrop.opacity, Some(0.5));
        assert_eq!(backdrop.fade.fade_in, Duration::from_millis(500));
        assert_eq!(backdrop.fade.fade_out, Duration::from_millis(80));
        assert_eq!(backdrop.hit_id, Some(HitId::new(7)));
    }

    #[test]
    fn opacity_builder_clamps() {
        assert_eq!(Backdrop::new().opacity(1.8).opacity, Some(1.0));
        assert_eq!(Backdrop::new().opacity(-0.3).opacity, Some(0.0));
    }

    #[test]
    fn fade_durations_default() {
        let backdrop = Backdrop::new();
        assert_eq!(backdrop.fade_config().fade_in, FADE_IN_DEFAULT);
        assert_eq!(backdrop.fade_config().fade_out, FADE_OUT_DEFAULT);
    }

    #[test]
    fn explicit_fade_in_reaches_the_descriptor() {
        let backdrop = Backdrop::new().fade_in(Duration::from_millis(500));
        let mut state = BackdropState::new();
        state.show();
        state.opacity(0.72, backdrop.fade_config());
        assert_eq!(state.keyframe_generation(), 1);
    }

    #[test]
    fn opacity_target_defaults_to_theme() {
        let target = Backdrop::new().opacity_target();
        assert!((target - 0.72).abs() < 1e-6);
        assert_eq!(Backdrop::new().opacity(0.5).opacity_target(), 0.5);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn invisible_backdrop_renders_nothing() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        let mut state = BackdropState::shown();

        let backdrop = Backdrop::new().visible(false).hit_id(HitId::new(1));
        StatefulWidget::render(&backdrop, Rect::new(0, 0, 10, 4), &mut frame, &mut state);

        assert_eq!(frame.hit_count(), 0);
        assert!(frame.scrape_hidden_regions().is_empty());
        assert!(frame.selection_suppressed_regions().is_empty());
        assert_eq!(frame.buffer.get(0, 0).unwrap().bg, PackedRgba::TRANSPARENT);
    }

    #[test]
    fn hidden_phase_renders_nothing() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        let mut state = BackdropState::new();

        StatefulWidget::render(
            &Backdrop::new().hit_id(HitId::new(1)),
            Rect::new(0, 0, 10, 4),
            &mut frame,
            &mut state,
        );

        assert_eq!(frame.hit_count(), 0);
        assert!(frame.scrape_hidden_regions().is_empty());
    }

    #[test]
    fn empty_area_renders_nothing() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        let mut state = BackdropState::shown();

        StatefulWidget::render(&Backdrop::new(), Rect::ZERO, &mut frame, &mut state);
        assert!(frame.scrape_hidden_regions().is_empty());
    }

    #[test]
    fn shown_backdrop_dims_and_registers_one_hit() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        let mut state = BackdropState::shown();
        let area = Rect::new(0, 0, 10, 4);

        let backdrop = Backdrop::new().hit_id(HitId::new(3));
        StatefulWidget::render(&backdrop, area, &mut frame, &mut state);

        assert_eq!(frame.hit_count(), 1);
        let (id, region, _) = frame.hit_test(5, 2).unwrap();
        assert_eq!(id, HitId::new(3));
        assert_eq!(region, BACKDROP_HIT);

        // Dim layer composited over every cell at partial alpha.
        let bg = frame.buffer.get(5, 2).unwrap().bg;
        assert!(bg.a() > 0 && bg.a() < 255, "alpha = {}", bg.a());

        assert!(frame.is_scrape_hidden(5, 2));
        assert!(frame.is_selection_suppressed(5, 2));
    }

    #[test]
    fn without_hit_id_no_hit_region_registers() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        let mut state = BackdropState::shown();

        StatefulWidget::render(
            &Backdrop::new(),
            Rect::new(0, 0, 10, 4),
            &mut frame,
            &mut state,
        );
        assert_eq!(frame.hit_count(), 0);
    }

    #[test]
    fn explicit_opacity_drives_the_dim_alpha() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(4, 1, &mut pool);
        let mut state = BackdropState::shown();

        let backdrop = Backdrop::new().opacity(0.5);
        StatefulWidget::render(&backdrop, Rect::new(0, 0, 4, 1), &mut frame, &mut state);

        let alpha = frame.buffer.get(0, 0).unwrap().bg.a();
        assert!((120..=135).contains(&alpha), "alpha = {alpha}");
    }

    #[test]
    fn custom_backdrop_renders_content_without_hits() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        let mut state = BackdropState::shown();
        let area = Rect::new(2, 1, 6, 2);

        let backdrop = Backdrop::custom(Stub).hit_id(HitId::new(9));
        StatefulWidget::render(&backdrop, area, &mut frame, &mut state);

        assert_eq!(frame.hit_count(), 0);
        assert_eq!(frame.buffer.get(2, 1).unwrap().content.as_char(), Some('#'));
        // The dim layer still painted under the content.
        assert!(frame.buffer.get(4, 2).unwrap().bg.a() > 0);
        assert!(frame.is_scrape_hidden(4, 2));
    }

    #[test]
    fn caller_style_overrides_theme_backdrop() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(4, 1, &mut pool);
        let mut state = BackdropState::shown();

        let backdrop = Backdrop::new()
            .opacity(1.0)
            .style(Style::new().bg(Color::rgb(200, 0, 0)).bold());
        StatefulWidget::render(&backdrop, Rect::new(0, 0, 4, 1), &mut frame, &mut state);

        let cell = frame.buffer.get(0, 0).unwrap();
        assert_eq!(cell.bg, PackedRgba::rgb(200, 0, 0));
        assert!(cell.attrs.contains(scrim_render::cell::CellFlags::BOLD));
    }

    #[test]
    fn stateless_widget_render_is_fully_shown() {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::with_hit_grid(4, 1, &mut pool);

        Widget::render(
            &Backdrop::new().hit_id(HitId::new(1)),
            Rect::new(0, 0, 4, 1),
            &mut frame,
        );

        assert_eq!(frame.hit_count(), 1);
        assert!(frame.buffer.get(0, 0).unwrap().bg.a() > 0);
    }

    #[test]
    fn fade_in_starts_transparent_and_reaches_target() {
        let mut pool = GraphemePool::new();
        let area = Rect::new(0, 0, 4, 1);
        let backdrop = Backdrop::new().opacity(1.0);
        let mut state = BackdropState::new();
        state.set_motion_preference(MotionPreference::Full);
        state.show();

        let mut frame = Frame::new(4, 1, &mut pool);
        StatefulWidget::render(&backdrop, area, &mut frame, &mut state);
        let early = frame.buffer.get(0, 0).unwrap().bg.a();

        state.tick(Duration::from_secs(1), backdrop.fade_config());
        let mut frame = Frame::new(4, 1, &mut pool);
        StatefulWidget::render(&backdrop, area, &mut frame, &mut state);
        let settled = frame.buffer.get(0, 0).unwrap().bg.a();

        assert_eq!(early, 0);
        assert_eq!(settled, 255);
    }

    // -------------------------------------------------------------------------
    // Press handling
    // -------------------------------------------------------------------------

    fn pressed_frame() -> (Backdrop<NoContent>, BackdropState, GraphemePool) {
        (
            Backdrop::new().hit_id(HitId::new(1)),
            BackdropState::shown(),
            GraphemePool::new(),
        )
    }

    #[test]
    fn down_then_up_on_surface_fires_once() {
        let (backdrop, mut state, mut pool) = pressed_frame();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        StatefulWidget::render(&backdrop, Rect::new(0, 0, 10, 4), &mut frame, &mut state);

        let hit = hit_from(&frame, 5, 2);
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_down(5, 2), hit),
            None
        );
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(5, 2), hit),
            Some(BackdropAction::Pressed)
        );

        // The press disarmed; a second up is inert.
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(5, 2), hit),
            None
        );
    }

    #[test]
    fn up_without_down_does_not_fire() {
        let (backdrop, mut state, mut pool) = pressed_frame();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        StatefulWidget::render(&backdrop, Rect::new(0, 0, 10, 4), &mut frame, &mut state);

        let hit = hit_from(&frame, 5, 2);
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(5, 2), hit),
            None
        );
    }

    #[test]
    fn down_off_surface_does_not_arm() {
        let (backdrop, mut state, mut pool) = pressed_frame();
        let mut frame = Frame::with_hit_grid(10, 4, &mut pool);
        StatefulWidget::render(&backdrop, Rect::new(0, 0, 5, 4), &mut frame, &mut state);

        // Down outside the scrim, up inside it.
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_down(8, 2), hit_from(&frame, 8, 2)),
            None
        );
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(2, 2), hit_from(&frame, 2, 2)),
            None
        );
    }

    #[test]
    fn foreign_hit_id_is_not_this_surface() {
        let (backdrop, mut state, _pool) = pressed_frame();
        let foreign = Some((HitId::new(42), BACKDROP_HIT, 0));

        backdrop.handle_event(&mut state, &Event::left_down(1, 1), foreign);
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(1, 1), foreign),
            None
        );
    }

    #[test]
    fn custom_backdrop_never_fires() {
        let backdrop = Backdrop::custom(Stub).hit_id(HitId::new(1));
        let mut state = BackdropState::shown();
        let hit = Some((HitId::new(1), BACKDROP_HIT, 0));

        backdrop.handle_event(&mut state, &Event::left_down(0, 0), hit);
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(0, 0), hit),
            None
        );
    }

    #[test]
    fn invisible_backdrop_never_fires() {
        let backdrop = Backdrop::new().visible(false).hit_id(HitId::new(1));
        let mut state = BackdropState::shown();
        let hit = Some((HitId::new(1), BACKDROP_HIT, 0));

        backdrop.handle_event(&mut state, &Event::left_down(0, 0), hit);
        assert_eq!(
            backdrop.handle_event(&mut state, &Event::left_up(0, 0), hit),
            None
        );
    }

    #[test]
    fn key_events_are_ignored() {
        use scrim_core::event::{KeyCode, KeyEvent};

        let (backdrop, mut state, _pool) = pressed_frame();
        let hit = Some((HitId::new(1), BACKDROP_HIT, 0));
        let event = Event::Key(KeyEvent::new(KeyCode::Escape));
        assert_eq!(backdrop.handle_event(&mut state, &event, hit), None);
    }

    // -------------------------------------------------------------------------
    // Accessibility
    // -------------------------------------------------------------------------

    #[test]
    fn default_backdrop_exposes_a_button() {
        let catalog = StringCatalog::with_builtin();
        let _en = LocaleContext::global().push_override("en");

        let props = Backdrop::new().accessible_props(&catalog).unwrap();
        assert_eq!(props.role, Role::Button);
        assert_eq!(props.label, "Modal Backdrop");
        assert!(!props.hidden);
    }

    #[test]
    fn custom_and_invisible_expose_nothing() {
        let catalog = StringCatalog::with_builtin();
        assert!(Backdrop::custom(Stub).accessible_props(&catalog).is_none());
        assert!(
            Backdrop::new()
                .visible(false)
                .accessible_props(&catalog)
                .is_none()
        );
    }

    #[test]
    fn label_follows_the_active_locale() {
        let catalog = StringCatalog::with_builtin();
        let context = LocaleContext::global();
        let _guard = context.push_override("es");

        let props = Backdrop::new().accessible_props(&catalog).unwrap();
        assert_eq!(props.label, "Fondo del modal");
    }

    #[test]
    fn register_a11y_adds_one_node() {
        let catalog = StringCatalog::with_builtin();
        let mut registry = A11yRegistry::new();
        let area = Rect::new(0, 0, 10, 4);

        let id = Backdrop::new()
            .register_a11y(&mut registry, area, &catalog)
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(id).unwrap().props.role, Role::Button);

        assert!(
            Backdrop::custom(Stub)
                .register_a11y(&mut registry, area, &catalog)
                .is_none()
        );
        assert_eq!(registry.len(), 1);
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    #[test]
    fn reduced_motion_completes_on_first_tick() {
        let mut state = BackdropState::new();
        state.set_motion_preference(MotionPreference::Reduced);
        state.show();

        let changed = state.tick(Duration::from_millis(1), &FadeConfig::default());
        assert!(changed);
        assert!(state.animation().phase().is_visible());
        assert!(!state.is_animating());
    }

    #[test]
    fn full_motion_fades_over_time() {
        let mut state = BackdropState::new();
        state.set_motion_preference(MotionPreference::Full);
        state.show();

        assert!(!state.tick(Duration::from_millis(50), &FadeConfig::default()));
        assert!(state.is_animating());
    }

    #[test]
    fn tick_now_first_call_advances_by_zero() {
        let mut state = BackdropState::new();
        state.set_motion_preference(MotionPreference::Full);
        state.show();

        state.tick_now(&FadeConfig::default());
        assert_eq!(state.animation().progress(), 0.0);
    }

    #[test]
    fn tick_now_completes_instant_config() {
        let mut state = BackdropState::new();
        state.set_motion_preference(MotionPreference::Full);
        state.show();

        let changed = state.tick_now(&FadeConfig::instant());
        assert!(changed);
        assert!(!state.is_animating());
    }

    #[test]
    fn repeated_renders_reuse_descriptors() {
        let mut pool = GraphemePool::new();
        let area = Rect::new(0, 0, 4, 1);
        let backdrop = Backdrop::new();
        let mut state = BackdropState::new();
        state.set_motion_preference(MotionPreference::Full);
        state.show();

        for _ in 0..5 {
            state.tick(Duration::from_millis(10), backdrop.fade_config());
            let mut frame = Frame::new(4, 1, &mut pool);
            StatefulWidget::render(&backdrop, area, &mut frame, &mut state);
        }
        assert_eq!(state.keyframe_generation(), 1);
    }
}
