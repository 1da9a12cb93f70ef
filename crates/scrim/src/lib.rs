#![forbid(unsafe_code)]

//! ScrimTUI: a modal backdrop overlay for terminal UIs.
//!
//! This facade re-exports the workspace crates under one roof:
//!
//! - [`core`]: geometry and input events.
//! - [`render`]: the cell/buffer/frame kernel with hit testing and text
//!   extraction.
//! - [`style`]: colors, style patches, and the theme registry.
//! - [`i18n`]: string catalogs and locale handling.
//! - [`a11y`]: accessibility props and motion preference.
//! - [`widgets`]: the [`Backdrop`](widgets::Backdrop) widget and the fade
//!   animation primitive.
//!
//! Most applications only need the [`prelude`]:
//!
//! ```
//! use scrim::prelude::*;
//!
//! let mut pool = GraphemePool::new();
//! let mut frame = Frame::with_hit_grid(80, 24, &mut pool);
//! let mut state = BackdropState::new();
//!
//! let backdrop = Backdrop::new().hit_id(HitId::new(1));
//! state.show();
//! state.tick(std::time::Duration::from_millis(16), backdrop.fade_config());
//! StatefulWidget::render(&backdrop, frame.area(), &mut frame, &mut state);
//! ```

pub use scrim_a11y as a11y;
pub use scrim_core as core;
pub use scrim_i18n as i18n;
pub use scrim_render as render;
pub use scrim_style as style;
pub use scrim_widgets as widgets;

/// The types most applications touch, importable in one line.
pub mod prelude {
    pub use scrim_a11y::{A11yRegistry, AccessibleProps, MotionPreference, Role};
    pub use scrim_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
    pub use scrim_core::geometry::{Rect, Size};
    pub use scrim_i18n::{LocaleContext, StringCatalog};
    pub use scrim_render::buffer::Buffer;
    pub use scrim_render::cell::{Cell, CellContent, PackedRgba};
    pub use scrim_render::extract::{is_selectable, visible_text};
    pub use scrim_render::frame::{Frame, HitId, HitRegion};
    pub use scrim_render::grapheme_pool::GraphemePool;
    pub use scrim_style::{Color, Style, StyleFlags, Theme, current_theme, set_current_theme};
    pub use scrim_widgets::{
        BACKDROP_HIT, Backdrop, BackdropAction, BackdropState, FadeConfig, Label, StatefulWidget,
        Widget,
    };
}
