//! Base Menu Component
//!
//! Provides a reusable overlay menu component for screen-space GUI.
//! Supports keyboard navigation, disabled items and selection highlighting.

use crate::text::{draw_centered_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Menu box height in pixels
    pub height: u32,

    /// Distance from the top of the screen; centred vertically when `None`
    pub top: Option<u32>,

    /// Background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    /// Title text color
    pub title_color: Color,

    /// Normal item fill color
    pub item_color: Color,

    /// Selected item fill color
    pub highlight_color: Color,

    /// Item label color
    pub label_color: Color,

    /// Label color of items that cannot be chosen right now
    pub disabled_label_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 320,
            height: 330,
            top: None,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            overlay_alpha: 120,
            title_color: Color::RGB(255, 255, 255),
            item_color: Color::RGB(50, 150, 50),
            highlight_color: Color::RGB(100, 200, 100),
            label_color: Color::RGB(255, 255, 255),
            disabled_label_color: Color::RGB(130, 160, 130),
        }
    }
}

/// A menu item with text and enabled state
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
    pub enabled: bool,
}

impl MenuItem {
    /// Creates a new enabled menu item
    pub fn new(text: String) -> Self {
        MenuItem {
            text,
            enabled: true,
        }
    }
}

/// A stateful overlay menu component
///
/// The menu handles:
/// - Navigation (up/down selection, wrapping at both ends)
/// - Rendering (overlay, box, title, items, highlighting)
///
/// Disabled items can still be selected; it is up to the owner to ignore
/// them on confirm. They are only drawn dimmed.
pub struct Menu {
    title: String,
    subtitle: Option<String>,
    items: Vec<MenuItem>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    /// Creates a new menu with default styling
    pub fn new(title: String, items: Vec<MenuItem>) -> Self {
        Menu {
            title,
            subtitle: None,
            items,
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.enabled = enabled;
        }
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.items.get(index).map(|item| item.enabled).unwrap_or(false)
    }

    /// Render the menu centred horizontally on the logical screen
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        // 1. Semi-transparent overlay (darken screen)
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        // 2. Position from logical size (not physical window size)
        let (screen_width, screen_height) = canvas.logical_size();
        let menu_x = screen_width.saturating_sub(self.style.width) / 2;
        let menu_y = self
            .style
            .top
            .unwrap_or(screen_height.saturating_sub(self.style.height) / 2);
        let center_x = (menu_x + self.style.width / 2) as i32;
        let frame = Rect::new(menu_x as i32, menu_y as i32, self.style.width, self.style.height);

        // 3. Background and double border
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(frame)?;
        canvas.draw_rect(Rect::new(
            frame.x() + 2,
            frame.y() + 2,
            frame.width().saturating_sub(4),
            frame.height().saturating_sub(4),
        ))?;

        // 4. Title, shrunk to scale 2 if it would not fit at scale 3
        let title_scale = if text_width(&self.title, 3) + 20 <= self.style.width { 3 } else { 2 };
        draw_centered_text(
            canvas,
            &self.title,
            center_x,
            (menu_y + 24) as i32,
            self.style.title_color,
            title_scale,
        )?;

        let mut item_start_y = menu_y + 80;
        if let Some(subtitle) = &self.subtitle {
            draw_centered_text(
                canvas,
                subtitle,
                center_x,
                (menu_y + 60) as i32,
                self.style.title_color,
                2,
            )?;
            item_start_y += 24;
        }

        // 5. Menu items as filled buttons
        let item_height = 60;
        let button_width = 200;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_start_y + i as u32 * item_height;
            let button = Rect::new(center_x - button_width as i32 / 2, item_y as i32, button_width, 50);

            canvas.set_draw_color(if i == self.selected_index {
                self.style.highlight_color
            } else {
                self.style.item_color
            });
            canvas.fill_rect(button)?;

            let label_color = if item.enabled {
                self.style.label_color
            } else {
                self.style.disabled_label_color
            };
            draw_centered_text(canvas, &item.text, center_x, button.y() + 11, label_color, 4)?;
        }

        Ok(())
    }
}
