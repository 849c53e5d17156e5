//! Style sheets for the picker modals.
//!
//! Every visual part of a modal has a named slot. A slot left as `None` uses
//! the built-in default; a slot that is set only overrides the fields it
//! sets, so `BoxStyle { background: Some(..), ..Default::default() }` keeps
//! the default corner radius and padding.

use egui::{Color32, FontId, Margin, RichText, Rounding};

use crate::error::PickerError;
use crate::models::settings::DEFAULT_ACCENT_COLOR;

/// Layout and fill of a rectangular element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxStyle {
    pub background: Option<Color32>,
    pub corner_radius: Option<f32>,
    /// Top corners only, used by the sheet
    pub top_corner_radius: Option<f32>,
    pub margin_x: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub padding_x: Option<f32>,
    pub padding_y: Option<f32>,
    pub padding_top: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl BoxStyle {
    pub fn merged(self, over: Option<&BoxStyle>) -> BoxStyle {
        let Some(over) = over else {
            return self;
        };
        BoxStyle {
            background: over.background.or(self.background),
            corner_radius: over.corner_radius.or(self.corner_radius),
            top_corner_radius: over.top_corner_radius.or(self.top_corner_radius),
            margin_x: over.margin_x.or(self.margin_x),
            margin_bottom: over.margin_bottom.or(self.margin_bottom),
            padding_x: over.padding_x.or(self.padding_x),
            padding_y: over.padding_y.or(self.padding_y),
            padding_top: over.padding_top.or(self.padding_top),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
        }
    }

    pub fn rounding(&self) -> Rounding {
        let radius = self.corner_radius.unwrap_or(0.0);
        match self.top_corner_radius {
            Some(top) => Rounding {
                nw: top,
                ne: top,
                sw: radius,
                se: radius,
            },
            None => Rounding::same(radius),
        }
    }

    pub fn inner_margin(&self) -> Margin {
        let x = self.padding_x.unwrap_or(0.0);
        let y = self.padding_y.unwrap_or(0.0);
        Margin {
            left: x,
            right: x,
            top: self.padding_top.unwrap_or(y),
            bottom: y,
        }
    }

    pub fn frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.background.unwrap_or(Color32::TRANSPARENT))
            .rounding(self.rounding())
            .inner_margin(self.inner_margin())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color32>,
    pub size: Option<f32>,
    pub strong: Option<bool>,
}

impl TextStyle {
    pub fn merged(self, over: Option<&TextStyle>) -> TextStyle {
        let Some(over) = over else {
            return self;
        };
        TextStyle {
            color: over.color.or(self.color),
            size: over.size.or(self.size),
            strong: over.strong.or(self.strong),
        }
    }

    pub fn rich(&self, text: impl Into<String>) -> RichText {
        let mut rich = RichText::new(text);
        if let Some(size) = self.size {
            rich = rich.size(size);
        }
        if let Some(color) = self.color {
            rich = rich.color(color);
        }
        if self.strong.unwrap_or(false) {
            rich = rich.strong();
        }
        rich
    }

    pub fn font_id(&self) -> FontId {
        FontId::proportional(self.size.unwrap_or(14.0))
    }

    pub fn color_or(&self, fallback: Color32) -> Color32 {
        self.color.unwrap_or(fallback)
    }
}

/// Slots shared by both modals: the sheet, its heading, the inline error
/// and the confirm/cancel buttons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalStyleSheet {
    pub cancel_button: Option<BoxStyle>,
    pub cancel_button_text: Option<TextStyle>,
    pub confirm_button: Option<BoxStyle>,
    pub confirm_button_text: Option<TextStyle>,
    /// Dimmed area behind the sheet
    pub container: Option<BoxStyle>,
    /// The sheet itself
    pub content: Option<BoxStyle>,
    pub heading: Option<TextStyle>,
    pub error_container: Option<BoxStyle>,
    pub error_text: Option<TextStyle>,
}

impl ModalStyleSheet {
    pub fn defaults(accent: Color32) -> Self {
        Self {
            cancel_button: Some(BoxStyle {
                background: Some(Color32::TRANSPARENT),
                corner_radius: Some(8.0),
                margin_x: Some(20.0),
                margin_bottom: Some(10.0),
                padding_y: Some(15.0),
                ..Default::default()
            }),
            cancel_button_text: Some(TextStyle {
                color: Some(accent),
                size: Some(16.0),
                strong: Some(true),
            }),
            confirm_button: Some(BoxStyle {
                background: Some(accent),
                corner_radius: Some(8.0),
                margin_x: Some(20.0),
                margin_bottom: Some(10.0),
                padding_y: Some(15.0),
                ..Default::default()
            }),
            confirm_button_text: Some(TextStyle {
                color: Some(Color32::WHITE),
                size: Some(16.0),
                strong: Some(true),
            }),
            container: Some(BoxStyle {
                background: Some(Color32::from_black_alpha(96)),
                ..Default::default()
            }),
            content: Some(BoxStyle {
                background: Some(Color32::WHITE),
                top_corner_radius: Some(32.0),
                padding_top: Some(20.0),
                ..Default::default()
            }),
            heading: Some(TextStyle {
                color: Some(Color32::BLACK),
                size: Some(30.0),
                strong: Some(true),
            }),
            error_container: Some(BoxStyle {
                height: Some(60.0),
                padding_x: Some(20.0),
                padding_y: Some(20.0),
                ..Default::default()
            }),
            error_text: Some(TextStyle {
                color: Some(Color32::RED),
                ..Default::default()
            }),
        }
    }

    /// Lay `overrides` on top of `self`, slot by slot.
    pub fn overlaid(&self, overrides: &ModalStyleSheet) -> ModalStyleSheet {
        ModalStyleSheet {
            cancel_button: merge_box(self.cancel_button, overrides.cancel_button.as_ref()),
            cancel_button_text: merge_text(
                self.cancel_button_text,
                overrides.cancel_button_text.as_ref(),
            ),
            confirm_button: merge_box(self.confirm_button, overrides.confirm_button.as_ref()),
            confirm_button_text: merge_text(
                self.confirm_button_text,
                overrides.confirm_button_text.as_ref(),
            ),
            container: merge_box(self.container, overrides.container.as_ref()),
            content: merge_box(self.content, overrides.content.as_ref()),
            heading: merge_text(self.heading, overrides.heading.as_ref()),
            error_container: merge_box(self.error_container, overrides.error_container.as_ref()),
            error_text: merge_text(self.error_text, overrides.error_text.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatePickerStyleSheet {
    pub modal: ModalStyleSheet,
    pub date_selector: Option<BoxStyle>,
    pub date_selector_control: Option<BoxStyle>,
    pub date_selector_control_text: Option<TextStyle>,
    pub date_selector_controls: Option<BoxStyle>,
    pub day_container: Option<BoxStyle>,
    pub day_content: Option<BoxStyle>,
    /// Background behind today's date
    pub day_content_today: Option<BoxStyle>,
    /// Background behind a selected date that is today or later
    pub day_content_selected: Option<BoxStyle>,
    /// Background behind a selected date in the past
    pub day_content_selected_past: Option<BoxStyle>,
    pub day_text: Option<TextStyle>,
    pub day_text_outside_month: Option<TextStyle>,
    pub day_text_selected: Option<TextStyle>,
    pub week: Option<BoxStyle>,
    pub weekday: Option<BoxStyle>,
    pub weekday_text: Option<TextStyle>,
    pub weekdays: Option<BoxStyle>,
    pub weeks: Option<BoxStyle>,
}

impl DatePickerStyleSheet {
    pub fn defaults(accent: Color32) -> Self {
        let accent_tint = with_alpha(accent, 0x33);
        Self {
            modal: ModalStyleSheet::defaults(accent),
            date_selector: Some(BoxStyle {
                padding_x: Some(20.0),
                padding_y: Some(20.0),
                ..Default::default()
            }),
            date_selector_control: Some(BoxStyle {
                padding_x: Some(10.0),
                padding_y: Some(10.0),
                ..Default::default()
            }),
            date_selector_control_text: Some(TextStyle {
                color: Some(Color32::BLACK),
                size: Some(16.0),
                ..Default::default()
            }),
            date_selector_controls: Some(BoxStyle {
                padding_x: Some(10.0),
                ..Default::default()
            }),
            day_container: Some(BoxStyle::default()),
            day_content: Some(BoxStyle::default()),
            day_content_today: Some(BoxStyle {
                background: Some(accent_tint),
                ..Default::default()
            }),
            day_content_selected: Some(BoxStyle {
                background: Some(accent),
                ..Default::default()
            }),
            day_content_selected_past: Some(BoxStyle {
                background: Some(accent_tint),
                ..Default::default()
            }),
            day_text: Some(TextStyle {
                color: Some(Color32::BLACK),
                size: Some(14.0),
                ..Default::default()
            }),
            day_text_outside_month: Some(TextStyle {
                color: Some(Color32::from_rgb(0xcc, 0xcc, 0xcc)),
                ..Default::default()
            }),
            day_text_selected: Some(TextStyle {
                color: Some(Color32::WHITE),
                ..Default::default()
            }),
            week: Some(BoxStyle::default()),
            weekday: Some(BoxStyle::default()),
            weekday_text: Some(TextStyle {
                color: Some(Color32::BLACK),
                size: Some(16.0),
                strong: Some(true),
            }),
            weekdays: Some(BoxStyle::default()),
            weeks: Some(BoxStyle::default()),
        }
    }

    pub fn overlaid(&self, overrides: &DatePickerStyleSheet) -> DatePickerStyleSheet {
        DatePickerStyleSheet {
            modal: self.modal.overlaid(&overrides.modal),
            date_selector: merge_box(self.date_selector, overrides.date_selector.as_ref()),
            date_selector_control: merge_box(
                self.date_selector_control,
                overrides.date_selector_control.as_ref(),
            ),
            date_selector_control_text: merge_text(
                self.date_selector_control_text,
                overrides.date_selector_control_text.as_ref(),
            ),
            date_selector_controls: merge_box(
                self.date_selector_controls,
                overrides.date_selector_controls.as_ref(),
            ),
            day_container: merge_box(self.day_container, overrides.day_container.as_ref()),
            day_content: merge_box(self.day_content, overrides.day_content.as_ref()),
            day_content_today: merge_box(
                self.day_content_today,
                overrides.day_content_today.as_ref(),
            ),
            day_content_selected: merge_box(
                self.day_content_selected,
                overrides.day_content_selected.as_ref(),
            ),
            day_content_selected_past: merge_box(
                self.day_content_selected_past,
                overrides.day_content_selected_past.as_ref(),
            ),
            day_text: merge_text(self.day_text, overrides.day_text.as_ref()),
            day_text_outside_month: merge_text(
                self.day_text_outside_month,
                overrides.day_text_outside_month.as_ref(),
            ),
            day_text_selected: merge_text(
                self.day_text_selected,
                overrides.day_text_selected.as_ref(),
            ),
            week: merge_box(self.week, overrides.week.as_ref()),
            weekday: merge_box(self.weekday, overrides.weekday.as_ref()),
            weekday_text: merge_text(self.weekday_text, overrides.weekday_text.as_ref()),
            weekdays: merge_box(self.weekdays, overrides.weekdays.as_ref()),
            weeks: merge_box(self.weeks, overrides.weeks.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimePickerStyleSheet {
    pub modal: ModalStyleSheet,
    pub time_selector: Option<BoxStyle>,
    pub controls_and_value_container: Option<BoxStyle>,
    pub control_text: Option<TextStyle>,
    pub value: Option<TextStyle>,
    /// Every ruler bar; `width` and `margin_x` set the ruler spacing
    pub bar: Option<BoxStyle>,
    pub bar_container: Option<BoxStyle>,
    pub bar_half_hour: Option<BoxStyle>,
    pub bar_hour: Option<BoxStyle>,
    /// Row holding the bars; `padding_top` leaves room for hour labels
    pub bar_indexes: Option<BoxStyle>,
    pub bar_selected: Option<BoxStyle>,
    pub bar_text: Option<TextStyle>,
}

impl TimePickerStyleSheet {
    pub fn defaults(accent: Color32) -> Self {
        Self {
            modal: ModalStyleSheet::defaults(accent),
            time_selector: Some(BoxStyle {
                padding_x: Some(20.0),
                padding_y: Some(20.0),
                ..Default::default()
            }),
            controls_and_value_container: Some(BoxStyle {
                margin_bottom: Some(20.0),
                ..Default::default()
            }),
            control_text: Some(TextStyle {
                color: Some(accent),
                size: Some(28.0),
                ..Default::default()
            }),
            value: Some(TextStyle {
                color: Some(Color32::BLACK),
                size: Some(30.0),
                strong: Some(true),
            }),
            bar: Some(BoxStyle {
                background: Some(Color32::from_rgb(0xcc, 0xcc, 0xcc)),
                corner_radius: Some(3.0),
                height: Some(20.0),
                margin_x: Some(2.0),
                width: Some(5.0),
                ..Default::default()
            }),
            bar_container: Some(BoxStyle::default()),
            bar_half_hour: Some(BoxStyle {
                height: Some(25.0),
                ..Default::default()
            }),
            bar_hour: Some(BoxStyle {
                height: Some(35.0),
                ..Default::default()
            }),
            bar_indexes: Some(BoxStyle {
                padding_top: Some(65.0),
                ..Default::default()
            }),
            bar_selected: Some(BoxStyle {
                background: Some(accent),
                ..Default::default()
            }),
            bar_text: Some(TextStyle {
                color: Some(Color32::from_rgb(0x88, 0x88, 0x88)),
                size: Some(12.0),
                ..Default::default()
            }),
        }
    }

    pub fn overlaid(&self, overrides: &TimePickerStyleSheet) -> TimePickerStyleSheet {
        TimePickerStyleSheet {
            modal: self.modal.overlaid(&overrides.modal),
            time_selector: merge_box(self.time_selector, overrides.time_selector.as_ref()),
            controls_and_value_container: merge_box(
                self.controls_and_value_container,
                overrides.controls_and_value_container.as_ref(),
            ),
            control_text: merge_text(self.control_text, overrides.control_text.as_ref()),
            value: merge_text(self.value, overrides.value.as_ref()),
            bar: merge_box(self.bar, overrides.bar.as_ref()),
            bar_container: merge_box(self.bar_container, overrides.bar_container.as_ref()),
            bar_half_hour: merge_box(self.bar_half_hour, overrides.bar_half_hour.as_ref()),
            bar_hour: merge_box(self.bar_hour, overrides.bar_hour.as_ref()),
            bar_indexes: merge_box(self.bar_indexes, overrides.bar_indexes.as_ref()),
            bar_selected: merge_box(self.bar_selected, overrides.bar_selected.as_ref()),
            bar_text: merge_text(self.bar_text, overrides.bar_text.as_ref()),
        }
    }

    /// Horizontal distance between neighbouring ruler bars.
    pub fn bar_width_with_margin(&self) -> f32 {
        let bar = self.bar.unwrap_or_default();
        bar.width.unwrap_or(5.0) + bar.margin_x.unwrap_or(2.0) * 2.0
    }
}

fn merge_box(base: Option<BoxStyle>, over: Option<&BoxStyle>) -> Option<BoxStyle> {
    match (base, over) {
        (Some(base), over) => Some(base.merged(over)),
        (None, over) => over.copied(),
    }
}

fn merge_text(base: Option<TextStyle>, over: Option<&TextStyle>) -> Option<TextStyle> {
    match (base, over) {
        (Some(base), over) => Some(base.merged(over)),
        (None, over) => over.copied(),
    }
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Convert Color32 to hex string for display
pub fn color_to_hex(color: Color32) -> String {
    if color.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    } else {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` to Color32
pub fn hex_to_color(hex: &str) -> Result<Color32, PickerError> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = |reason: &str| PickerError::InvalidColor {
        value: hex.to_string(),
        reason: reason.to_string(),
    };

    if digits.len() != 6 && digits.len() != 8 {
        return Err(invalid("hex color must be 6 or 8 characters"));
    }
    if !digits.is_ascii() {
        return Err(invalid("hex color must be ASCII"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid("invalid hex digit"))
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    let a = if digits.len() == 8 { channel(6..8)? } else { 255 };

    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Accent colour from settings, falling back to the default blue.
pub fn accent_from_settings(accent: &str) -> Color32 {
    hex_to_color(accent).unwrap_or_else(|err| {
        log::warn!("{err}; using {DEFAULT_ACCENT_COLOR}");
        Color32::from_rgb(0x4a, 0x83, 0xe7)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(
            hex_to_color("#4a83e7").unwrap(),
            Color32::from_rgb(0x4a, 0x83, 0xe7)
        );
        assert_eq!(hex_to_color("FFFFFF").unwrap(), Color32::WHITE);
        assert!(hex_to_color("#12345").is_err());
        assert!(hex_to_color("#gg0000").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color32::from_rgb(0x4a, 0x83, 0xe7);
        assert_eq!(color_to_hex(color), "#4a83e7");
        assert_eq!(hex_to_color(&color_to_hex(color)).unwrap(), color);
    }

    #[test]
    fn test_box_override_keeps_unset_fields() {
        let base = BoxStyle {
            background: Some(Color32::WHITE),
            corner_radius: Some(8.0),
            ..Default::default()
        };
        let over = BoxStyle {
            background: Some(Color32::BLACK),
            ..Default::default()
        };

        let merged = base.merged(Some(&over));
        assert_eq!(merged.background, Some(Color32::BLACK));
        assert_eq!(merged.corner_radius, Some(8.0));
        assert_eq!(base.merged(None), base);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let accent = Color32::from_rgb(0x4a, 0x83, 0xe7);
        let defaults = DatePickerStyleSheet::defaults(accent);
        assert_eq!(defaults.overlaid(&DatePickerStyleSheet::default()), defaults);
    }

    #[test]
    fn test_sheet_override_applies_to_one_slot() {
        let accent = Color32::from_rgb(0x4a, 0x83, 0xe7);
        let defaults = TimePickerStyleSheet::defaults(accent);
        let overrides = TimePickerStyleSheet {
            bar: Some(BoxStyle {
                width: Some(8.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let sheet = defaults.overlaid(&overrides);
        assert_eq!(sheet.bar_width_with_margin(), 12.0);
        assert_eq!(sheet.bar_hour, defaults.bar_hour);
        assert_eq!(defaults.bar_width_with_margin(), 9.0);
    }

    #[test]
    fn test_top_corner_rounding() {
        let style = BoxStyle {
            top_corner_radius: Some(32.0),
            ..Default::default()
        };
        let rounding = style.rounding();
        assert_eq!(rounding.nw, 32.0);
        assert_eq!(rounding.se, 0.0);
    }
}
