//! Dropdown option row rendering

use crate::control::DropDownOption;
use crate::messages::Messages;
use crate::tui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Glyph used for icons that cannot be drawn in a terminal (e.g. SVG markup)
pub const FALLBACK_ICON: &str = "◆";

/// Row state flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionFlags {
    /// The option is the field's current value
    pub is_selected: bool,
    /// The option is highlighted in the open list
    pub is_focused: bool,
    pub is_disabled: bool,
}

/// Terminal representation of a connector icon
///
/// Short text icons (emoji, letters) are drawn as-is; markup and long strings
/// fall back to a neutral glyph.
pub fn icon_glyph(icon: Option<&str>) -> Option<&str> {
    let icon = icon?.trim();
    if icon.is_empty() {
        return None;
    }
    if icon.starts_with('<') || icon.chars().count() > 2 {
        Some(FALLBACK_ICON)
    } else {
        Some(icon)
    }
}

/// Build one option row: icon and label, then the stage badge
pub fn render_option(
    option: &DropDownOption,
    flags: OptionFlags,
    messages: &Messages,
    theme: &Theme,
    show_icons: bool,
) -> Line<'static> {
    let base = if flags.is_disabled {
        theme.disabled_style()
    } else if flags.is_focused {
        theme.option_selected_style()
    } else if flags.is_selected {
        Style::default()
            .fg(theme.option_current)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_primary)
    };

    let prefix = if flags.is_focused { "> " } else { "  " };
    let mut spans = vec![Span::styled(prefix, base)];

    if show_icons {
        if let Some(glyph) = icon_glyph(option.icon.as_deref()) {
            spans.push(Span::styled(format!("{} ", glyph), base));
        }
    }

    spans.push(Span::styled(option.label.clone(), base));

    if let Some(badge) = option.badge_label(messages) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", badge), theme.badge_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReleaseStage;

    fn option(stage: Option<ReleaseStage>, icon: Option<&str>) -> DropDownOption {
        DropDownOption {
            label: "Foo".to_string(),
            value: "a".to_string(),
            icon: icon.map(str::to_string),
            release_stage: stage,
        }
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_icon_glyph() {
        assert_eq!(icon_glyph(None), None);
        assert_eq!(icon_glyph(Some("  ")), None);
        assert_eq!(icon_glyph(Some("🐘")), Some("🐘"));
        assert_eq!(icon_glyph(Some("<svg></svg>")), Some(FALLBACK_ICON));
    }

    #[test]
    fn test_beta_option_has_uppercase_badge() {
        let messages = Messages::default();
        let line = render_option(
            &option(Some(ReleaseStage::Beta), None),
            OptionFlags::default(),
            &messages,
            &Theme::default(),
            true,
        );
        assert_eq!(text(&line), "  Foo  BETA ");
    }

    #[test]
    fn test_generally_available_has_no_badge() {
        let messages = Messages::default();
        let line = render_option(
            &option(Some(ReleaseStage::GenerallyAvailable), Some("🐘")),
            OptionFlags {
                is_focused: true,
                ..Default::default()
            },
            &messages,
            &Theme::default(),
            true,
        );
        assert_eq!(text(&line), "> 🐘 Foo");
    }

    #[test]
    fn test_unknown_stage_badge_uses_raw_name() {
        let messages = Messages::default();
        let badge = option(Some(ReleaseStage::Other("preview".into())), None).badge_label(&messages);
        assert_eq!(badge.as_deref(), Some("PREVIEW"));
    }

    #[test]
    fn test_icons_hidden_when_disabled_by_config() {
        let line = render_option(
            &option(None, Some("🐘")),
            OptionFlags::default(),
            &Messages::default(),
            &Theme::default(),
            false,
        );
        assert_eq!(text(&line), "  Foo");
    }
}
