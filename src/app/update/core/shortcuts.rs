use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_key_name(&key)?;

        if Self::shortcut_matches(
            &self.config.key_next_page,
            "arrowdown",
            &pressed,
            modifiers,
        ) {
            Some(Message::NextPage)
        } else if Self::shortcut_matches(
            &self.config.key_prev_page,
            "arrowup",
            &pressed,
            modifiers,
        ) {
            Some(Message::PreviousPage)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_section,
            "tab",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleSection)
        } else if Self::shortcut_matches(
            &self.config.key_pause_playback,
            "space",
            &pressed,
            modifiers,
        ) {
            Some(Message::PausePlayback)
        } else if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    fn pressed_key_name(key: &Key) -> Option<String> {
        let name = match key.as_ref() {
            Key::Named(key::Named::Space) => "space",
            Key::Named(key::Named::ArrowDown) => "arrowdown",
            Key::Named(key::Named::ArrowUp) => "arrowup",
            Key::Named(key::Named::ArrowLeft) => "arrowleft",
            Key::Named(key::Named::ArrowRight) => "arrowright",
            Key::Named(key::Named::PageDown) => "pagedown",
            Key::Named(key::Named::PageUp) => "pageup",
            Key::Named(key::Named::Tab) => "tab",
            Key::Named(key::Named::Escape) => "escape",
            Key::Named(key::Named::Home) => "home",
            Key::Named(key::Named::End) => "end",
            Key::Character(ch) => return Some(ch.to_ascii_lowercase()),
            _ => return None,
        };
        Some(name.to_string())
    }

    /// A binding is a comma separated list of alternatives such as
    /// `"arrowdown, ctrl+n"`. Any one of them matching is enough.
    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);
        normalized
            .split(',')
            .map(str::trim)
            .filter(|combo| !combo.is_empty())
            .any(|combo| Self::combo_matches(combo, pressed, modifiers))
    }

    fn combo_matches(combo: &str, pressed: &str, modifiers: Modifiers) -> bool {
        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in combo.split('+').map(str::trim).filter(|s| !s.is_empty()) {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(Self::key_alias(key)),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    fn key_alias(key: &str) -> &str {
        match key {
            "down" => "arrowdown",
            "up" => "arrowup",
            "left" => "arrowleft",
            "right" => "arrowright",
            "pgdn" => "pagedown",
            "pgup" => "pageup",
            "esc" => "escape",
            other => other,
        }
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn empty_binding_uses_fallback() {
        assert!(App::shortcut_matches("  ", "tab", "tab", Modifiers::default()));
    }

    #[test]
    fn matches_any_listed_alternative() {
        let binding = "ArrowDown, ArrowRight, PageDown";
        for pressed in ["arrowdown", "arrowright", "pagedown"] {
            assert!(App::shortcut_matches(
                binding,
                "x",
                pressed,
                Modifiers::default()
            ));
        }
        assert!(!App::shortcut_matches(
            binding,
            "x",
            "arrowup",
            Modifiers::default()
        ));
    }

    #[test]
    fn resolves_short_key_names() {
        assert!(App::shortcut_matches("pgdn", "x", "pagedown", Modifiers::default()));
        assert!(App::shortcut_matches("esc", "x", "escape", Modifiers::default()));
    }

    #[test]
    fn matches_ctrl_shortcut() {
        assert!(App::shortcut_matches("ctrl+q", "x", "q", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+q",
            "x",
            "q",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl", "x", "x", Modifiers::CTRL));
    }
}
