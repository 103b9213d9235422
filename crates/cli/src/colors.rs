use crossterm::style::{Color, Stylize};
use rust_prompt_core::config::ColorDefinition;
use rust_prompt_core::error::{Error, Result};

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one field is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(named_color(name)?),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

fn named_color(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

/// Helper function to resolve an optional theme color
pub fn theme_color(color_definition: Option<&ColorDefinition>) -> Result<Option<Color>> {
    match color_definition {
        None => Ok(None),
        Some(color_definition) => color_definition.as_crossterm_color(),
    }
}

/// Colors `text` when a color is set, otherwise returns it unchanged.
pub fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.with(color).to_string(),
        None => text.to_string(),
    }
}
