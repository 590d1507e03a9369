//! Static escape-code tables for text styles and colors.
//!
//! Three tables map tag names to SGR escape fragments:
//!
//! - [`STYLE`]: text styles (`bold`, `dim`, ...) plus single-letter aliases
//! - [`FOREGROUND`]: foreground colors, lowercase keys (`red`, `r`, ...)
//! - [`BACKGROUND`]: background colors, uppercase keys (`RED`, `R`, ...)
//!
//! Background keys are uppercase on purpose: a bare uppercase tag such as
//! `<R>` selects the background variant of the color, and the `bg <name>`
//! syntax uppercases its argument before the lookup.

use phf::phf_map;

/// Fragment that restores the terminal's default rendering state.
pub const RESET: &str = "\x1b[0m";

/// Text style fragments.
pub static STYLE: phf::Map<&'static str, &'static str> = phf_map! {
    "b" => "\x1b[1m",
    "bold" => "\x1b[1m",
    "d" => "\x1b[2m",
    "dim" => "\x1b[2m",
    "n" => "\x1b[22m",
    "normal" => "\x1b[22m",
    "i" => "\x1b[3m",
    "italic" => "\x1b[3m",
    "u" => "\x1b[4m",
    "underline" => "\x1b[4m",
    "s" => "\x1b[9m",
    "strike" => "\x1b[9m",
    "v" => "\x1b[7m",
    "reverse" => "\x1b[7m",
    "h" => "\x1b[8m",
    "hide" => "\x1b[8m",
    "l" => "\x1b[5m",
    "blink" => "\x1b[5m",
    "reset" => "\x1b[0m",
};

/// Foreground color fragments (lowercase keys).
pub static FOREGROUND: phf::Map<&'static str, &'static str> = phf_map! {
    "k" => "\x1b[30m",
    "black" => "\x1b[30m",
    "r" => "\x1b[31m",
    "red" => "\x1b[31m",
    "g" => "\x1b[32m",
    "green" => "\x1b[32m",
    "y" => "\x1b[33m",
    "yellow" => "\x1b[33m",
    "e" => "\x1b[34m",
    "blue" => "\x1b[34m",
    "m" => "\x1b[35m",
    "magenta" => "\x1b[35m",
    "c" => "\x1b[36m",
    "cyan" => "\x1b[36m",
    "w" => "\x1b[37m",
    "white" => "\x1b[37m",
    "lk" => "\x1b[90m",
    "light-black" => "\x1b[90m",
    "lr" => "\x1b[91m",
    "light-red" => "\x1b[91m",
    "lg" => "\x1b[92m",
    "light-green" => "\x1b[92m",
    "ly" => "\x1b[93m",
    "light-yellow" => "\x1b[93m",
    "le" => "\x1b[94m",
    "light-blue" => "\x1b[94m",
    "lm" => "\x1b[95m",
    "light-magenta" => "\x1b[95m",
    "lc" => "\x1b[96m",
    "light-cyan" => "\x1b[96m",
    "lw" => "\x1b[97m",
    "light-white" => "\x1b[97m",
};

/// Background color fragments (uppercase keys).
pub static BACKGROUND: phf::Map<&'static str, &'static str> = phf_map! {
    "K" => "\x1b[40m",
    "BLACK" => "\x1b[40m",
    "R" => "\x1b[41m",
    "RED" => "\x1b[41m",
    "G" => "\x1b[42m",
    "GREEN" => "\x1b[42m",
    "Y" => "\x1b[43m",
    "YELLOW" => "\x1b[43m",
    "E" => "\x1b[44m",
    "BLUE" => "\x1b[44m",
    "M" => "\x1b[45m",
    "MAGENTA" => "\x1b[45m",
    "C" => "\x1b[46m",
    "CYAN" => "\x1b[46m",
    "W" => "\x1b[47m",
    "WHITE" => "\x1b[47m",
    "LK" => "\x1b[100m",
    "LIGHT-BLACK" => "\x1b[100m",
    "LR" => "\x1b[101m",
    "LIGHT-RED" => "\x1b[101m",
    "LG" => "\x1b[102m",
    "LIGHT-GREEN" => "\x1b[102m",
    "LY" => "\x1b[103m",
    "LIGHT-YELLOW" => "\x1b[103m",
    "LE" => "\x1b[104m",
    "LIGHT-BLUE" => "\x1b[104m",
    "LM" => "\x1b[105m",
    "LIGHT-MAGENTA" => "\x1b[105m",
    "LC" => "\x1b[106m",
    "LIGHT-CYAN" => "\x1b[106m",
    "LW" => "\x1b[107m",
    "LIGHT-WHITE" => "\x1b[107m",
};

/// Looks a tag name up across all three tables.
///
/// The key sets are disjoint (styles and foregrounds are lowercase and do not
/// overlap, backgrounds are uppercase), so the probe order only fixes which
/// table answers first.
pub fn lookup(name: &str) -> Option<&'static str> {
    STYLE
        .get(name)
        .or_else(|| FOREGROUND.get(name))
        .or_else(|| BACKGROUND.get(name))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_match_canonical_names() {
        assert_eq!(STYLE.get("b"), STYLE.get("bold"));
        assert_eq!(STYLE.get("d"), STYLE.get("dim"));
        assert_eq!(FOREGROUND.get("r"), FOREGROUND.get("red"));
        assert_eq!(BACKGROUND.get("Y"), BACKGROUND.get("YELLOW"));
        assert_eq!(FOREGROUND.get("lr"), FOREGROUND.get("light-red"));
    }

    #[test]
    fn lookup_covers_all_tables() {
        assert_eq!(lookup("bold"), Some("\x1b[1m"));
        assert_eq!(lookup("red"), Some("\x1b[31m"));
        assert_eq!(lookup("RED"), Some("\x1b[41m"));
        assert_eq!(lookup("reset"), Some(RESET));
        assert_eq!(lookup("Red"), None);
        assert_eq!(lookup("bogus"), None);
    }

    #[test]
    fn background_requires_uppercase() {
        assert!(BACKGROUND.get("red").is_none());
        assert!(FOREGROUND.get("RED").is_none());
    }
}
