//! Color specification resolution for the extended and shorthand tag forms.
//!
//! The extended form is `fg <spec>` or `bg <spec>`, where `<spec>` is a named
//! color, a 256-color palette index (`0`-`255`), a hex code (`#f00` or
//! `#ff0000`), or an RGB triple (`255,0,0`). The shorthand form packs
//! foreground/background (one comma) or style/foreground/background (two
//! commas) into a single tag, e.g. `<red,yellow>` or `<bold,red,yellow>`.
//!
//! Resolution is all-or-nothing: a spec or shorthand field that does not
//! resolve makes the whole tag unknown, and unknown tags pass through the
//! parser verbatim.

use crate::codes;

/// Which color layer a specification applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// SGR selector for extended (256-color and RGB) escapes.
    fn selector(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }

    /// Named-color lookup. Background names go through the uppercase table,
    /// so `bg red` and `bg RED` both resolve while `fg RED` does not.
    fn named(self, name: &str) -> Option<&'static str> {
        match self {
            Layer::Foreground => codes::FOREGROUND.get(name).copied(),
            Layer::Background => codes::BACKGROUND.get(name.to_uppercase().as_str()).copied(),
        }
    }
}

/// Resolves the `fg <spec>` / `bg <spec>` tag forms.
pub(crate) fn resolve_extended(tag: &str) -> Option<String> {
    if let Some(spec) = tag.strip_prefix("fg ") {
        resolve_spec(spec, Layer::Foreground)
    } else if let Some(spec) = tag.strip_prefix("bg ") {
        resolve_spec(spec, Layer::Background)
    } else {
        None
    }
}

fn resolve_spec(spec: &str, layer: Layer) -> Option<String> {
    if let Some(fragment) = layer.named(spec) {
        return Some(fragment.to_string());
    }
    if let Some(index) = parse_component(spec) {
        return Some(format!("\x1b[{};5;{}m", layer.selector(), index));
    }
    if let Some(hex) = spec.strip_prefix('#') {
        return resolve_hex(hex, layer);
    }
    if spec.contains(',') {
        return resolve_triple(spec, layer);
    }
    None
}

/// Parses one all-digit component in the 0-255 range.
fn parse_component(field: &str) -> Option<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn resolve_hex(hex: &str, layer: Layer) -> Option<String> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;

    let (r, g, b) = match digits.as_slice() {
        // Three digits expand by doubling: #f80 is #ff8800.
        [r, g, b] => (r * 17, g * 17, b * 17),
        [r1, r2, g1, g2, b1, b2] => (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2),
        _ => return None,
    };
    Some(format!("\x1b[{};2;{};{};{}m", layer.selector(), r, g, b))
}

fn resolve_triple(spec: &str, layer: Layer) -> Option<String> {
    let fields: Vec<&str> = spec.split(',').collect();
    match fields.as_slice() {
        [r, g, b] => {
            let r = parse_component(r)?;
            let g = parse_component(g)?;
            let b = parse_component(b)?;
            Some(format!("\x1b[{};2;{};{};{}m", layer.selector(), r, g, b))
        }
        _ => None,
    }
}

/// Resolves the comma shorthand: `<fg,bg>` or `<style,fg,bg>`.
///
/// Empty fields are skipped; every non-empty field must resolve against its
/// table. The result concatenates the resolved fields in style, foreground,
/// background order.
pub(crate) fn resolve_shorthand(tag: &str) -> Option<String> {
    let fields: Vec<&str> = tag.split(',').collect();
    let (style, fg, bg) = match fields.as_slice() {
        [fg, bg] => (None, *fg, *bg),
        [style, fg, bg] => (Some(*style), *fg, *bg),
        _ => return None,
    };

    let mut fragment = String::new();
    if let Some(style) = style {
        if !style.is_empty() {
            fragment.push_str(codes::STYLE.get(style)?);
        }
    }
    if !fg.is_empty() {
        fragment.push_str(codes::FOREGROUND.get(fg)?);
    }
    if !bg.is_empty() {
        fragment.push_str(codes::BACKGROUND.get(bg.to_uppercase().as_str())?);
    }
    Some(fragment)
}
