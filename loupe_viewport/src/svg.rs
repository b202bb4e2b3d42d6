// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG documents without an intrinsic size.
//!
//! A document that only carries a `viewBox` has no natural size, so a host
//! rasterizer cannot report one. [`fix_dimensions`] gives such documents an
//! explicit `width` and `height` derived from the `viewBox` before decoding.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

/// Multiplier from `viewBox` units to natural pixels.
pub const VIEWBOX_SCALE: f64 = 96.0;

/// Adds `width` and `height` to the root `<svg>` tag when both are missing.
///
/// The new size is the `viewBox` size times [`VIEWBOX_SCALE`]. Documents that
/// already declare a numeric size, or whose `viewBox` is not four
/// space-separated numbers, are returned unchanged.
///
/// ```
/// use loupe_viewport::svg::fix_dimensions;
///
/// let doc = r#"<svg viewBox="0 0 2 1.5"><rect/></svg>"#;
/// assert_eq!(
///     fix_dimensions(doc),
///     r#"<svg viewBox="0 0 2 1.5" width="192" height="144" ><rect/></svg>"#
/// );
///
/// let sized = r#"<svg width="10" height="10" viewBox="0 0 1 1"/>"#;
/// assert_eq!(fix_dimensions(sized), sized);
/// ```
#[must_use]
pub fn fix_dimensions(doc: &str) -> Cow<'_, str> {
    let Some((start, end)) = root_tag(doc) else {
        return Cow::Borrowed(doc);
    };
    let head = &doc[start..end];
    if numeric_attr(head, "width").is_some() && numeric_attr(head, "height").is_some() {
        return Cow::Borrowed(doc);
    }
    let Some(view_box) = attr(head, "viewBox").filter(|v| is_view_box_text(v)) else {
        return Cow::Borrowed(doc);
    };
    let mut parts = view_box.split(' ');
    let (Some(_), Some(_), Some(w), Some(h), None) =
        (parts.next(), parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Cow::Borrowed(doc);
    };
    let (Ok(w), Ok(h)) = (w.parse::<f64>(), h.parse::<f64>()) else {
        return Cow::Borrowed(doc);
    };

    // Insert just before the tag closes, keeping a self-closing slash last.
    let close = if head.ends_with("/>") { end - 2 } else { end - 1 };
    let mut fixed = String::with_capacity(doc.len() + 40);
    fixed.push_str(&doc[..close]);
    fixed.push_str(&format!(
        " width=\"{}\" height=\"{}\" ",
        w * VIEWBOX_SCALE,
        h * VIEWBOX_SCALE
    ));
    fixed.push_str(&doc[close..]);
    Cow::Owned(fixed)
}

/// Byte range of the first `<svg ...>` tag, including both brackets.
fn root_tag(doc: &str) -> Option<(usize, usize)> {
    let start = doc.find("<svg")?;
    let len = doc[start..].find('>')?;
    Some((start, start + len + 1))
}

/// Value of `name="..."` in `head`, requiring a word boundary before `name`.
fn attr<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = head;
    loop {
        let at = rest.find(name)?;
        let before = rest[..at].chars().next_back();
        let after = &rest[at + name.len()..];
        if before.is_some_and(char::is_whitespace)
            && let Some(value) = after.strip_prefix("=\"")
        {
            let close = value.find('"')?;
            return Some(&value[..close]);
        }
        rest = after;
    }
}

fn numeric_attr<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    attr(head, name).filter(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

fn is_view_box_text(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ' ')
}
