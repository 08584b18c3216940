// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset just past the first `chars` characters of `text`.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(idx, _)| idx)
}

/// Splits `text` into lines of at most `width` characters.
///
/// A line breaks after the last space that fits, or hard at `width` when there is none.
/// Spaces stay on the line they end, so the lines concatenate back to `text`.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut rest = text;

    while text_len(rest) > width {
        let window = &rest[..byte_offset(rest, width)];
        let split = match memchr::memrchr(b' ', window.as_bytes()) {
            Some(space) if space > 0 => space + 1,
            _ => window.len(),
        };
        let (line, tail) = rest.split_at(split);
        lines.push(line);
        rest = tail;
    }
    if !rest.is_empty() || lines.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Column offset that centres `text` in `width` cells; zero when it does not fit.
pub(crate) fn centre_offset(text: &str, width: usize) -> usize {
    width.saturating_sub(text_len(text)) / 2
}

/// Cuts `text` to `max_len` characters, marking the cut with a trailing `~`.
pub(crate) fn truncate_marked(text: &str, max_len: usize) -> String {
    if text_len(text) <= max_len {
        return text.to_owned();
    }
    match max_len {
        0 => String::new(),
        1 => "~".to_owned(),
        _ => {
            let mut out = text[..byte_offset(text, max_len - 1)].to_owned();
            out.push('~');
            out
        }
    }
}
