use std::num::NonZeroUsize;

/// Reflow a flat character stream into lines of `width` characters
///
/// Every line is terminated with `'\n'`. A trailing chunk shorter than
/// `width` is kept as its own final line rather than dropped.
pub fn assemble_lines(chars: &[char], width: NonZeroUsize) -> String {
    let width = width.get();
    let rows = chars.len().div_ceil(width);
    let mut text = String::with_capacity(chars.len() + rows);

    for line in chars.chunks(width) {
        text.extend(line);
        text.push('\n');
    }

    text
}
