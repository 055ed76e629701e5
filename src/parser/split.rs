use regex::Regex;

/// Split `text` at every match of `boundary`, keeping the part of the match
/// captured by the `next` group as the start of the following segment
///
/// Text matched before `next` is dropped. Patterns without a `next` group
/// behave like a plain split that consumes the whole match.
pub fn split_retaining<'a>(text: &'a str, boundary: &Regex) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for caps in boundary.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        segments.push(&text[start..whole.start()]);
        start = caps.name("next").map_or(whole.end(), |next| next.start());
    }

    segments.push(&text[start..]);
    segments
}
