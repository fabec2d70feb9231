use super::{normalize_handle, Post};
use tracing::debug;

/// Parse the plain text feed format into posts.
///
/// ```text
/// @handle: Post text
/// continuation of the same post
/// ---
/// @other: Next post
/// ```
///
/// A header is `@` plus a single whitespace-free token, then `:`. Posts are
/// separated by `---` or a blank line. Text outside a post is skipped.
pub fn parse_posts(input: &str) -> Vec<Post> {
    let mut posts = Vec::new();
    let mut current: Option<(String, String)> = None; // (handle, text)

    for (number, line) in input.lines().enumerate() {
        let line = line.trim();

        if let Some((handle, text)) = split_header(line) {
            finish(&mut posts, current.take());
            current = Some((normalize_handle(handle), text.trim().to_string()));
            continue;
        }

        if line == "---" || line.is_empty() {
            finish(&mut posts, current.take());
        } else if let Some((_, text)) = current.as_mut() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(line);
        } else {
            debug!(line = number + 1, "skipping text outside a post");
        }
    }

    finish(&mut posts, current);
    posts
}

fn split_header(line: &str) -> Option<(&str, &str)> {
    let (handle, text) = line.split_once(':')?;
    let name = handle.strip_prefix('@')?;
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return None;
    }
    Some((handle, text))
}

fn finish(posts: &mut Vec<Post>, entry: Option<(String, String)>) {
    if let Some((handle, text)) = entry {
        if text.is_empty() {
            return;
        }
        let id = format!("text-{}", posts.len() + 1);
        posts.push(Post {
            handle: Some(handle),
            ..Post::new(id, text)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posts() {
        let input = "@user1: This is a post\n---\n@user2: Another post";
        let posts = parse_posts(input);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].handle.as_deref(), Some("@user1"));
        assert_eq!(posts[0].content, "This is a post");
        assert_eq!(posts[1].id, "text-2");
        assert_eq!(posts[1].username, None);
    }

    #[test]
    fn test_parse_multiline_post() {
        let input = "@user1: This is a long post\nthat spans multiple lines\n";
        let posts = parse_posts(input);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "This is a long post that spans multiple lines");
    }

    #[test]
    fn test_blank_line_separates() {
        let input = "@a: one\n\n@b: two\n\n\n";
        let posts = parse_posts(input);
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_new_author_line_finishes_previous() {
        let posts = parse_posts("@a: one\n@b: two");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "one");
    }

    #[test]
    fn test_empty_post_is_skipped() {
        let posts = parse_posts("@a:\n---\n@b: kept");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].handle.as_deref(), Some("@b"));
        assert_eq!(posts[0].id, "text-1");
    }

    #[test]
    fn test_mention_with_colon_is_continuation() {
        let posts = parse_posts("@a: meet\n@alice check https://x\n---\n@b: at 10:30");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].handle.as_deref(), Some("@a"));
        assert_eq!(posts[0].content, "meet @alice check https://x");
        assert_eq!(posts[1].handle.as_deref(), Some("@b"));
        assert_eq!(posts[1].content, "at 10:30");
    }

    #[test]
    fn test_bare_at_is_not_a_header() {
        let posts = parse_posts("@a: hi\n@: nobody");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "hi @: nobody");
    }

    #[test]
    fn test_stray_text_after_blank_line_is_skipped() {
        let posts = parse_posts("@a: one\n\nstray words\n@b: two");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "one");
        assert_eq!(posts[1].content, "two");
    }

    #[test]
    fn test_preamble_ignored() {
        let posts = parse_posts("# my feed\n\n@a: hi");
        assert_eq!(posts.len(), 1);
    }
}
