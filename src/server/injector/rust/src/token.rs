/* src/server/injector/rust/src/token.rs */

#[derive(Debug)]
pub(crate) enum Token<'a> {
  Text(&'a str),
  Marker(&'a str), // directive body between <!--pk: and -->
}

pub(crate) const MARKER_OPEN: &str = "<!--pk:";
pub(crate) const MARKER_CLOSE: &str = "-->";

pub(crate) fn tokenize(skeleton: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut rest = skeleton;

  while !rest.is_empty() {
    let Some(start) = rest.find(MARKER_OPEN) else {
      tokens.push(Token::Text(rest));
      break;
    };
    if start > 0 {
      tokens.push(Token::Text(&rest[..start]));
    }
    let body = &rest[start + MARKER_OPEN.len()..];
    match body.find(MARKER_CLOSE) {
      Some(end) => {
        tokens.push(Token::Marker(body[..end].trim()));
        rest = &body[end + MARKER_CLOSE.len()..];
      }
      None => {
        // Unterminated marker is kept verbatim
        tokens.push(Token::Text(&rest[start..]));
        break;
      }
    }
  }

  tokens
}

#[cfg(test)]
mod tests {
  use super::*;

  fn describe(tokens: &[Token<'_>]) -> Vec<String> {
    tokens
      .iter()
      .map(|t| match t {
        Token::Text(s) => format!("T({s})"),
        Token::Marker(s) => format!("M({s})"),
      })
      .collect()
  }

  #[test]
  fn empty_skeleton() {
    assert!(tokenize("").is_empty());
  }

  #[test]
  fn plain_html() {
    assert_eq!(describe(&tokenize("<p>hi</p>")), vec!["T(<p>hi</p>)"]);
  }

  #[test]
  fn marker_between_text() {
    assert_eq!(
      describe(&tokenize("<h1><!--pk:hero.title--></h1>")),
      vec!["T(<h1>)", "M(hero.title)", "T(</h1>)"]
    );
  }

  #[test]
  fn adjacent_markers() {
    assert_eq!(describe(&tokenize("<!--pk:a--><!--pk:b-->")), vec!["M(a)", "M(b)"]);
  }

  #[test]
  fn marker_body_is_trimmed() {
    assert_eq!(describe(&tokenize("<!--pk: each:logos -->")), vec!["M(each:logos)"]);
  }

  #[test]
  fn unterminated_marker_is_text() {
    assert_eq!(describe(&tokenize("a<!--pk:oops")), vec!["T(a)", "T(<!--pk:oops)"]);
  }

  #[test]
  fn ordinary_comments_are_text() {
    assert_eq!(describe(&tokenize("<!-- note -->")), vec!["T(<!-- note -->)"]);
  }
}
