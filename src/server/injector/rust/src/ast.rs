/* src/server/injector/rust/src/ast.rs */

use pagekit_content::Path;

#[derive(Debug)]
pub(crate) enum Node {
  Text(String),
  Slot { path: Path, raw: bool },
  Attr { path: Path, name: String },
  If { path: Path, then_nodes: Vec<Node>, else_nodes: Vec<Node> },
  Each { path: Path, body: Vec<Node> },
}
