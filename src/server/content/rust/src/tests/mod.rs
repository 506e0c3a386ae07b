/* src/server/content/rust/src/tests/mod.rs */

use super::*;
