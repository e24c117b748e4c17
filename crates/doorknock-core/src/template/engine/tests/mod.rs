//! Tests for the template engine, split by concern

use super::*;

mod helpers;

mod tokenstream;

mod render_loops;

mod errors;
mod timeouts;
