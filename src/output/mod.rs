//! Output generation for the technique-scanner CLI application

use serde::Serialize;
use tinytemplate::{error::Error, format_unescaped, TinyTemplate};
use tracing::debug;

use crate::scanning::Boundary;

static TEMPLATE: &'static str = "{{ for boundary in boundaries }}{boundary.line}:{boundary.offset} {boundary.name}
{{ endfor }}";

#[derive(Serialize)]
struct Context<'a, 'i> {
    filename: &'a str,
    boundaries: &'a [Boundary<'i>],
}

/// Render the list of boundaries found in a file, one per line, as
/// `line:offset name`.
pub fn boundaries_listing(filename: &str, boundaries: &[Boundary]) -> Result<String, Error> {
    debug!("Rendering {} boundaries from {}", boundaries.len(), filename);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("boundaries", TEMPLATE)?;

    let context = Context {
        filename,
        boundaries,
    };

    tt.render("boundaries", &context)
}
