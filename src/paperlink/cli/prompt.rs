//! Interactive form for `paperlink create`.

use console::{style, Term};
use paperlink::commands::create::PaperForm;
use std::io;

const FIELDS: [(&str, &str); 5] = [
    ("Paper ID", "required"),
    ("Title", "optional"),
    ("Authors", "optional"),
    ("Year", "publication year"),
    ("DOI", "digital object identifier"),
];

/// Ask for every field not already given on the command line.
pub(super) fn fill_form(given: PaperForm) -> io::Result<PaperForm> {
    let term = Term::stderr();
    let PaperForm {
        id,
        title,
        authors,
        year,
        doi,
    } = given;

    let mut values = [id, title, authors, year, doi];
    for (value, (label, hint)) in values.iter_mut().zip(FIELDS) {
        if value.trim().is_empty() {
            term.write_str(&format!("{} {}: ", style(label).bold(), style(format!("({})", hint)).dim()))?;
            *value = term.read_line()?;
        }
    }

    let [id, title, authors, year, doi] = values;
    Ok(PaperForm {
        id,
        title,
        authors,
        year,
        doi,
    })
}
