//! The downloadable CSV template and lead export in the same layout.

use crate::error::ImportResult;
use crate::types::Lead;

/// Column headers of the template, in order.
pub const TEMPLATE_HEADERS: [&str; 7] = [
    "Company Name",
    "Owner Name",
    "Phone",
    "Niche",
    "Website Status",
    "Notes",
    "Stage",
];

/// Literal template offered to users as a starting point for their spreadsheets.
pub const TEMPLATE_CSV: &str = "\
Company Name,Owner Name,Phone,Niche,Website Status,Notes,Stage
ABC Plumbing,John Smith,5551234567,Plumbing,Basic,Called last week,cold
Cool Air HVAC,Jane Doe,5559876543,HVAC,None,Interested in demo,contacted
";

/// Write `leads` as CSV in the template layout.
///
/// Niche and website status are written by canonical name, stage by identifier, so
/// re-importing the output reproduces the same categorical values.
///
/// Fields containing commas are quoted, which the import tokenizer understands. Apostrophes,
/// embedded `"` characters and line breaks in free-text fields do not survive a round trip.
pub fn export_leads_csv(leads: &[Lead]) -> ImportResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(TEMPLATE_HEADERS)?;
    for lead in leads {
        wtr.write_record([
            lead.company_name.as_str(),
            lead.owner_name.as_str(),
            lead.phone.as_str(),
            lead.niche.as_str(),
            lead.website_status.as_str(),
            lead.notes.as_str(),
            lead.stage.id(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
